use crate::cards::*;
use crate::gameplay::*;
use crate::gameroom::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

/// Network player that communicates via tokio channels.
/// Bridges a WebSocket (or any line-oriented transport) to the Room.
///
/// The tx channel sends JSON views to the remote client.
/// The rx channel receives JSON request frames from the remote client.
pub struct Client {
    tx: UnboundedSender<String>,
    rx: UnboundedReceiver<String>,
}

impl Client {
    pub fn new(tx: UnboundedSender<String>, rx: UnboundedReceiver<String>) -> Self {
        Self { tx, rx }
    }
    /// Reads frames until one decodes, is legal for this seat, and is
    /// accepted by `pick`. Everything else is logged and dropped.
    ///
    /// Once the remote side hangs up this never resolves.
    async fn listen<T, F>(&mut self, recall: &Recall, pick: F) -> T
    where
        F: Fn(Request) -> Option<T>,
    {
        loop {
            let frame = match self.rx.recv().await {
                Some(frame) => frame,
                None => {
                    log::warn!("[client] {} hung up", recall.name());
                    return std::future::pending().await;
                }
            };
            match Protocol::decode(&frame).and_then(|r| Protocol::validate(r, recall)) {
                Err(e) => log::warn!("[client] {}: {}", recall.name(), e),
                Ok(request) => match pick(request) {
                    Some(answer) => return answer,
                    None => log::warn!("[client] {} answered out of turn", recall.name()),
                },
            }
        }
    }
}

#[async_trait::async_trait]
impl Player for Client {
    async fn play_turn(&mut self, recall: &Recall) -> Vec<Card> {
        self.listen(recall, |r| match r {
            Request::Discard(cards) => Some(cards),
            Request::Callout => None,
        })
        .await
    }
    async fn play_turn_or_challenge(&mut self, recall: &Recall) -> Choice {
        self.listen(recall, |r| match r {
            Request::Discard(cards) => Some(Choice::Discard(cards)),
            Request::Callout => Some(Choice::Challenge),
        })
        .await
    }
    async fn challenge(&mut self, recall: &Recall) {
        self.listen(recall, |r| match r {
            Request::Discard(_) => None,
            Request::Callout => Some(()),
        })
        .await
    }
    async fn notify(&mut self, recall: &Recall) {
        match Protocol::encode(recall) {
            Err(e) => log::warn!("[client] {}: {}", recall.name(), e),
            Ok(json) => {
                if self.tx.send(json).is_err() {
                    log::warn!("[client] {} missed a view", recall.name());
                }
            }
        }
    }
}
