use super::Client;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Transport side of a [`Client`] seat.
/// Whatever owns the connection pushes inbound frames into `tx` and drains
/// outbound views from `rx`.
pub struct Handle {
    pub tx: UnboundedSender<String>,
    pub rx: UnboundedReceiver<String>,
}

impl Handle {
    /// Creates paired channels.
    /// Returns the handle (for the transport) and client player (for the Room).
    pub fn pair() -> (Self, Client) {
        let (tx_outgoing, rx_outgoing) = unbounded_channel::<String>();
        let (tx_incoming, rx_incoming) = unbounded_channel::<String>();
        let client = Client::new(tx_outgoing, rx_incoming);
        let handle = Self {
            tx: tx_incoming,
            rx: rx_outgoing,
        };
        (handle, client)
    }
}
