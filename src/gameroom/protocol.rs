use crate::cards::*;
use crate::gameplay::*;
use serde::Deserialize;

/// Errors at the wire boundary. Never fatal: the receiving seat logs them
/// and keeps waiting for the next frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed frame: {0}")]
    Malformed(String),
    #[error("unexpected frame: {0}")]
    Unexpected(String),
    #[error("illegal discard: {0}")]
    Illegal(String),
    #[error("cannot encode view: {0}")]
    Unencodable(String),
}

/// What a client asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Discard(Vec<Card>),
    Callout,
}

/// Inbound JSON text frame. Anything else the client attaches, such as the
/// `data` transcript, is ignored.
#[derive(Debug, Deserialize)]
struct Frame {
    discard: Option<Vec<String>>,
    callout: Option<bool>,
}

/// Conversion between wire frames and engine types.
pub struct Protocol;

impl Protocol {
    /// Serializes a view for the wire.
    pub fn encode(recall: &Recall) -> Result<String, ProtocolError> {
        recall
            .to_json()
            .map_err(|e| ProtocolError::Unencodable(e.to_string()))
    }
    /// Parses a client frame. A discard wins over a callout when a frame
    /// carries both; `"callout": false` asks for nothing.
    pub fn decode(s: &str) -> Result<Request, ProtocolError> {
        let frame = serde_json::from_str::<Frame>(s)
            .map_err(|e| ProtocolError::Malformed(e.to_string()))?;
        match (frame.discard, frame.callout) {
            (Some(cards), _) => cards
                .iter()
                .map(|c| Card::try_from(c.as_str()))
                .collect::<Result<Vec<Card>, _>>()
                .map(Request::Discard)
                .map_err(|e| ProtocolError::Malformed(e.to_string())),
            (None, Some(true)) => Ok(Request::Callout),
            _ => Err(ProtocolError::Unexpected(s.to_string())),
        }
    }
    /// Checks a discard against the hand the seat was shown.
    pub fn validate(request: Request, recall: &Recall) -> Result<Request, ProtocolError> {
        match request {
            Request::Discard(ref cards) if !recall.holds(cards) => Err(ProtocolError::Illegal(
                cards
                    .iter()
                    .map(Card::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            )),
            request => Ok(request),
        }
    }
}
