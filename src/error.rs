use thiserror::Error;

/// Everything that can go wrong while building or driving a match.
///
/// Protocol violations (bad cards, bad ranks) are rejected before any state
/// is touched. Structural errors mean the match cannot be started or
/// continued; the Room never retries either kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("rank {0} is outside 1..=13")]
    InvalidRank(u8),
    #[error("unknown suit code {0:?}")]
    InvalidSuit(String),
    #[error("cannot parse card from {0:?}")]
    InvalidCard(String),
    #[error("{player} does not hold {card}")]
    CardNotInHand { player: String, card: String },
    #[error("turn queue is empty")]
    EmptyQueue,
    #[error("need at least {needed} players, have {seated}")]
    NotEnoughPlayers { needed: usize, seated: usize },
    #[error("no discard to challenge")]
    NoDiscardToChallenge,
    #[error("{0} cannot challenge their own claim")]
    SelfChallenge(String),
    #[error("got {hands} hands for {seats} seats")]
    MismatchedHands { hands: usize, seats: usize },
    #[error("no seat at position {0}")]
    UnknownSeat(usize),
    #[error("a player named {0} is already seated")]
    DuplicatePlayer(String),
    #[error("match already in progress")]
    AlreadyPlaying,
    #[error("match has not started")]
    NotPlaying,
}

pub type Result<T> = std::result::Result<T, Error>;
