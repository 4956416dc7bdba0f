use crate::Position;
use crate::cards::*;

/// What the acting seat answers when it may either discard or challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Discard(Vec<Card>),
    Challenge,
}

/// The winning result of a race, stamped with who produced it.
///
/// The Room acts on the shape alone: cards are always the acting seat's
/// discard, a challenge carries the challenger's seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Discard(Vec<Card>),
    Challenge(Position),
}

impl Decision {
    /// Tags the acting seat's answer with its position.
    pub fn stamp(choice: Choice, pos: Position) -> Self {
        match choice {
            Choice::Discard(cards) => Decision::Discard(cards),
            Choice::Challenge => Decision::Challenge(pos),
        }
    }
}

/// The state transition a finished step applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Discard {
        seat: Position,
        cards: usize,
    },
    Bluff {
        caller: Position,
        callee: Position,
        correct: bool,
    },
}
