use crate::cards::*;

/// One entry in the match log.
///
/// Players are referred to by name, which is unique within a match.
/// A `Discard` records the cards that physically left the hand next to the
/// rank that was claimed for them; the two may disagree, which is the bluff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Pass {
        player: String,
    },
    Discard {
        player: String,
        cards: Vec<Card>,
        claim: Rank,
    },
    CallBluff {
        caller: String,
        callee: String,
        correct: bool,
    },
}

impl Action {
    /// True if this is an honest discard: every card matches the claim.
    /// Non-discards are trivially valid.
    pub fn is_valid(&self) -> bool {
        match self {
            Action::Discard { cards, claim, .. } => cards.iter().all(|c| c.rank() == *claim),
            _ => true,
        }
    }
    pub fn is_discard(&self) -> bool {
        matches!(self, Action::Discard { .. })
    }
    pub fn is_call(&self) -> bool {
        matches!(self, Action::CallBluff { .. })
    }
    /// The player who performed this action.
    pub fn player(&self) -> &str {
        match self {
            Action::Pass { player } | Action::Discard { player, .. } => player,
            Action::CallBluff { caller, .. } => caller,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Pass { player } => write!(f, "{} passed.", player),
            Action::Discard {
                player,
                cards,
                claim,
            } => write!(f, "{} discarded {} '{}'s.", player, cards.len(), claim),
            Action::CallBluff {
                caller,
                callee,
                correct: true,
            } => write!(f, "{} correctly called {}'s bluff.", caller, callee),
            Action::CallBluff {
                caller,
                callee,
                correct: false,
            } => write!(f, "{} incorrectly called {}'s bluff.", caller, callee),
        }
    }
}
