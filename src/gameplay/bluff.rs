use super::action::Action;
use super::game::Game;
use crate::Error;
use crate::Position;
use crate::cards::Rank;

impl Game {
    /// Resolves a challenge against the standing discard.
    ///
    /// Returns whether the challenge was correct, i.e. whether the discard
    /// was a lie. The loser of the exchange picks up the whole pile: the
    /// liar if caught, otherwise the challenger. Either way the claim
    /// sequence restarts from [`Rank::BASE`].
    pub fn call_bluff(&mut self, challenger: Position) -> Result<bool, Error> {
        let (callee, correct) = match self.history().challengeable() {
            Some(discard) => (discard.player().to_string(), !discard.is_valid()),
            None => return Err(Error::NoDiscardToChallenge),
        };
        let caller = self.seat(challenger)?.name().to_string();
        if caller == callee {
            return Err(Error::SelfChallenge(caller));
        }
        let liar = self
            .rotation()
            .position(&callee)
            .ok_or(Error::NoDiscardToChallenge)?;
        let loser = if correct { liar } else { challenger };
        let pile = self.take_pile();
        log::info!(
            "[game] {} challenges {}: {} picks up {} cards",
            caller,
            callee,
            self.seat(loser)?.name(),
            pile.len()
        );
        self.rotation_mut().seat_mut(loser)?.take(pile);
        self.rotation_mut().seat_mut(liar)?.forgive();
        self.reset_rank();
        self.history_mut().push(Action::CallBluff {
            caller,
            callee,
            correct,
        });
        debug_assert!(self.rank() == Rank::BASE);
        Ok(correct)
    }
}
