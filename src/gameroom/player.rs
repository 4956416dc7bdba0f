use super::decision::*;
use crate::cards::*;
use crate::gameplay::*;

/// Trait for anything that makes decisions for a seat.
/// Implementations can be CPU players, network clients over a WebSocket
/// bridge, scripted test players, etc.
///
/// The Room races several of these futures against each other and drops
/// the losers, so every method must be cancel-safe: a dropped call may not
/// leave the player in a state where a later call misbehaves.
///
/// Input errors (malformed messages, cards the seat does not hold) are the
/// player's own business. Implementations keep waiting and never surface
/// them to the Room.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Choose cards to discard under the current claim.
    /// Asked for the opening discard and after a challenge resolves, when
    /// there is nothing to contest.
    async fn play_turn(&mut self, recall: &Recall) -> Vec<Card>;
    /// Discard, or challenge the standing claim.
    /// Asked of the seat whose turn it is while a discard is open.
    async fn play_turn_or_challenge(&mut self, recall: &Recall) -> Choice;
    /// Resolves only if this seat calls the standing claim a bluff.
    /// A player with no intention of challenging should never resolve and
    /// simply wait to be cancelled.
    async fn challenge(&mut self, recall: &Recall);
    /// Receive a fresh view after every state change.
    async fn notify(&mut self, recall: &Recall);
}
