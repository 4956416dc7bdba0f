use super::action::Action;
use super::history::History;
use super::rotation::Rotation;
use super::seat::Seat;
use crate::Error;
use crate::Position;
use crate::cards::*;
use rand::Rng;

/// Authoritative state of one match.
///
/// Owned by exactly one Room, which is the only thing that mutates it.
/// Once dealt, every card is either in exactly one hand or in the pending
/// pile, and the claimed rank is always a valid [`Rank`].
#[derive(Debug, Clone, Default)]
pub struct Game {
    playing: bool,
    rank: Rank,
    pile: Vec<Card>,
    history: History,
    rotation: Rotation,
}

impl Game {
    /// Seats a new player. Names must be unique and the match must not have
    /// started yet.
    pub fn join(&mut self, name: impl Into<String>) -> Result<Position, Error> {
        let name = name.into();
        if self.playing {
            return Err(Error::AlreadyPlaying);
        }
        if self.rotation.position(&name).is_some() {
            return Err(Error::DuplicatePlayer(name));
        }
        self.rotation.add(Seat::new(name));
        Ok(self.rotation.len() - 1)
    }
    /// Shuffles a full deck and deals all of it. Every seat gets
    /// `52 / n` cards and the remainder goes one each to the first seats.
    pub fn deal<R>(&mut self, rng: &mut R) -> Result<(), Error>
    where
        R: Rng + ?Sized,
    {
        let n = self.rotation.len();
        if n == 0 {
            return Err(Error::EmptyQueue);
        }
        let mut deck = Deck::new();
        deck.shuffle(rng);
        let each = deck.len() / n;
        let mut hands = vec![Vec::with_capacity(each + 1); n];
        for hand in hands.iter_mut() {
            hand.extend(std::iter::from_fn(|| deck.draw()).take(each));
        }
        for (hand, card) in hands.iter_mut().zip(std::iter::from_fn(|| deck.draw())) {
            hand.push(card);
        }
        self.arrange(hands)
    }
    /// Starts the match with the given hands instead of a shuffled deck.
    /// One hand per seat, in seat order.
    pub fn arrange(&mut self, hands: Vec<Vec<Card>>) -> Result<(), Error> {
        if self.playing {
            return Err(Error::AlreadyPlaying);
        }
        if self.rotation.is_empty() {
            return Err(Error::EmptyQueue);
        }
        if hands.len() != self.rotation.len() {
            return Err(Error::MismatchedHands {
                hands: hands.len(),
                seats: self.rotation.len(),
            });
        }
        for (pos, hand) in hands.into_iter().enumerate() {
            self.rotation.seat_mut(pos)?.take(hand);
        }
        self.playing = true;
        log::info!("[game] dealt {} cards to {} seats", self.cards().len(), self.rotation.len());
        Ok(())
    }
    /// Advances the rotation, returning whose turn begins.
    pub fn next(&mut self) -> Result<Position, Error> {
        self.rotation.next()
    }
    /// Moves the given cards from the seat's hand to the pile under the
    /// current claim, then bumps the claim.
    ///
    /// Fails without touching anything if a card is not in the hand.
    pub fn discard(&mut self, pos: Position, cards: Vec<Card>) -> Result<(), Error> {
        if !self.playing {
            return Err(Error::NotPlaying);
        }
        let claim = self.rank;
        let seat = self.rotation.seat_mut(pos)?;
        seat.remove(&cards)?;
        let action = Action::Discard {
            player: seat.name().to_string(),
            cards: cards.clone(),
            claim,
        };
        seat.discarded(cards.clone(), !action.is_valid());
        log::debug!("[game] {} (truth: {})", action, Self::show(&cards));
        self.pile.extend(cards);
        self.history.push(action);
        self.rank = self.rank.increment();
        Ok(())
    }
}

impl Game {
    pub fn is_playing(&self) -> bool {
        self.playing
    }
    /// The rank the next discard will be claimed as.
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }
    pub fn seats(&self) -> &[Seat] {
        self.rotation.seats()
    }
    pub fn seat(&self, pos: Position) -> Result<&Seat, Error> {
        self.rotation.seat(pos)
    }
    /// Every card in play: all hands plus the pile.
    pub fn cards(&self) -> Vec<Card> {
        self.seats()
            .iter()
            .flat_map(|s| s.hand().iter().copied())
            .chain(self.pile.iter().copied())
            .collect()
    }
}

impl Game {
    pub(super) fn rotation_mut(&mut self) -> &mut Rotation {
        &mut self.rotation
    }
    pub(super) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
    pub(super) fn take_pile(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.pile)
    }
    pub(super) fn reset_rank(&mut self) {
        self.rank = Rank::BASE;
    }
    #[cfg(test)]
    pub(crate) fn set_rank(&mut self, rank: Rank) {
        self.rank = rank;
    }
    fn show(cards: &[Card]) -> String {
        cards
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "claim {:>2}  pile {:>2}", self.rank, self.pile.len())?;
        self.seats().iter().try_for_each(|s| writeln!(f, "{}", s))
    }
}
