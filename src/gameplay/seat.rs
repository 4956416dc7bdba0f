use crate::Error;
use crate::cards::*;

/// A player's place at the table: identity and cards.
///
/// Seats compare equal by name. The decision source behind a seat lives in
/// the Room; a seat only holds what the engine needs to enforce the rules.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    hand: Vec<Card>,
    last: Vec<Card>,
    bluffed: bool,
}

impl Seat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            last: Vec::new(),
            bluffed: false,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    /// The cards this seat discarded most recently.
    pub fn last(&self) -> &[Card] {
        &self.last
    }
    /// Whether the seat's standing discard was a lie. Cleared when a
    /// challenge resolves.
    pub fn bluffed(&self) -> bool {
        self.bluffed
    }
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }
    pub fn take(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }
    /// Removes every card from the hand, or none of them.
    /// A card listed twice must be held twice, which never happens in a
    /// single deck, so duplicates are rejected too.
    pub fn remove(&mut self, cards: &[Card]) -> Result<(), Error> {
        let mut hand = self.hand.clone();
        for card in cards {
            match hand.iter().position(|c| c == card) {
                Some(i) => {
                    hand.swap_remove(i);
                }
                None => {
                    return Err(Error::CardNotInHand {
                        player: self.name.clone(),
                        card: card.to_string(),
                    });
                }
            }
        }
        self.hand = hand;
        Ok(())
    }
    pub(crate) fn discarded(&mut self, cards: Vec<Card>, bluffed: bool) {
        self.last = cards;
        self.bluffed = bluffed;
    }
    pub(crate) fn forgive(&mut self) {
        self.bluffed = false;
    }
}

impl PartialEq for Seat {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Seat {}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<12}{:>3} cards", self.name, self.hand.len())
    }
}
