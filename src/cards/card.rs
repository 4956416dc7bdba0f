use super::rank::Rank;
use super::suit::Suit;
use crate::Error;
use std::str::FromStr;

/// A playing card.
///
/// Two cards with the same suit and rank are the same card; a full deck
/// holds exactly one of each. Cards order by rank first, then suit, which is
/// the order hands are displayed in.
///
/// # Parsing
///
/// The text form is the suit code followed by the decimal rank, e.g. `"H1"`
/// (ace of hearts) or `"S13"` (king of spades). The same form is used on
/// the wire, so [`Card`] serializes as that string.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// (Suit, Rank) isomorphism
impl From<(Suit, Rank)> for Card {
    fn from((suit, rank): (Suit, Rank)) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next()
            .ok_or_else(|| Error::InvalidCard(s.to_string()))
            .and_then(Suit::try_from)
            .map_err(|_| Error::InvalidCard(s.to_string()))?;
        let rank = Rank::try_from(chars.as_str()).map_err(|_| Error::InvalidCard(s.to_string()))?;
        Ok(Card::from((suit, rank)))
    }
}
impl FromStr for Card {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::try_from(s)
    }
}

impl Card {
    /// Parses whitespace-separated cards, e.g. `"H1 S13 D7"`.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.split_whitespace().map(Card::try_from).collect()
    }
}

impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
