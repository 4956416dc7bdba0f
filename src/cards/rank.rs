use crate::Error;
use std::cmp::Ordering;

/// A claimable rank, 1 (ace) through 13 (king).
///
/// Ranks form a cycle: the rank after a king is an ace and the rank before
/// an ace is a king. The inner value is private so a `Rank` is always in
/// range; every constructor goes through [`Rank::try_from`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const MIN: Self = Rank(1);
    pub const MAX: Self = Rank(13);
    /// The claim every sequence starts from, and restarts from after a
    /// challenge resolves.
    pub const BASE: Self = Self::MIN;

    /// Next rank in the claim cycle.
    pub fn increment(self) -> Self {
        match self {
            Self::MAX => Self::MIN,
            Rank(n) => Rank(n + 1),
        }
    }
    /// Previous rank in the claim cycle.
    pub fn decrement(self) -> Self {
        match self {
            Self::MIN => Self::MAX,
            Rank(n) => Rank(n - 1),
        }
    }
    /// All thirteen ranks in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Rank)
    }
}

impl Default for Rank {
    fn default() -> Self {
        Self::BASE
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Rank {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=13 => Ok(Rank(n)),
            _ => Err(Error::InvalidRank(n)),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.0
    }
}

/// str isomorphism, ASCII digits only, no sign, no leading zeros
impl TryFrom<&str> for Rank {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let canonical = !s.is_empty() && !s.starts_with('0') && s.bytes().all(|b| b.is_ascii_digit());
        match canonical {
            false => Err(Error::InvalidCard(s.to_string())),
            true => s
                .parse::<u8>()
                .map_err(|_| Error::InvalidCard(s.to_string()))
                .and_then(Rank::try_from),
        }
    }
}

impl PartialEq<u8> for Rank {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}
impl PartialOrd<u8> for Rank {
    fn partial_cmp(&self, other: &u8) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl serde::Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
