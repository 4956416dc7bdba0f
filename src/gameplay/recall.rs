use super::action::Action;
use super::game::Game;
use crate::Error;
use crate::Position;
use crate::cards::*;
use serde::Serialize;

/// Everything one seat is allowed to see, from that seat's point of view.
///
/// Produced by the Room after the deal and after every discard and
/// challenge, handed to decision sources both as the input to a decision and
/// as a notification. Serializes to the JSON shape the web client expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recall {
    name: String,
    hand: Vec<Card>,
    #[serde(rename = "stack-size")]
    pile: usize,
    #[serde(rename = "player_info")]
    opponents: Vec<Opponent>,
    #[serde(rename = "waiting-for")]
    waiting: String,
    #[serde(rename = "own-turn")]
    own_turn: bool,
    #[serde(rename = "current_rank")]
    rank: Rank,
    log: Vec<String>,
    claim: Option<Claim>,
}

/// Public information about another seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opponent {
    pub name: String,
    pub cards: usize,
    #[serde(rename = "last-discard")]
    pub last: usize,
}

/// The discard currently open to challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    pub player: String,
    pub cards: usize,
    pub rank: Rank,
}

impl Game {
    /// Projects the game onto what `pos` can see.
    pub fn recall(&self, pos: Position) -> Result<Recall, Error> {
        let seat = self.seat(pos)?;
        let waiting = self.seat(self.rotation().current()?)?.name().to_string();
        let mut hand = seat.hand().to_vec();
        hand.sort();
        Ok(Recall {
            own_turn: waiting == seat.name(),
            name: seat.name().to_string(),
            hand,
            pile: self.pile().len(),
            opponents: self
                .seats()
                .iter()
                .filter(|s| *s != seat)
                .map(|s| Opponent {
                    name: s.name().to_string(),
                    cards: s.hand().len(),
                    last: s.last().len(),
                })
                .collect(),
            waiting,
            rank: self.rank(),
            log: self.history().lines(),
            claim: self.history().challengeable().and_then(|a| match a {
                Action::Discard {
                    player,
                    cards,
                    claim,
                } => Some(Claim {
                    player: player.clone(),
                    cards: cards.len(),
                    rank: *claim,
                }),
                _ => None,
            }),
        })
    }
}

impl Recall {
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Own hand, sorted by rank then suit.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn pile(&self) -> usize {
        self.pile
    }
    pub fn opponents(&self) -> &[Opponent] {
        &self.opponents
    }
    /// Name of the seat whose turn comes up next.
    pub fn waiting(&self) -> &str {
        &self.waiting
    }
    pub fn own_turn(&self) -> bool {
        self.own_turn
    }
    /// The rank the next discard will be claimed as.
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn log(&self) -> &[String] {
        &self.log
    }
    pub fn claim(&self) -> Option<&Claim> {
        self.claim.as_ref()
    }
    /// True if every card is in this seat's hand.
    pub fn holds(&self, cards: &[Card]) -> bool {
        cards.iter().all(|c| self.hand.contains(c))
            && cards.len() == cards.iter().collect::<std::collections::HashSet<_>>().len()
    }
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for Recall {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hand = self
            .hand
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "{}: [{}]  claim {}  pile {}", self.name, hand, self.rank, self.pile)?;
        for o in &self.opponents {
            writeln!(f, "  {:<12}{:>3} cards (last {})", o.name, o.cards, o.last)?;
        }
        match self.own_turn {
            true => write!(f, "your turn"),
            false => write!(f, "waiting for {}", self.waiting),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        let mut game = Game::default();
        game.join("ada").unwrap();
        game.join("bo").unwrap();
        game.join("cy").unwrap();
        game.arrange(vec![
            Card::parse("S3 H1 D2").unwrap(),
            Card::parse("C5").unwrap(),
            Card::parse("C6 C7").unwrap(),
        ])
        .unwrap();
        game
    }

    #[test]
    fn own_hand_sorted() {
        let recall = game().recall(0).unwrap();
        assert_eq!(recall.hand(), Card::parse("H1 D2 S3").unwrap().as_slice());
        assert_eq!(recall.opponents().len(), 2);
        assert!(recall.opponents().iter().all(|o| o.name != "ada"));
    }

    #[test]
    fn tracks_turn_and_claim() {
        let mut game = game();
        let ada = game.next().unwrap();
        game.discard(ada, Card::parse("H1 D2").unwrap()).unwrap();
        let recall = game.recall(1).unwrap();
        assert!(recall.own_turn());
        assert_eq!(recall.waiting(), "bo");
        assert_eq!(recall.pile(), 2);
        assert_eq!(recall.rank(), 2u8);
        assert_eq!(recall.log(), &["ada discarded 2 '1's.".to_string()]);
        let claim = recall.claim().unwrap();
        assert_eq!((claim.player.as_str(), claim.cards, claim.rank), ("ada", 2, Rank::BASE));
        let ada = recall.opponents().iter().find(|o| o.name == "ada").unwrap();
        assert_eq!((ada.cards, ada.last), (1, 2));
        assert!(!game.recall(2).unwrap().own_turn());
    }

    #[test]
    fn holds_rejects_duplicates() {
        let recall = game().recall(0).unwrap();
        assert!(recall.holds(&Card::parse("H1 S3").unwrap()));
        assert!(!recall.holds(&Card::parse("H1 H1").unwrap()));
        assert!(!recall.holds(&Card::parse("C5").unwrap()));
    }

    #[test]
    fn json_shape() {
        let json: serde_json::Value = serde_json::from_str(&game().recall(2).unwrap().to_json().unwrap()).unwrap();
        assert_eq!(json["name"], "cy");
        assert_eq!(json["hand"], serde_json::json!(["C6", "C7"]));
        assert_eq!(json["stack-size"], 0);
        assert_eq!(json["waiting-for"], "ada");
        assert_eq!(json["own-turn"], false);
        assert_eq!(json["current_rank"], 1);
        assert_eq!(json["player_info"][0]["last-discard"], 0);
        assert!(json["claim"].is_null());
    }
}
