use crate::ROBOT_PATIENCE;
use crate::cards::*;
use crate::gameplay::*;
use crate::gameroom::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::time::Duration;

/// Simple CPU player.
///
/// Plays every card of the claimed rank it holds, or bluffs with a single
/// random card when it has none. It calls a bluff only when the claim is
/// impossible given its own hand: more than four cards of one rank between
/// the claim and what it holds. A robot with something to say waits out its
/// patience first, so faster players get to answer.
pub struct Robot {
    rng: SmallRng,
    patience: Duration,
}

impl Robot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            patience: ROBOT_PATIENCE,
        }
    }
    pub fn patience(mut self, patience: Duration) -> Self {
        self.patience = patience;
        self
    }
    fn discard(&mut self, recall: &Recall) -> Vec<Card> {
        let honest = recall
            .hand()
            .iter()
            .filter(|c| c.rank() == recall.rank())
            .copied()
            .collect::<Vec<Card>>();
        match honest.is_empty() {
            false => honest,
            true => recall
                .hand()
                .choose(&mut self.rng)
                .copied()
                .into_iter()
                .collect(),
        }
    }
    fn doubts(recall: &Recall) -> bool {
        recall.claim().is_some_and(|claim| {
            let held = recall
                .hand()
                .iter()
                .filter(|c| c.rank() == claim.rank)
                .count();
            held + claim.cards > Suit::all().len()
        })
    }
}

#[async_trait::async_trait]
impl Player for Robot {
    async fn play_turn(&mut self, recall: &Recall) -> Vec<Card> {
        self.discard(recall)
    }
    async fn play_turn_or_challenge(&mut self, recall: &Recall) -> Choice {
        match Self::doubts(recall) {
            true => Choice::Challenge,
            false => Choice::Discard(self.discard(recall)),
        }
    }
    async fn challenge(&mut self, recall: &Recall) {
        match Self::doubts(recall) {
            true => tokio::time::sleep(self.patience).await,
            false => std::future::pending().await,
        }
    }
    async fn notify(&mut self, _: &Recall) {}
}
