use super::decision::*;
use super::player::*;
use crate::Error;
use crate::MIN_PLAYERS;
use crate::Position;
use crate::cards::*;
use crate::gameplay::*;
use futures::FutureExt;
use futures::future::BoxFuture;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Where the match loop stands. Read off the last log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing played yet, so nobody can challenge.
    Opening,
    /// A challenge just resolved and nothing is left to contest.
    Forced,
    /// A discard is open to challenge.
    Race,
}

impl From<Option<&Action>> for Phase {
    fn from(last: Option<&Action>) -> Self {
        match last {
            None => Phase::Opening,
            Some(Action::CallBluff { .. }) => Phase::Forced,
            Some(_) => Phase::Race,
        }
    }
}

/// Central coordinator for one live match.
/// Owns the single source of truth (Game) and the decision source of every
/// seat, and arbitrates who gets to act.
///
/// Each step either asks one seat for a plain discard (Opening, Forced) or
/// runs a race: the acting seat may discard or challenge while every other
/// eligible seat may challenge. The first answer wins, the rest are dropped
/// unfinished, and only then is the Game mutated. Exactly one Discard or
/// CallBluff is logged per step.
///
/// No timeouts: a seat can hold its decision open forever.
pub struct Room {
    rng: SmallRng,
    game: Game,
    players: Vec<Box<dyn Player>>,
}

impl Room {
    /// The seed drives the shuffle, so equal seeds deal equal hands.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            game: Game::default(),
            players: Vec::new(),
        }
    }
    pub fn sit<P>(&mut self, name: impl Into<String>, player: P) -> Result<Position, Error>
    where
        P: Player + 'static,
    {
        let pos = self.game.join(name)?;
        self.players.push(Box::new(player));
        log::debug!("[room] seated {} at P{}", self.game.seat(pos)?.name(), pos);
        Ok(pos)
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn phase(&self) -> Phase {
        Phase::from(self.game.history().last())
    }
}

impl Room {
    /// Shuffles, deals, and shows everyone their hand.
    pub async fn start(&mut self) -> Result<(), Error> {
        self.check()?;
        self.game.deal(&mut self.rng)?;
        log::info!("[room] match started with {} players", self.players.len());
        self.broadcast().await
    }
    /// Like [`Room::start`], but with hands chosen by the caller.
    pub async fn start_with(&mut self, hands: Vec<Vec<Card>>) -> Result<(), Error> {
        self.check()?;
        self.game.arrange(hands)?;
        log::info!("[room] match started with {} players", self.players.len());
        self.broadcast().await
    }
    /// Plays forever. Only returns if a seat breaks the rules.
    pub async fn run(mut self) -> Result<std::convert::Infallible, Error> {
        if !self.game.is_playing() {
            self.start().await?;
        }
        loop {
            self.step().await?;
        }
    }
    /// Runs one turn: solicit, race, apply, broadcast.
    ///
    /// Dropping the future while decisions are still pending leaves the
    /// Game untouched. The turn order only advances once a decision applies.
    pub async fn step(&mut self) -> Result<Outcome, Error> {
        if !self.game.is_playing() {
            return Err(Error::NotPlaying);
        }
        let actor = self.game.rotation().current()?;
        let decision = match self.phase() {
            Phase::Opening | Phase::Forced => self.solo(actor).await?,
            Phase::Race => self.race(actor).await?,
        };
        let outcome = self.apply(actor, decision)?;
        log::debug!("[room] {:?}", outcome);
        self.broadcast().await?;
        Ok(outcome)
    }
}

impl Room {
    /// Asks the acting seat for a discard with no challenge possible.
    async fn solo(&mut self, actor: Position) -> Result<Decision, Error> {
        let recall = self.game.recall(actor)?;
        log::debug!("[room] asking P{} for a discard", actor);
        let player = self.players.get_mut(actor).ok_or(Error::UnknownSeat(actor))?;
        Ok(Decision::Discard(player.play_turn(&recall).await))
    }
    /// Races the acting seat's discard-or-challenge against everyone
    /// else's challenge, except the author of the standing claim.
    async fn race(&mut self, actor: Position) -> Result<Decision, Error> {
        let callee = self.callee()?;
        let recalls = (0..self.players.len())
            .map(|pos| self.game.recall(pos))
            .collect::<Result<Vec<Recall>, Error>>()?;
        let mut racers: Vec<BoxFuture<'_, Decision>> = Vec::with_capacity(recalls.len());
        for (pos, (player, recall)) in self.players.iter_mut().zip(recalls.iter()).enumerate() {
            if pos == actor {
                racers.push(
                    async move { Decision::stamp(player.play_turn_or_challenge(recall).await, pos) }
                        .boxed(),
                );
            } else if pos != callee {
                racers.push(
                    async move {
                        player.challenge(recall).await;
                        Decision::Challenge(pos)
                    }
                    .boxed(),
                );
            }
        }
        log::debug!(
            "[room] racing P{} against {} challengers of P{}",
            actor,
            racers.len() - 1,
            callee
        );
        let (decision, _, losers) = futures::future::select_all(racers).await;
        drop(losers);
        Ok(decision)
    }
    /// Commits the winning decision. Nothing in the Game changes before
    /// this point.
    fn apply(&mut self, actor: Position, decision: Decision) -> Result<Outcome, Error> {
        let outcome = match decision {
            Decision::Discard(cards) => {
                let n = cards.len();
                self.game.discard(actor, cards)?;
                Outcome::Discard {
                    seat: actor,
                    cards: n,
                }
            }
            Decision::Challenge(caller) => {
                let callee = self.callee()?;
                let correct = self.game.call_bluff(caller)?;
                Outcome::Bluff {
                    caller,
                    callee,
                    correct,
                }
            }
        };
        self.game.next()?;
        Ok(outcome)
    }
    /// Seat that made the standing claim.
    fn callee(&self) -> Result<Position, Error> {
        self.game
            .history()
            .challengeable()
            .and_then(|a| self.game.rotation().position(a.player()))
            .ok_or(Error::NoDiscardToChallenge)
    }
    fn check(&self) -> Result<(), Error> {
        match self.players.len() {
            0 => Err(Error::EmptyQueue),
            n if n < MIN_PLAYERS => Err(Error::NotEnoughPlayers {
                needed: MIN_PLAYERS,
                seated: n,
            }),
            _ => Ok(()),
        }
    }
    async fn broadcast(&mut self) -> Result<(), Error> {
        for (pos, player) in self.players.iter_mut().enumerate() {
            player.notify(&self.game.recall(pos)?).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DECK_SIZE;
    use crate::players::Robot;
    use std::collections::HashSet;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::sync::mpsc::UnboundedSender;
    use tokio::sync::mpsc::unbounded_channel;

    /// Test player whose every answer is fed through channels.
    struct Puppet {
        turns: UnboundedReceiver<Vec<Card>>,
        calls: UnboundedReceiver<()>,
        views: UnboundedSender<Recall>,
    }

    /// The strings attached to a Puppet.
    struct Strings {
        turns: UnboundedSender<Vec<Card>>,
        calls: UnboundedSender<()>,
        views: UnboundedReceiver<Recall>,
    }

    impl Strings {
        fn discard(&self, cards: &str) {
            self.turns.send(Card::parse(cards).unwrap()).unwrap();
        }
        fn call(&self) {
            self.calls.send(()).unwrap();
        }
    }

    fn puppet() -> (Puppet, Strings) {
        let (turns_tx, turns_rx) = unbounded_channel();
        let (calls_tx, calls_rx) = unbounded_channel();
        let (views_tx, views_rx) = unbounded_channel();
        (
            Puppet {
                turns: turns_rx,
                calls: calls_rx,
                views: views_tx,
            },
            Strings {
                turns: turns_tx,
                calls: calls_tx,
                views: views_rx,
            },
        )
    }

    #[async_trait::async_trait]
    impl Player for Puppet {
        async fn play_turn(&mut self, _: &Recall) -> Vec<Card> {
            match self.turns.recv().await {
                Some(cards) => cards,
                None => std::future::pending().await,
            }
        }
        async fn play_turn_or_challenge(&mut self, _: &Recall) -> Choice {
            tokio::select! {
                Some(cards) = self.turns.recv() => Choice::Discard(cards),
                Some(()) = self.calls.recv() => Choice::Challenge,
                else => std::future::pending().await,
            }
        }
        async fn challenge(&mut self, _: &Recall) {
            match self.calls.recv().await {
                Some(()) => {}
                None => std::future::pending().await,
            }
        }
        async fn notify(&mut self, recall: &Recall) {
            let _ = self.views.send(recall.clone());
        }
    }

    fn room(n: usize) -> (Room, Vec<Strings>) {
        let mut room = Room::new(0);
        let strings = ["ada", "bo", "cy", "di"]
            .into_iter()
            .take(n)
            .map(|name| {
                let (puppet, strings) = puppet();
                room.sit(name, puppet).unwrap();
                strings
            })
            .collect();
        (room, strings)
    }

    fn hands(hands: &[&str]) -> Vec<Vec<Card>> {
        hands.iter().map(|h| Card::parse(h).unwrap()).collect()
    }

    fn rank(n: u8) -> Rank {
        Rank::try_from(n).unwrap()
    }

    #[tokio::test]
    async fn refuses_to_start_short_handed() {
        let mut empty = Room::new(0);
        assert_eq!(empty.start().await, Err(Error::EmptyQueue));
        let (mut lonely, _s) = room(1);
        assert_eq!(
            lonely.start().await,
            Err(Error::NotEnoughPlayers {
                needed: MIN_PLAYERS,
                seated: 1
            })
        );
        assert!(!lonely.game().is_playing());
        assert_eq!(lonely.step().await, Err(Error::NotPlaying));
    }

    #[tokio::test]
    async fn start_deals_and_notifies() {
        let (mut room, mut strings) = room(3);
        room.start().await.unwrap();
        assert_eq!(room.game().cards().len(), DECK_SIZE);
        for s in strings.iter_mut() {
            let view = s.views.try_recv().unwrap();
            assert!(view.hand().len() >= 17);
        }
        let (puppet, _s) = puppet();
        assert_eq!(room.sit("late", puppet), Err(Error::AlreadyPlaying));
    }

    #[tokio::test]
    async fn opening_discard_is_unchallengeable() {
        // two seats, four cards dealt two apiece
        let (mut room, strings) = room(2);
        room.start_with(hands(&["H5 S5", "C1 D2"])).await.unwrap();
        room.game.set_rank(rank(5));
        assert_eq!(room.phase(), Phase::Opening);
        strings[1].call();
        strings[0].discard("H5 S5");
        let outcome = room.step().await.unwrap();
        assert_eq!(outcome, Outcome::Discard { seat: 0, cards: 2 });
        assert!(room.game().history().last().unwrap().is_valid());
        assert_eq!(room.game().rank(), 6u8);
        assert_eq!(room.phase(), Phase::Race);
        assert!(room.game().history().iter().all(|a| !a.is_call()));
    }

    /// ada opens with an honest five, bo answers with an honest six, then
    /// ada claims seven with `seventh`. bo challenges.
    async fn challenged_seven(seventh: &str) -> (Room, Vec<Strings>, Outcome) {
        let (mut room, strings) = room(2);
        room.start_with(hands(&["H5 H3 H7 H9", "D6 C2"])).await.unwrap();
        room.game.set_rank(rank(5));
        strings[0].discard("H5");
        room.step().await.unwrap();
        strings[1].discard("D6");
        room.step().await.unwrap();
        strings[0].discard(seventh);
        room.step().await.unwrap();
        assert_eq!(room.game().pile().len(), 3);
        strings[1].call();
        let outcome = room.step().await.unwrap();
        (room, strings, outcome)
    }

    #[tokio::test]
    async fn caught_bluff_sends_pile_to_liar() {
        let (mut room, strings, outcome) = challenged_seven("H3").await;
        assert_eq!(
            outcome,
            Outcome::Bluff {
                caller: 1,
                callee: 0,
                correct: true
            }
        );
        assert_eq!(room.game().seat(0).unwrap().hand().len(), 2 + 3);
        assert_eq!(room.game().seat(1).unwrap().hand().len(), 1);
        assert!(room.game().pile().is_empty());
        assert_eq!(room.game().rank(), Rank::BASE);
        // ada must discard again, with no race
        assert_eq!(room.phase(), Phase::Forced);
        strings[0].discard("H9");
        let outcome = room.step().await.unwrap();
        assert_eq!(outcome, Outcome::Discard { seat: 0, cards: 1 });
        assert_eq!(room.phase(), Phase::Race);
    }

    #[tokio::test]
    async fn wrong_call_sends_pile_to_challenger() {
        let (mut room, strings, outcome) = challenged_seven("H7").await;
        assert_eq!(
            outcome,
            Outcome::Bluff {
                caller: 1,
                callee: 0,
                correct: false
            }
        );
        assert_eq!(room.game().seat(1).unwrap().hand().len(), 1 + 3);
        assert_eq!(room.game().seat(0).unwrap().hand().len(), 2);
        assert_eq!(room.game().rank(), Rank::BASE);
        assert_eq!(room.phase(), Phase::Forced);
        strings[0].discard("H3");
        assert_eq!(
            room.step().await.unwrap(),
            Outcome::Discard { seat: 0, cards: 1 }
        );
    }

    #[tokio::test]
    async fn claimant_sits_out_the_race() {
        let (mut room, strings) = room(3);
        room.start_with(hands(&["H1 H4", "S2", "C9"])).await.unwrap();
        strings[0].discard("H1");
        room.step().await.unwrap();
        // ada calls ada's own claim and nobody is listening
        strings[0].call();
        let stalled = tokio::time::timeout(Duration::from_millis(50), room.step()).await;
        assert!(stalled.is_err());
        assert_eq!(room.game().history().len(), 1);
        assert!(room.game().history().iter().all(|a| !a.is_call()));
        strings[1].discard("S2");
        assert_eq!(
            room.step().await.unwrap(),
            Outcome::Discard { seat: 1, cards: 1 }
        );
        assert_eq!(room.game().pile().len(), 2);
    }

    #[tokio::test]
    async fn bystander_challenge_beats_silent_actor() {
        let (mut room, strings) = room(3);
        room.start_with(hands(&["H2 H4", "S1", "C1"])).await.unwrap();
        strings[0].discard("H2");
        room.step().await.unwrap();
        // bo is up but says nothing; cy calls ada's bluff
        strings[2].call();
        let outcome = room.step().await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Bluff {
                caller: 2,
                callee: 0,
                correct: true
            }
        );
        assert_eq!(room.game().seat(0).unwrap().hand().len(), 2);
        // bo was skipped, so cy is forced to open the next sequence
        assert_eq!(room.phase(), Phase::Forced);
        strings[2].discard("C1");
        assert_eq!(
            room.step().await.unwrap(),
            Outcome::Discard { seat: 2, cards: 1 }
        );
        strings[0].discard("H4");
        room.step().await.unwrap();
        // bo's abandoned wait did not break bo
        strings[1].discard("S1");
        assert_eq!(
            room.step().await.unwrap(),
            Outcome::Discard { seat: 1, cards: 1 }
        );
    }

    #[tokio::test]
    async fn simultaneous_answers_apply_once() {
        let (mut room, strings) = room(3);
        room.start_with(hands(&["H1 H4", "S2", "C9"])).await.unwrap();
        strings[0].discard("H1");
        room.step().await.unwrap();
        let pile = room.game().pile().len();
        let logged = room.game().history().len();
        strings[1].discard("S2");
        strings[2].call();
        let outcome = room.step().await.unwrap();
        assert_eq!(room.game().history().len(), logged + 1);
        match outcome {
            Outcome::Discard { seat, .. } => {
                assert_eq!(seat, 1);
                assert_eq!(room.game().pile().len(), pile + 1);
                assert_eq!(room.game().seat(2).unwrap().hand().len(), 1);
            }
            Outcome::Bluff { caller, .. } => {
                assert_eq!(caller, 2);
                assert!(room.game().pile().is_empty());
                assert_eq!(room.game().seat(1).unwrap().hand().len(), 1);
            }
        }
        assert_eq!(room.game().cards().len(), 4);
    }

    #[tokio::test]
    async fn undecided_race_stays_pending() {
        let (mut room, strings) = room(3);
        room.start_with(hands(&["H1 H4", "S2", "C9"])).await.unwrap();
        strings[0].discard("H1");
        room.step().await.unwrap();
        let current = room.game().rotation().current().unwrap();
        let stalled = tokio::time::timeout(Duration::from_millis(50), room.step()).await;
        assert!(stalled.is_err());
        assert_eq!(room.game().history().len(), 1);
        assert_eq!(room.game().rotation().current().unwrap(), current);
        strings[1].discard("S2");
        assert_eq!(
            room.step().await.unwrap(),
            Outcome::Discard { seat: 1, cards: 1 }
        );
    }

    #[tokio::test]
    async fn foreign_card_is_fatal_and_harmless() {
        let (mut room, strings) = room(2);
        room.start_with(hands(&["H1", "S2"])).await.unwrap();
        strings[0].discard("S2");
        assert!(matches!(
            room.step().await,
            Err(Error::CardNotInHand { .. })
        ));
        assert!(room.game().history().is_empty());
        assert!(room.game().pile().is_empty());
        assert_eq!(room.game().rotation().current().unwrap(), 0);
    }

    #[tokio::test]
    async fn robots_conserve_cards() {
        let mut room = Room::new(42);
        for i in 0..4 {
            room.sit(format!("otis-{}", i), Robot::new(i).patience(Duration::ZERO))
                .unwrap();
        }
        room.start().await.unwrap();
        for _ in 0..200 {
            let logged = room.game().history().len();
            room.step().await.unwrap();
            assert_eq!(room.game().history().len(), logged + 1);
            let cards = room.game().cards();
            assert_eq!(cards.len(), DECK_SIZE);
            assert_eq!(cards.into_iter().collect::<HashSet<_>>().len(), DECK_SIZE);
            assert!(room.game().rank() >= 1u8 && room.game().rank() <= 13u8);
        }
    }
}
