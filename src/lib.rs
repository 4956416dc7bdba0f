//! Turn arbitration for the bluffing card game Cheat ("I Doubt It").
//!
//! A [`gameroom::Room`] owns one match. It deals a shuffled deck to every
//! seat, then loops: the seat whose turn it is discards face down under the
//! current claimed rank, and until the next discard lands anyone may call
//! the claim a bluff. Decisions come from [`gameroom::Player`]
//! implementations and are raced against each other; the first to answer
//! is applied and the rest are cancelled.

pub mod cards;
pub mod error;
pub mod gameplay;
pub mod gameroom;
pub mod players;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the table, in join order.
pub type Position = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Cards in a full deck, all of them dealt.
pub const DECK_SIZE: usize = 52;
/// Fewest seats a match can start with.
pub const MIN_PLAYERS: usize = 2;
/// How long a [`players::Robot`] sits on a challenge before calling it.
pub const ROBOT_PATIENCE: std::time::Duration = std::time::Duration::from_millis(750);

// ============================================================================
// LOGGING
// ============================================================================
/// Logs INFO and up to stderr and everything from DEBUG to `logs/{time}.log`.
/// A human seat bridged over stdin/stdout reads one JSON view per stdout
/// line, so log output must never land there.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
