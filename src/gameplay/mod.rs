pub mod action;
pub use action::*;

pub mod bluff;

pub mod game;
pub use game::*;

pub mod history;
pub use history::*;

pub mod recall;
pub use recall::*;

pub mod rotation;
pub use rotation::*;

pub mod seat;
pub use seat::*;
