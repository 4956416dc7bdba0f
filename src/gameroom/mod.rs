mod decision;
mod player;
mod protocol;
mod room;

pub use decision::*;
pub use player::*;
pub use protocol::*;
pub use room::*;
