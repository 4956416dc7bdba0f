pub mod client;
pub use client::*;

pub mod handle;
pub use handle::*;

pub mod robot;
pub use robot::*;
