//! Text adventure driver for Grotto.
//!
//! Parses player input, keeps the player's position and backpack, and plays
//! the built-in demo map against the rules in `grotto-core`.

pub mod demo;
pub mod parser;
pub mod session;

pub use parser::{Command, Direction, parse_command};
pub use session::Session;
