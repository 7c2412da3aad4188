//! Narration: every line of text the game shows the player.
//!
//! The entity types only hold state. Turning that state into the historical
//! output lines (room details, item and character descriptions, dialogue,
//! fight results, failed moves) happens here so drivers can reuse or replace
//! the wording without touching the rules.

mod config;
mod templates;

pub use config::NarratorConfig;
pub use templates::Narrator;
