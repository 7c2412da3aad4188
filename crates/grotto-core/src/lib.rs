//! Core types for Grotto: rooms, items, characters, and the world registry.
//!
//! This crate holds the entity model of a small text adventure and its
//! interaction rules: linking and traversing rooms, talking to characters,
//! resolving fights against enemies, and tallying victories. It never drives a
//! game loop; a driver builds a [`World`], places occupants, and queries it.

/// Characters, their friend/enemy kind, and combat resolution.
pub mod character;
/// World-level configuration.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Pick-up-able items.
pub mod item;
/// Text formatting for everything the game tells the player.
pub mod narrator;
/// Rooms, their occupants, and directed links.
pub mod room;
/// The shared count of defeated enemies.
pub mod tally;
/// The room registry that owns every room in a game.
pub mod world;

/// Re-export character types.
pub use character::{Character, CharacterKind, FightOutcome};
/// Re-export configuration.
pub use config::WorldConfig;
/// Re-export error types.
pub use error::{GrottoError, GrottoResult};
/// Re-export item type.
pub use item::Item;
/// Re-export narrator types.
pub use narrator::{Narrator, NarratorConfig};
/// Re-export room types.
pub use room::{Link, Room, RoomId};
/// Re-export the victory tally.
pub use tally::VictoryTally;
/// Re-export the world registry.
pub use world::World;
