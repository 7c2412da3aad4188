//! Configuration for a world registry.

use crate::narrator::NarratorConfig;

/// Validation and narration settings for a [`World`](crate::World).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldConfig {
    /// Reject a room whose name (case-insensitive) is already registered.
    pub unique_room_names: bool,
    /// Reject a link that reuses a direction label already on the room.
    pub strict_directions: bool,
    /// Wording used when rendering rooms and occupants.
    pub narrator: NarratorConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            unique_room_names: true,
            strict_directions: false,
            narrator: NarratorConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Allow or reject duplicate room names.
    pub fn with_unique_room_names(mut self, unique: bool) -> Self {
        self.unique_room_names = unique;
        self
    }

    /// Allow or reject repeated direction labels on one room.
    pub fn with_strict_directions(mut self, strict: bool) -> Self {
        self.strict_directions = strict;
        self
    }

    /// Set the narrator config.
    pub fn with_narrator(mut self, narrator: NarratorConfig) -> Self {
        self.narrator = narrator;
        self
    }
}
