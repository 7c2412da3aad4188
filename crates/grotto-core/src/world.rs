use std::collections::HashMap;

use crate::character::FightOutcome;
use crate::config::WorldConfig;
use crate::error::{GrottoError, GrottoResult};
use crate::narrator::Narrator;
use crate::room::{Room, RoomId};
use crate::tally::VictoryTally;

/// The room registry. Owns every room in a game and the victory tally.
///
/// Rooms are addressed by [`RoomId`] and never removed, so an ID stays valid
/// for the life of the world.
#[derive(Debug, Clone, Default)]
pub struct World {
    config: WorldConfig,
    narrator: Narrator,
    rooms: Vec<Room>,
    tally: VictoryTally,

    // Indexes
    by_name_lower: HashMap<String, RoomId>,
}

impl World {
    /// An empty world with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty world with the given config.
    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            narrator: Narrator::new(config.narrator.clone()),
            config,
            ..Self::default()
        }
    }

    /// The world's config.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The narrator built from the world's config.
    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Register a room and return its ID.
    pub fn add_room(&mut self, room: Room) -> GrottoResult<RoomId> {
        if room.name().trim().is_empty() {
            return Err(GrottoError::EmptyName);
        }
        let name_lower = room.name().to_lowercase();
        if self.config.unique_room_names && self.by_name_lower.contains_key(&name_lower) {
            return Err(GrottoError::DuplicateName(room.name().to_string()));
        }

        let id = RoomId(self.rooms.len());
        tracing::debug!(%id, name = room.name(), "room added");
        self.by_name_lower.entry(name_lower).or_insert(id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Get a room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Get a mutable room by ID.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Find a room ID by name (case-insensitive). With duplicate names
    /// allowed, the first room registered under the name wins.
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// All rooms in registration order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of registered rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    fn get(&self, id: RoomId) -> GrottoResult<&Room> {
        self.room(id).ok_or(GrottoError::RoomNotFound(id))
    }

    fn get_mut(&mut self, id: RoomId) -> GrottoResult<&mut Room> {
        self.rooms.get_mut(id.0).ok_or(GrottoError::RoomNotFound(id))
    }

    // -----------------------------------------------------------------------
    // Links and traversal
    // -----------------------------------------------------------------------

    /// Add a one-way exit from `from` to `to`.
    ///
    /// Linking is not reciprocal; see [`World::link_both`].
    pub fn link_room(
        &mut self,
        from: RoomId,
        to: RoomId,
        direction: impl Into<String>,
    ) -> GrottoResult<()> {
        let direction = direction.into();
        self.check_link(from, to, &direction)?;
        self.push_link(from, to, direction)
    }

    /// Link two rooms in both directions.
    ///
    /// Both links are checked before either is added, so a failure leaves
    /// the map unchanged.
    pub fn link_both(
        &mut self,
        a: RoomId,
        b: RoomId,
        a_to_b: impl Into<String>,
        b_to_a: impl Into<String>,
    ) -> GrottoResult<()> {
        let (a_to_b, b_to_a) = (a_to_b.into(), b_to_a.into());
        self.check_link(a, b, &a_to_b)?;
        self.check_link(b, a, &b_to_a)?;
        self.push_link(a, b, a_to_b)?;
        self.push_link(b, a, b_to_a)
    }

    fn check_link(&self, from: RoomId, to: RoomId, direction: &str) -> GrottoResult<()> {
        self.get(to)?;
        let room = self.get(from)?;
        if self.config.strict_directions && room.has_exit(direction) {
            return Err(GrottoError::DuplicateDirection {
                room: room.name().to_string(),
                direction: direction.to_string(),
            });
        }
        Ok(())
    }

    fn push_link(&mut self, from: RoomId, to: RoomId, direction: String) -> GrottoResult<()> {
        tracing::debug!(%from, %to, direction = %direction, "rooms linked");
        self.get_mut(from)?.link_room(to, direction);
        Ok(())
    }

    /// The room reached by going `direction` from `from`, if any.
    pub fn move_from(&self, from: RoomId, direction: &str) -> GrottoResult<Option<RoomId>> {
        Ok(self.get(from)?.move_to(direction))
    }

    /// Name, separator, description, and exits of a room.
    pub fn details(&self, id: RoomId) -> GrottoResult<String> {
        let room = self.get(id)?;
        let mut exits = Vec::with_capacity(room.links().len());
        for link in room.links() {
            exits.push((self.get(link.target)?.name(), link.direction.as_str()));
        }
        Ok(self.narrator.room_details(room, &exits))
    }

    // -----------------------------------------------------------------------
    // Combat
    // -----------------------------------------------------------------------

    /// Fight the character in `room` with the named weapon.
    ///
    /// Returns `None` when the room is empty.
    pub fn fight(&self, room: RoomId, weapon: &str) -> GrottoResult<Option<FightOutcome>> {
        self.get(room)?
            .character()
            .map(|c| c.fight(weapon))
            .transpose()
    }

    /// Record the defeat of the character in `room` in the world's tally.
    ///
    /// Returns the new total, or `None` when the room is empty. The character
    /// stays in the room.
    pub fn defeat(&mut self, room: RoomId) -> GrottoResult<Option<u64>> {
        let character = self
            .rooms
            .get(room.0)
            .ok_or(GrottoError::RoomNotFound(room))?
            .character();
        character
            .map(|c| c.get_defeated(&mut self.tally))
            .transpose()
    }

    /// The victory tally.
    pub fn tally(&self) -> &VictoryTally {
        &self.tally
    }
}
