use std::fmt;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::item::Item;

/// Index of a room inside its [`World`](crate::World).
///
/// Rooms refer to each other by ID rather than by reference, so a map can
/// loop back on itself without ownership cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed exit from one room to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// The room this exit leads to.
    pub target: RoomId,
    /// Direction label the player uses to take this exit.
    pub direction: String,
}

/// A location holding at most one character and one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    name: String,
    description: Option<String>,
    links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    character: Option<Character>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<Item>,
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            links: Vec::new(),
            character: None,
            item: None,
        }
    }

    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room's description, if one was set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    // -----------------------------------------------------------------------
    // Links
    // -----------------------------------------------------------------------

    /// Append an exit toward `target`.
    ///
    /// Links are one-way and never deduplicated. The same direction label may
    /// appear more than once; [`Room::move_to`] takes the first.
    pub fn link_room(&mut self, target: RoomId, direction: impl Into<String>) {
        self.links.push(Link {
            target,
            direction: direction.into(),
        });
    }

    /// Exits in the order they were added.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// True if some exit uses this exact direction label.
    pub fn has_exit(&self, direction: &str) -> bool {
        self.links.iter().any(|l| l.direction == direction)
    }

    /// The room reached by going `direction` from here.
    ///
    /// Matches direction labels exactly and returns the first match in link
    /// order. Returns `None` and logs `No room in <direction>` when there is
    /// no such exit.
    pub fn move_to(&self, direction: &str) -> Option<RoomId> {
        let target = self
            .links
            .iter()
            .find(|l| l.direction == direction)
            .map(|l| l.target);
        if target.is_none() {
            tracing::info!(room = %self.name, "No room in {direction}");
        }
        target
    }

    // -----------------------------------------------------------------------
    // Occupants
    // -----------------------------------------------------------------------

    /// Place a character here, returning whoever was displaced.
    pub fn set_character(&mut self, character: Character) -> Option<Character> {
        self.character.replace(character)
    }

    /// The character in this room.
    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    /// Mutable access to the character in this room.
    pub fn character_mut(&mut self) -> Option<&mut Character> {
        self.character.as_mut()
    }

    /// Remove and return the character in this room.
    pub fn take_character(&mut self) -> Option<Character> {
        self.character.take()
    }

    /// Place an item here, returning the item it displaced.
    pub fn set_item(&mut self, item: Item) -> Option<Item> {
        self.item.replace(item)
    }

    /// The item in this room.
    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// Remove and return the item in this room.
    pub fn take_item(&mut self) -> Option<Item> {
        self.item.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_is_empty() {
        let room = Room::new("Cave");
        assert_eq!(room.name(), "Cave");
        assert!(room.description().is_none());
        assert!(room.links().is_empty());
        assert!(room.character().is_none());
        assert!(room.item().is_none());
    }

    #[test]
    fn link_then_move() {
        let mut cave = Room::new("Cave");
        cave.link_room(RoomId(1), "east");
        assert_eq!(cave.move_to("east"), Some(RoomId(1)));
        assert!(cave.has_exit("east"));
    }

    #[test]
    fn move_is_exact_match() {
        let mut cave = Room::new("Cave");
        cave.link_room(RoomId(1), "east");
        assert_eq!(cave.move_to("East"), None);
        assert_eq!(cave.move_to("ea"), None);
        assert_eq!(cave.move_to(""), None);
    }

    #[test]
    fn move_takes_first_matching_link() {
        let mut hall = Room::new("Hall");
        hall.link_room(RoomId(3), "north");
        hall.link_room(RoomId(4), "north");
        hall.link_room(RoomId(3), "up");
        assert_eq!(hall.move_to("north"), Some(RoomId(3)));
        assert_eq!(hall.move_to("up"), Some(RoomId(3)));
        assert_eq!(hall.links().len(), 3);
    }

    #[test]
    fn failed_move_leaves_room_unchanged() {
        let mut cave = Room::new("Cave");
        cave.link_room(RoomId(1), "east");
        cave.set_item(Item::new("Sword"));
        let before = cave.clone();
        assert_eq!(cave.move_to("west"), None);
        assert_eq!(cave, before);
    }

    #[test]
    fn set_item_overwrites() {
        let mut cave = Room::new("Cave");
        assert!(cave.set_item(Item::new("Sword")).is_none());
        let displaced = cave.set_item(Item::new("Axe"));
        assert_eq!(displaced.map(|i| i.name().to_string()), Some("Sword".into()));
        assert_eq!(cave.item().map(Item::name), Some("Axe"));
    }

    #[test]
    fn set_character_overwrites() {
        let mut forest = Room::new("Forest");
        forest.set_character(Character::enemy("Troll", "a big troll"));
        let displaced = forest.set_character(Character::friend("Elf", "a helpful elf"));
        assert_eq!(displaced.map(|c| c.name().to_string()), Some("Troll".into()));
        assert!(!forest.character().is_some_and(Character::is_enemy));
    }

    #[test]
    fn take_empties_the_slot() {
        let mut cave = Room::new("Cave");
        cave.set_item(Item::new("Sword"));
        cave.set_character(Character::new("Hermit", "An old hermit"));

        assert_eq!(cave.take_item().map(|i| i.name().to_string()), Some("Sword".into()));
        assert!(cave.item().is_none());
        assert!(cave.take_item().is_none());

        assert!(cave.take_character().is_some());
        assert!(cave.character().is_none());
    }

    #[test]
    fn room_id_display() {
        assert_eq!(RoomId(7).to_string(), "#7");
    }
}
