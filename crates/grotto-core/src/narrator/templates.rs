//! Output templates for rooms, occupants, and fights.

use crate::character::{Character, FightOutcome};
use crate::item::Item;
use crate::room::Room;

use super::config::NarratorConfig;

/// Formats entity state into the lines shown to the player.
///
/// Multi-line output is joined with `\n` and carries no trailing newline.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    config: NarratorConfig,
}

impl Narrator {
    /// Create a narrator with the given config.
    pub fn new(config: NarratorConfig) -> Self {
        Self { config }
    }

    /// The narrator's configuration.
    pub fn config(&self) -> &NarratorConfig {
        &self.config
    }

    /// `The [<name>] is here - <description>`.
    pub fn describe_item(&self, item: &Item) -> String {
        format!(
            "The [{}] is here - {}",
            item.name(),
            self.config.or_absent(item.description())
        )
    }

    /// `<name> is here!` followed by the character's description.
    pub fn describe_character(&self, character: &Character) -> String {
        format!("{} is here!\n{}", character.name(), character.description())
    }

    /// `[<name> says]: <conversation>`.
    pub fn talk(&self, character: &Character) -> String {
        format!(
            "[{} says]: {}",
            character.name(),
            self.config.or_absent(character.conversation())
        )
    }

    /// Room name, separator, description, then one line per exit.
    ///
    /// `exits` pairs each neighbor's name with the direction label, in link
    /// order.
    pub fn room_details(&self, room: &Room, exits: &[(&str, &str)]) -> String {
        let mut lines = vec![
            room.name().to_string(),
            self.config.separator.clone(),
            self.config.or_absent(room.description()).to_string(),
        ];
        lines.extend(
            exits
                .iter()
                .map(|(neighbor, direction)| format!("The {neighbor} is {direction}")),
        );
        lines.join("\n")
    }

    /// The line printed after a fight against `enemy`.
    pub fn fight_result(&self, enemy: &Character, outcome: &FightOutcome) -> String {
        match outcome {
            FightOutcome::Won { weapon } => {
                format!("You fend {} off with the {weapon}", enemy.name())
            }
            FightOutcome::Lost => format!("{} crushes you, puny adventurer!", enemy.name()),
        }
    }

    /// Diagnostic for a move with no matching exit.
    pub fn no_room(&self, direction: &str) -> String {
        format!("No room in {direction}")
    }
}
