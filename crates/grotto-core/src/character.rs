use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GrottoError, GrottoResult};
use crate::narrator::Narrator;
use crate::tally::VictoryTally;

/// What sort of character this is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CharacterKind {
    /// Neither friend nor enemy.
    #[default]
    Plain,
    /// A hostile character that can be fought.
    Enemy {
        /// Name of the item that defeats this enemy.
        weakness: Option<String>,
    },
    /// A friendly, purely conversational character.
    Friend,
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "character"),
            Self::Enemy { .. } => write!(f, "enemy"),
            Self::Friend => write!(f, "friend"),
        }
    }
}

/// Result of fighting an enemy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FightOutcome {
    /// The weapon matched the enemy's weakness.
    Won {
        /// The weapon that was used.
        weapon: String,
    },
    /// The weapon did not match.
    Lost,
}

impl FightOutcome {
    /// True when the player won.
    pub fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// A person or creature that can be placed in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    description: String,
    conversation: Option<String>,
    kind: CharacterKind,
}

impl Character {
    /// A plain character that is neither friend nor enemy.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(CharacterKind::Plain, name, description)
    }

    /// An enemy with no weakness set yet.
    pub fn enemy(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(CharacterKind::Enemy { weakness: None }, name, description)
    }

    /// A friend.
    pub fn friend(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(CharacterKind::Friend, name, description)
    }

    /// A character of the given kind.
    pub fn with_kind(
        kind: CharacterKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            conversation: None,
            kind,
        }
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The line spoken when addressed, if one was set.
    pub fn conversation(&self) -> Option<&str> {
        self.conversation.as_deref()
    }

    /// Replace the conversation line.
    pub fn set_conversation(&mut self, conversation: impl Into<String>) {
        self.conversation = Some(conversation.into());
    }

    /// The character's kind.
    pub fn kind(&self) -> &CharacterKind {
        &self.kind
    }

    /// True for enemies, false for friends and plain characters.
    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, CharacterKind::Enemy { .. })
    }

    /// True for friends.
    pub fn is_friend(&self) -> bool {
        self.kind == CharacterKind::Friend
    }

    /// The enemy's weakness. `None` for non-enemies or when unset.
    pub fn weakness(&self) -> Option<&str> {
        match &self.kind {
            CharacterKind::Enemy { weakness } => weakness.as_deref(),
            _ => None,
        }
    }

    /// Set the name of the item that defeats this enemy.
    pub fn set_weakness(&mut self, item_name: impl Into<String>) -> GrottoResult<()> {
        match &mut self.kind {
            CharacterKind::Enemy { weakness } => {
                *weakness = Some(item_name.into());
                Ok(())
            }
            _ => Err(self.not_an_enemy()),
        }
    }

    /// `<name> is here!` and the description, with the default narrator.
    ///
    /// A world configured with its own [`crate::NarratorConfig`] renders
    /// through [`crate::World::narrator`] instead.
    pub fn describe(&self) -> String {
        Narrator::default().describe_character(self)
    }

    /// `[<name> says]: <conversation>`, with the default narrator.
    ///
    /// Drivers that configure the absent marker should use
    /// [`crate::World::narrator`].
    pub fn talk(&self) -> String {
        Narrator::default().talk(self)
    }

    /// Fight this enemy with the named weapon.
    ///
    /// The player wins only when `weapon` equals the weakness exactly (no case
    /// folding). An enemy without a weakness cannot be beaten. Fighting never
    /// touches the victory tally; see [`Character::get_defeated`]. The log
    /// line uses the default narrator.
    pub fn fight(&self, weapon: &str) -> GrottoResult<FightOutcome> {
        if !self.is_enemy() {
            return Err(self.not_an_enemy());
        }

        let outcome = if self.weakness() == Some(weapon) {
            FightOutcome::Won {
                weapon: weapon.to_string(),
            }
        } else {
            FightOutcome::Lost
        };
        tracing::info!(
            enemy = %self.name,
            weapon,
            won = outcome.is_won(),
            "{}",
            Narrator::default().fight_result(self, &outcome)
        );
        Ok(outcome)
    }

    /// Record this enemy's defeat in `tally` and return the new total.
    ///
    /// Always increments; callers are expected to call this only after a won
    /// [`Character::fight`].
    pub fn get_defeated(&self, tally: &mut VictoryTally) -> GrottoResult<u64> {
        if !self.is_enemy() {
            return Err(self.not_an_enemy());
        }
        let total = tally.record();
        tracing::debug!(enemy = %self.name, total, "enemy defeated");
        Ok(total)
    }

    fn not_an_enemy(&self) -> GrottoError {
        GrottoError::NotAnEnemy(self.name.clone())
    }
}
