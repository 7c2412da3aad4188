use serde::{Deserialize, Serialize};

use crate::error::{GrottoError, GrottoResult};
use crate::narrator::Narrator;

/// A named object that can lie in a room or be carried.
///
/// Items have no behavior beyond identity. The room an item lies in owns it;
/// the item keeps no reference back to that room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    description: Option<String>,
}

impl Item {
    /// Create an item. The name is not validated.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Create an item, rejecting an empty or whitespace-only name.
    pub fn try_new(name: impl Into<String>) -> GrottoResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GrottoError::EmptyName);
        }
        Ok(Self::new(name))
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's description, if one was set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// `The [<name>] is here - <description>`, with the default narrator.
    ///
    /// A world configured with its own [`crate::NarratorConfig`] renders
    /// through [`crate::World::narrator`] instead.
    pub fn describe(&self) -> String {
        Narrator::default().describe_item(self)
    }
}
