//! Narrator configuration.

/// Text shown in place of a value that was never set.
pub const DEFAULT_ABSENT: &str = "None";

/// Line printed between a room's name and its description.
pub const DEFAULT_SEPARATOR: &str = "--------------------";

/// Configuration for the narrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Rendered in place of an unset description or conversation.
    pub absent: String,
    /// Separator line under a room's name.
    pub separator: String,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            absent: DEFAULT_ABSENT.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl NarratorConfig {
    /// Create a new narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker shown for unset text.
    pub fn with_absent(mut self, absent: impl Into<String>) -> Self {
        self.absent = absent.into();
        self
    }

    /// Set the separator line under room names.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Returns `text`, or the absent marker when it is unset.
    pub fn or_absent<'a>(&'a self, text: Option<&'a str>) -> &'a str {
        text.unwrap_or(&self.absent)
    }
}
