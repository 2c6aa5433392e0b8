//! Configuration for the command console.

/// Store key the command history is saved under unless configured otherwise.
pub const DEFAULT_HISTORY_KEY: &str = "fleetcmd:command_history";

/// Configuration for the command console.
///
/// Controls history retention, suggestion count, and presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Maximum number of commands kept in history.
    pub history_size: usize,

    /// Key the history is persisted under.
    pub history_key: String,

    /// Maximum number of suggestions per keystroke.
    pub max_suggestions: usize,

    /// Prompt shown by the interactive console.
    pub prompt: String,

    /// Whether to emit ANSI colours.
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            history_size: 100,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            max_suggestions: 10,
            prompt: "> ".to_string(),
            color: true,
        }
    }
}

impl ConsoleConfig {
    /// Creates a configuration without colour, for batch runs and tests.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Builder method to set history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to set the history key.
    #[must_use]
    pub fn with_history_key(mut self, key: impl Into<String>) -> Self {
        self.history_key = key.into();
        self
    }

    /// Builder method to set the suggestion limit.
    #[must_use]
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to enable/disable colour.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
