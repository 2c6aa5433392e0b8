//! Completion candidates.

use std::fmt;

/// What a suggestion completes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    /// The input as typed, ready to send.
    Submit,
    /// A fleet to command.
    Fleet,
    /// A world to command or move through.
    World,
    /// An action letter.
    Action,
    /// A ship count.
    Amount,
    /// Where ships go, or what to fire at.
    Target,
    /// A character type for JOIN.
    Character,
    /// `JOIN` or `TURN`.
    Keyword,
}

impl SuggestionKind {
    /// Lower-case tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Fleet => "fleet",
            Self::World => "world",
            Self::Action => "action",
            Self::Amount => "amount",
            Self::Target => "target",
            Self::Character => "character",
            Self::Keyword => "keyword",
        }
    }
}

/// A completion for the whole input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Replacement for the entire input.
    pub text: String,
    /// One-line explanation shown next to the text.
    pub description: String,
    /// What the suggestion completes to.
    pub kind: SuggestionKind,
    /// True if accepting it yields a command that can be submitted.
    pub complete: bool,
    /// Ranking weight for top-level suggestions.
    pub priority: Option<i32>,
    /// True if accepting it is likely to hurt the player.
    pub danger: bool,
}

impl Suggestion {
    /// Creates a suggestion with no priority.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        description: impl Into<String>,
        kind: SuggestionKind,
    ) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
            kind,
            complete: false,
            priority: None,
            danger: false,
        }
    }

    /// Builder method to set the ranking weight.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Builder method to replace the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to flag the suggestion as dangerous.
    #[must_use]
    pub const fn dangerous(mut self) -> Self {
        self.danger = true;
        self
    }

    /// The part of `text` that extends `typed`, if `text` starts with it
    /// (ignoring case).
    #[must_use]
    pub fn remainder<'a>(&'a self, typed: &str) -> Option<&'a str> {
        let head = self.text.get(..typed.len())?;
        if head.eq_ignore_ascii_case(typed) {
            self.text.get(typed.len()..)
        } else {
            None
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<14} {}", self.text, self.description)?;
        if self.danger {
            f.write_str(" (!)")?;
        }
        Ok(())
    }
}
