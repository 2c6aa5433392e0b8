//! The result of validating one command.

use std::fmt;

/// Errors, warnings and suggestions collected for a command.
///
/// Any error makes the verdict invalid. Warnings and suggestions never do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    errors: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl Verdict {
    /// A verdict with nothing to report.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// A verdict holding a single error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        let mut verdict = Self::valid();
        verdict.error(message);
        verdict
    }

    /// Records an error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Records a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Records a suggestion.
    pub fn suggest(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    /// Returns true if no error was recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if any warning was recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Errors in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warnings in the order they were found.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Suggestions in the order they were made.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::valid()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.write_str("valid")?;
        } else {
            f.write_str("invalid")?;
        }
        for error in &self.errors {
            write!(f, "\n  error: {error}")?;
        }
        for warning in &self.warnings {
            write!(f, "\n  warning: {warning}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  hint: {suggestion}")?;
        }
        Ok(())
    }
}
