//! Error types for the fleetcmd system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::ids::{FleetId, WorldId};

/// The main error type for fleetcmd operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a fleet that refers to a world missing from the snapshot.
    #[must_use]
    pub fn dangling_world(fleet: FleetId, world: WorldId) -> Self {
        Self::new(ErrorKind::InconsistentState(format!(
            "{fleet} is stationed at {world}, which is not in the snapshot"
        )))
    }

    /// Creates an error for a world missing from the snapshot.
    #[must_use]
    pub fn missing_world(world: WorldId) -> Self {
        Self::new(ErrorKind::InconsistentState(format!(
            "{world} is not in the snapshot"
        )))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a key-value store error.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Store(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The game-state snapshot contradicts itself.
    #[error("inconsistent game state: {0}")]
    InconsistentState(String),

    /// Encoding or decoding a snapshot or history blob failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The key-value store rejected an operation.
    #[error("store error: {0}")]
    Store(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Component or file the error came from.
    pub source: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source component.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "in {source}"),
            None => Ok(()),
        }
    }
}

/// Result type alias using the fleetcmd Error.
pub type Result<T> = std::result::Result<T, Error>;
