//! Bounded, navigable command history.
//!
//! Entries are kept oldest first. Navigation walks backwards from the newest
//! entry with [`Direction::Up`] and forwards again with [`Direction::Down`];
//! stepping down past the newest entry leaves navigation. The REPL's
//! `:again` walks it this way; front ends that handle arrow keys themselves
//! drive the same calls.
//!
//! The history is saved to a [`KeyValueStore`] after every change. Saving
//! and loading are best effort: failures are logged and never returned.

use std::collections::VecDeque;

use fleetcmd_foundation::{Error, Result};
use tracing::{debug, warn};

use crate::store::KeyValueStore;

/// Direction to move through history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards older entries.
    Up,
    /// Towards newer entries.
    Down,
}

/// Previously submitted commands.
#[derive(Debug)]
pub struct CommandHistory<S: KeyValueStore> {
    store: S,
    key: String,
    max_size: usize,
    entries: VecDeque<String>,
    /// Index of the entry being shown, `None` when not navigating.
    cursor: Option<usize>,
}

impl<S: KeyValueStore> CommandHistory<S> {
    /// Creates an empty history that saves to `store` under `key`.
    #[must_use]
    pub fn new(store: S, key: impl Into<String>, max_size: usize) -> Self {
        Self {
            store,
            key: key.into(),
            max_size,
            entries: VecDeque::new(),
            cursor: None,
        }
    }

    /// Creates a history from whatever `store` holds under `key`.
    ///
    /// Missing or unreadable data gives an empty history. If more than
    /// `max_size` entries were saved, only the newest are kept.
    #[must_use]
    pub fn load(store: S, key: impl Into<String>, max_size: usize) -> Self {
        let mut history = Self::new(store, key, max_size);
        match history.read_saved() {
            Ok(entries) => {
                history.entries = entries.into_iter().collect();
                history.trim();
                debug!(key = %history.key, entries = history.len(), "loaded command history");
            }
            Err(e) => {
                warn!(key = %history.key, error = %e, "ignoring saved command history");
            }
        }
        history
    }

    fn read_saved(&self) -> Result<Vec<String>> {
        match self.store.get(&self.key)? {
            Some(bytes) => {
                rmp_serde::from_slice(&bytes).map_err(|e| Error::serialization(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    /// Records a submitted command.
    ///
    /// Blank input and an exact repeat of the newest entry are not recorded.
    /// Navigation is reset either way.
    pub fn add(&mut self, command: &str) {
        self.cursor = None;

        let command = command.trim();
        if command.is_empty() || self.entries.back().is_some_and(|last| last == command) {
            return;
        }

        self.entries.push_back(command.to_string());
        self.trim();
        self.persist();
    }

    /// Moves through history, returning the entry to show.
    ///
    /// `None` means the input should be cleared: either there was nothing to
    /// move to, or navigation just ended.
    pub fn navigate(&mut self, direction: Direction) -> Option<&str> {
        self.cursor = match (direction, self.cursor) {
            (Direction::Up, None) => self.entries.len().checked_sub(1),
            (Direction::Up, Some(i)) => Some(i.saturating_sub(1)),
            (Direction::Down, None) => None,
            (Direction::Down, Some(i)) if i + 1 >= self.entries.len() => None,
            (Direction::Down, Some(i)) => Some(i + 1),
        };
        self.current()
    }

    /// The entry currently shown, if navigating.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.cursor
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    /// Leaves navigation, as when the player edits the input directly.
    pub fn reset_navigation(&mut self) {
        self.cursor = None;
    }

    /// Returns true while the player is stepping through history.
    #[must_use]
    pub const fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries kept.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Removes every entry and saves the empty history.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
        self.persist();
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the history, returning the backing store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn trim(&mut self) {
        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
    }

    fn persist(&mut self) {
        let bytes = match rmp_serde::to_vec(&self.entries) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to encode command history");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &bytes) {
            warn!(key = %self.key, error = %e, "failed to save command history");
        }
    }
}
