//! Console pipeline, command history, and CLI for fleetcmd.
//!
//! This crate provides:
//! - [`Console`] - The per-keystroke and per-submission pipeline
//! - [`CommandHistory`] - Bounded, navigable, persisted command history
//! - [`Repl`] - Interactive order console with completion and hints
//! - [`run_batch`] - Non-interactive submission of a command list
//! - Game-state snapshot serialization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod console;
pub mod editor;
pub mod highlight;
pub mod history;
pub mod repl;
pub mod serialize;
pub mod store;

pub use batch::{BatchReport, Problem, run_batch};
pub use config::{ConsoleConfig, DEFAULT_HISTORY_KEY};
pub use console::{Analysis, Console, Submission, SubmitError, analyze};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::CommandHighlighter;
pub use history::{CommandHistory, Direction};
pub use repl::{Reply, Repl};
pub use store::{FileStore, KeyValueStore, MemoryStore};
