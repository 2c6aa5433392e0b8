//! Autocomplete for fleet orders.
//!
//! Given the text typed so far, its [`ParseContext`](fleetcmd_parser::ParseContext)
//! and the live [`Verdict`](fleetcmd_validator::Verdict), produces a short,
//! ranked list of whole-line completions drawn from the game-state snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod suggestion;

pub use engine::{Autocomplete, DEFAULT_LIMIT};
pub use suggestion::{Suggestion, SuggestionKind};
