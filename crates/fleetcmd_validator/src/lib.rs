//! Semantic validation for fleet orders.
//!
//! This crate cross-checks a parsed [`Command`](fleetcmd_parser::Command)
//! against a read-only [`GameState`](fleetcmd_foundation::GameState):
//! - [`rules`] - Pure rule primitives (ownership, exclusive orders, amounts, paths)
//! - [`verdict`] - The accumulated result of a validation
//! - [`validator`] - Per-command dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rules;
pub mod validator;
pub mod verdict;

pub use validator::{ValidationMode, Validator};
pub use verdict::Verdict;
