//! Core types shared by every fleetcmd layer.
//!
//! This crate provides:
//! - [`FleetId`] and [`WorldId`] - Typed identifiers for map entities
//! - [`GameState`] - The read-only snapshot the validator and autocomplete query
//! - [`Error`] - Rich error types with context
//! - [`CHARACTER_TYPES`] - The character catalogue recognised by JOIN

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod character;
pub mod error;
pub mod ids;
pub mod state;

pub use character::{CHARACTER_TYPES, find_character_type};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use ids::{FleetId, WorldId};
pub use state::{FleetInfo, GameState, OrderKind, QueuedOrder, WorldInfo};
