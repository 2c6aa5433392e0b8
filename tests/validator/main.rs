//! Integration tests for the fleetcmd_validator crate.
//!
//! Tests for game-rule checks:
//! - The acceptance scenarios for each command family
//! - Submission mode and partial commands
//! - Property tests (idempotence, validity law)

mod properties;
mod scenarios;
