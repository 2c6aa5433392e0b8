//! Integration tests for the fleetcmd_complete crate.
//!
//! Tests for suggestion ranking and per-stage completions against
//! hand-built snapshots.

mod ranking;
mod stages;
