//! Integration tests for the fleetcmd_parser crate.
//!
//! Tests for the command-language pipeline:
//! - Tokenization
//! - Progressive and final parsing
//! - Context detection
//! - Grammar table agreement
//! - Property tests (round-trip, totality)

mod parsing;
