//! Integration tests for Layer 0: Foundation
//!
//! Tests for ids, errors, and the game-state snapshot.

mod state;
