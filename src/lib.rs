//! fleetcmd - Order console for a turn-based fleet strategy game
//!
//! This crate re-exports all layers of the fleetcmd system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: fleetcmd_runtime    - Console pipeline, history, REPL, CLI
//! Layer 2: fleetcmd_validator  - Game-rule checks against a snapshot
//!          fleetcmd_complete   - Context-aware suggestions
//! Layer 1: fleetcmd_parser     - Tokenizer, progressive parser, context detection
//! Layer 0: fleetcmd_foundation - Ids, game-state snapshot, errors
//! ```

pub use fleetcmd_complete as complete;
pub use fleetcmd_foundation as foundation;
pub use fleetcmd_parser as parser;
pub use fleetcmd_runtime as runtime;
pub use fleetcmd_validator as validator;
