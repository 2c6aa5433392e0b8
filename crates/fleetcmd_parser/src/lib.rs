//! Command-language front end for fleet orders.
//!
//! This crate turns the text typed into the order box into a typed command,
//! producing useful partial results while the player is still typing.
//!
//! # Architecture
//!
//! ```text
//! "F5W1W3"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [F, 5, W, 1, W, 3, EOF]
//! └─────────────────┘
//!          │
//!          ├──────────────────────────┐
//!          ▼                          ▼
//! ┌─────────────────┐        ┌─────────────────┐
//! │ PARSER          │        │ CONTEXT         │  → fleet / move_path
//! │                 │        │ DETECTION       │
//! └─────────────────┘        └─────────────────┘
//!          │
//!          ▼
//!   Move { F5, [W1, W3] }  →  "F5W1W3"
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`grammar`] - Declarative table of legal command shapes
//! - [`ast`] - Complete and partial command representations
//! - [`context`] - Infers which argument the player is typing
//! - [`parser`] - Progressive and final parse entry points
//! - [`error`] - Positioned syntax errors
//! - [`fuzzy`] - String-similarity scoring for ranking

pub mod ast;
pub mod context;
pub mod error;
pub mod fuzzy;
pub mod grammar;
pub mod parser;
pub mod tokenizer;

// Re-export main types for convenience
pub use ast::{Command, CommandKind, Target, WorldTarget};
pub use context::{FleetStage, ParseContext, WorldStage, detect_context};
pub use error::SyntaxError;
pub use parser::{ParseOutcome, parse_final, parse_progressive};
pub use tokenizer::{Token, TokenKind, tokenize};
