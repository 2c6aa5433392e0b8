//! Positioned syntax errors.

use std::fmt;

use thiserror::Error;

use crate::tokenizer::{Token, TokenKind};

/// What the parser wanted to see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// Exactly one kind of token.
    One(TokenKind),
    /// Any of several kinds.
    AnyOf(&'static [TokenKind]),
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(kind) => write!(f, "{kind}"),
            Self::AnyOf(kinds) => {
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        let sep = if i + 1 == kinds.len() { " or " } else { ", " };
                        f.write_str(sep)?;
                    }
                    write!(f, "{kind}")?;
                }
                Ok(())
            }
        }
    }
}

/// The token the parser actually saw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Found {
    /// Its kind (`EOF` at end of input).
    pub kind: TokenKind,
    /// Its text.
    pub text: String,
}

impl From<&Token> for Found {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind,
            text: token.value.clone(),
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Unknown {
            write!(f, "'{}'", self.text)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// A syntax error. Every variant carries the byte offset it applies to.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A specific token was required.
    #[error("expected {expected}, found {found} at offset {offset}")]
    Expected {
        /// What was required.
        expected: Expectation,
        /// What was there instead.
        found: Found,
        /// Byte offset of the offending token.
        offset: usize,
    },

    /// A number does not fit an identifier or amount.
    #[error("number {text} at offset {offset} is too large")]
    NumberOutOfRange {
        /// The digits as typed.
        text: String,
        /// Byte offset of the number.
        offset: usize,
    },

    /// Tokens remain after a complete command at submission.
    #[error("incomplete command: unexpected {found} at offset {offset}")]
    Incomplete {
        /// First token that was not consumed.
        found: Found,
        /// Byte offset of that token.
        offset: usize,
    },
}

impl SyntaxError {
    /// Builds an expectation failure at `token`.
    #[must_use]
    pub fn expected(expected: Expectation, token: &Token) -> Self {
        Self::Expected {
            expected,
            found: Found::from(token),
            offset: token.offset,
        }
    }

    /// Byte offset the error applies to.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Expected { offset, .. }
            | Self::NumberOutOfRange { offset, .. }
            | Self::Incomplete { offset, .. } => *offset,
        }
    }
}
