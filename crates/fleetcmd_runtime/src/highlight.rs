//! Syntax highlighting for the console.

use std::borrow::Cow;

use fleetcmd_parser::{TokenKind, tokenize};

const RESET: &str = "\x1b[0m";

/// Highlighter colouring command tokens by kind.
#[derive(Clone, Copy, Debug)]
pub struct CommandHighlighter {
    color: bool,
}

impl CommandHighlighter {
    /// Creates a new highlighter. With `color` off, lines pass through unchanged.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Highlight a line of input.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str) -> Cow<'l, str> {
        if !self.color || line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        // Token offsets are relative to the trimmed line.
        let lead = line.len() - line.trim_start().len();
        let mut result = String::with_capacity(line.len() * 4);
        let mut copied = 0;

        for token in tokenize(line).iter().filter(|t| !t.is_eof()) {
            let start = lead + token.offset;
            let end = lead + token.end();
            let Some(text) = line.get(start..end) else {
                continue;
            };
            result.push_str(&line[copied..start]);
            match color_for(token.kind) {
                Some(color) => {
                    result.push_str(color);
                    result.push_str(text);
                    result.push_str(RESET);
                }
                None => result.push_str(text),
            }
            copied = end;
        }
        result.push_str(&line[copied..]);

        Cow::Owned(result)
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

fn color_for(kind: TokenKind) -> Option<&'static str> {
    match kind {
        // Entities - bold cyan
        TokenKind::FleetPrefix | TokenKind::WorldPrefix => Some("\x1b[1;36m"),
        // Numbers - magenta
        TokenKind::Number => Some("\x1b[35m"),
        // Actions - yellow
        TokenKind::Build | TokenKind::Transfer | TokenKind::Attack => Some("\x1b[33m"),
        // Targets - green
        TokenKind::TargetIndustry | TokenKind::TargetPopulation => Some("\x1b[32m"),
        // Keywords - bold green
        TokenKind::Join | TokenKind::Turn => Some("\x1b[1;32m"),
        // Garbage - red underline
        TokenKind::Unknown => Some("\x1b[4;31m"),
        TokenKind::JoinArgs | TokenKind::EndOfInput => None,
    }
}
