//! Input tokenization.
//!
//! Converts the raw text of the order box into a flat stream of tokens.
//! Tokenizing never fails: characters the language does not know become
//! [`TokenKind::Unknown`] tokens and the parser reports them later.

use std::fmt;

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `F` immediately followed by a digit.
    FleetPrefix,
    /// `W` immediately followed by a digit.
    WorldPrefix,
    /// `B`
    Build,
    /// `T`
    Transfer,
    /// `A`
    Attack,
    /// `I`
    TargetIndustry,
    /// `P`
    TargetPopulation,
    /// A maximal run of ASCII digits.
    Number,
    /// The `JOIN` keyword.
    Join,
    /// Everything after `JOIN`, trimmed, original casing.
    JoinArgs,
    /// The `TURN` keyword.
    Turn,
    /// Any character the language does not recognise.
    Unknown,
    /// End of input (always the last token).
    EndOfInput,
}

impl TokenKind {
    /// Returns the canonical upper-case name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FleetPrefix => "FLEET_PREFIX",
            Self::WorldPrefix => "WORLD_PREFIX",
            Self::Build => "BUILD",
            Self::Transfer => "TRANSFER",
            Self::Attack => "ATTACK",
            Self::TargetIndustry => "TARGET_INDUSTRY",
            Self::TargetPopulation => "TARGET_POPULATION",
            Self::Number => "NUMBER",
            Self::Join => "JOIN",
            Self::JoinArgs => "JOIN_ARGS",
            Self::Turn => "TURN",
            Self::Unknown => "UNKNOWN",
            Self::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The token text (upper-cased except for [`TokenKind::JoinArgs`]).
    pub value: String,
    /// Byte offset into the trimmed input.
    pub offset: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            offset,
        }
    }

    /// Byte offset just past this token.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.value.len()
    }

    /// Returns true for the end-of-input marker.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Tokenizes a raw input string.
///
/// - Leading and trailing whitespace is trimmed; offsets refer to the
///   trimmed text and [`TokenKind::EndOfInput`] sits at its length
/// - Letters are matched case-insensitively
/// - `JOIN` swallows the rest of the line as a single argument token
/// - `TURN` ends scanning
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let text = input.trim();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(ch) = text[pos..].chars().next() {
        let rest = &text[pos..];

        if starts_with_keyword(rest, "JOIN") {
            tokens.push(Token::new(TokenKind::Join, "JOIN", pos));
            let tail = &rest[4..];
            let args = tail.trim();
            if !args.is_empty() {
                let offset = pos + 4 + (tail.len() - tail.trim_start().len());
                tokens.push(Token::new(TokenKind::JoinArgs, args, offset));
            }
            break;
        }

        if starts_with_keyword(rest, "TURN") {
            tokens.push(Token::new(TokenKind::Turn, "TURN", pos));
            break;
        }

        let digit_follows = rest[ch.len_utf8()..].starts_with(|c: char| c.is_ascii_digit());
        let upper = ch.to_ascii_uppercase();

        let kind = match upper {
            'F' if digit_follows => Some(TokenKind::FleetPrefix),
            'W' if digit_follows => Some(TokenKind::WorldPrefix),
            'B' => Some(TokenKind::Build),
            'T' => Some(TokenKind::Transfer),
            'A' => Some(TokenKind::Attack),
            'I' => Some(TokenKind::TargetIndustry),
            'P' => Some(TokenKind::TargetPopulation),
            _ => None,
        };

        if let Some(kind) = kind {
            tokens.push(Token::new(kind, upper.to_string(), pos));
            pos += 1;
        } else if ch.is_ascii_digit() {
            let len = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            tokens.push(Token::new(TokenKind::Number, &rest[..len], pos));
            pos += len;
        } else if ch.is_whitespace() {
            pos += ch.len_utf8();
        } else {
            tokens.push(Token::new(TokenKind::Unknown, upper.to_string(), pos));
            pos += ch.len_utf8();
        }
    }

    tokens.push(Token::new(TokenKind::EndOfInput, "", text.len()));
    tokens
}

fn starts_with_keyword(rest: &str, keyword: &str) -> bool {
    rest.get(..keyword.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(keyword))
}
