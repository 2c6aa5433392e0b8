//! Recursive-descent parser.
//!
//! Two entry points share one core:
//! - [`parse_progressive`] runs on every keystroke. It returns the best
//!   command it could build, collects errors instead of failing, and reports
//!   whether every token was consumed.
//! - [`parse_final`] runs on submission. It additionally reports leftover
//!   tokens as an incomplete command.

use fleetcmd_foundation::{FleetId, WorldId};
use tracing::trace;

use crate::ast::{Command, Target, WorldTarget};
use crate::context::{ParseContext, detect_context};
use crate::error::{Expectation, Found, SyntaxError};
use crate::tokenizer::{Token, TokenKind, tokenize};

/// Tokens that may start a command.
const COMMAND_START: &[TokenKind] = &[
    TokenKind::FleetPrefix,
    TokenKind::WorldPrefix,
    TokenKind::Join,
    TokenKind::Turn,
];

/// Tokens that may follow `F<n>`.
const FLEET_ACTIONS: &[TokenKind] = &[
    TokenKind::WorldPrefix,
    TokenKind::Transfer,
    TokenKind::Attack,
];

static EOF_TOKEN: Token = Token {
    kind: TokenKind::EndOfInput,
    value: String::new(),
    offset: 0,
};

/// Result of parsing player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Best-effort command; `None` for empty input or on error.
    pub command: Option<Command>,
    /// Input stage, detected independently of the parse.
    pub context: ParseContext,
    /// Syntax errors, in the order they were found.
    pub errors: Vec<SyntaxError>,
    /// True if the parse stopped exactly at end of input.
    pub consumed_all: bool,
    /// The token stream the parse ran over.
    pub tokens: Vec<Token>,
}

impl ParseOutcome {
    /// Returns true if a command was produced without errors.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && self.command.is_some()
    }

    /// Returns true if nothing but whitespace was typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.context == ParseContext::Empty
    }
}

/// Parses input on a keystroke, tolerating incomplete commands.
#[must_use]
pub fn parse_progressive(input: &str) -> ParseOutcome {
    run(input).0
}

/// Parses input for submission.
///
/// Identical to [`parse_progressive`], plus an [`SyntaxError::Incomplete`]
/// error when tokens remain after the command, even if a command was built.
#[must_use]
pub fn parse_final(input: &str) -> ParseOutcome {
    let (mut outcome, stopped_at) = run(input);
    if outcome.errors.is_empty() && !outcome.consumed_all {
        let token = outcome.tokens.get(stopped_at).unwrap_or(&EOF_TOKEN);
        outcome.errors.push(SyntaxError::Incomplete {
            found: Found::from(token),
            offset: token.offset,
        });
    }
    outcome
}

fn run(input: &str) -> (ParseOutcome, usize) {
    let tokens = tokenize(input);
    let context = detect_context(&tokens);

    let mut parser = Parser::new(&tokens);
    let (command, errors) = match parser.command() {
        Ok(command) => (command, Vec::new()),
        Err(err) => (None, vec![err]),
    };
    let consumed_all = errors.is_empty() && parser.at_end();
    let stopped_at = parser.pos;

    trace!(
        input,
        %context,
        ?command,
        errors = errors.len(),
        consumed_all,
        "parsed"
    );

    let outcome = ParseOutcome {
        command,
        context,
        errors,
        consumed_all,
        tokens,
    };
    (outcome, stopped_at)
}

/// Cursor over a token stream.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &'t Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    fn at_end(&self) -> bool {
        self.peek().is_eof()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token; never moves past end of input.
    fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> Option<&'t Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, SyntaxError> {
        self.eat(kind)
            .ok_or_else(|| SyntaxError::expected(Expectation::One(kind), self.peek()))
    }

    fn number(&mut self) -> Result<u32, SyntaxError> {
        let token = self.expect(TokenKind::Number)?;
        token
            .value
            .parse()
            .map_err(|_| SyntaxError::NumberOutOfRange {
                text: token.value.clone(),
                offset: token.offset,
            })
    }

    /// Dispatches on the leading token.
    fn command(&mut self) -> Result<Option<Command>, SyntaxError> {
        let token = self.peek();
        let command = match token.kind {
            TokenKind::EndOfInput => return Ok(None),
            TokenKind::FleetPrefix => self.fleet_command()?,
            TokenKind::WorldPrefix => self.world_command()?,
            TokenKind::Join => {
                self.advance();
                match self.eat(TokenKind::JoinArgs) {
                    Some(args) => Command::Join {
                        args: args.value.clone(),
                    },
                    None => Command::PartialJoin,
                }
            }
            TokenKind::Turn => {
                self.advance();
                Command::Turn
            }
            _ => {
                return Err(SyntaxError::expected(
                    Expectation::AnyOf(COMMAND_START),
                    token,
                ));
            }
        };
        Ok(Some(command))
    }

    /// `F<n>` followed by a path, a transfer, or an attack.
    fn fleet_command(&mut self) -> Result<Command, SyntaxError> {
        self.expect(TokenKind::FleetPrefix)?;
        let fleet = FleetId(self.number()?);

        let next = self.peek();
        match next.kind {
            TokenKind::EndOfInput => Ok(Command::PartialFleet { fleet }),
            TokenKind::WorldPrefix => Ok(Command::Move {
                fleet,
                path: self.path()?,
            }),
            TokenKind::Transfer => {
                self.advance();
                let amount = self.number()?;
                Ok(match self.target()? {
                    Some(target) => Command::Transfer {
                        fleet,
                        amount,
                        target,
                    },
                    None => Command::PartialTransfer { fleet, amount },
                })
            }
            TokenKind::Attack => {
                self.advance();
                self.attack(fleet)
            }
            _ => Err(SyntaxError::expected(
                Expectation::AnyOf(FLEET_ACTIONS),
                next,
            )),
        }
    }

    /// `W<n>` followed by a build.
    fn world_command(&mut self) -> Result<Command, SyntaxError> {
        self.expect(TokenKind::WorldPrefix)?;
        let world = WorldId(self.number()?);

        if self.at_end() {
            return Ok(Command::PartialWorld { world });
        }

        self.expect(TokenKind::Build)?;
        let amount = self.number()?;
        Ok(match self.target()? {
            Some(target) => Command::Build {
                world,
                amount,
                target,
            },
            None => Command::PartialBuild { world, amount },
        })
    }

    /// One or more `W<n>` hops, taken greedily.
    fn path(&mut self) -> Result<Vec<WorldId>, SyntaxError> {
        let mut path = Vec::new();
        while self.eat(TokenKind::WorldPrefix).is_some() {
            path.push(WorldId(self.number()?));
        }
        if path.is_empty() {
            return Err(SyntaxError::expected(
                Expectation::One(TokenKind::WorldPrefix),
                self.peek(),
            ));
        }
        Ok(path)
    }

    /// Optional `I`, `P`, or `F<n>` destination shared by build and transfer.
    fn target(&mut self) -> Result<Option<Target>, SyntaxError> {
        let target = match self.peek().kind {
            TokenKind::TargetIndustry => {
                self.advance();
                Target::Industry
            }
            TokenKind::TargetPopulation => {
                self.advance();
                Target::Population
            }
            TokenKind::FleetPrefix => {
                self.advance();
                Target::Fleet(FleetId(self.number()?))
            }
            _ => return Ok(None),
        };
        Ok(Some(target))
    }

    /// What follows `A`: nothing (ambush), `P`/`I` (fire at world), or
    /// `F<n>` (fire at fleet).
    fn attack(&mut self, fleet: FleetId) -> Result<Command, SyntaxError> {
        match self.peek().kind {
            TokenKind::EndOfInput => Ok(Command::Ambush { fleet }),
            TokenKind::TargetPopulation => {
                self.advance();
                Ok(Command::FireAtWorld {
                    fleet,
                    target: WorldTarget::Population,
                })
            }
            TokenKind::TargetIndustry => {
                self.advance();
                Ok(Command::FireAtWorld {
                    fleet,
                    target: WorldTarget::Industry,
                })
            }
            TokenKind::FleetPrefix => {
                self.advance();
                Ok(Command::FireAtFleet {
                    fleet,
                    target: FleetId(self.number()?),
                })
            }
            _ => Ok(Self::ambush_fallback(fleet)),
        }
    }

    /// Any unrecognised token after `A` still yields an ambush. The token is
    /// left unconsumed, so [`parse_final`] rejects the input as incomplete.
    fn ambush_fallback(fleet: FleetId) -> Command {
        Command::Ambush { fleet }
    }
}
