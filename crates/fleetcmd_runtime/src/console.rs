//! The per-keystroke and per-submission pipeline.
//!
//! A [`Console`] holds what outlives a single keystroke: configuration and
//! command history. The game-state snapshot is owned by the caller and
//! passed in on every call, so the console always sees the latest one.

use std::fmt;

use fleetcmd_complete::{Autocomplete, Suggestion};
use fleetcmd_foundation::GameState;
use fleetcmd_parser::{Command, ParseOutcome, SyntaxError, parse_final, parse_progressive};
use fleetcmd_validator::{ValidationMode, Validator, Verdict};
use thiserror::Error;
use tracing::info;

use crate::config::ConsoleConfig;
use crate::history::CommandHistory;
use crate::store::KeyValueStore;

/// Live feedback for the current input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// The progressive parse.
    pub outcome: ParseOutcome,
    /// Validation of whatever was parsed, partial commands allowed.
    pub verdict: Verdict,
    /// Ranked completions.
    pub suggestions: Vec<Suggestion>,
}

/// A command ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Canonical wire string.
    pub wire: String,
    /// The parsed command.
    pub command: Command,
    /// Warnings the player should confirm before sending.
    pub warnings: Vec<String>,
}

impl Submission {
    /// Returns true if the player must confirm before sending.
    #[must_use]
    pub fn needs_confirmation(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Why input could not be submitted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The input does not parse as one complete command.
    #[error("syntax error: {}", SyntaxErrors(.0))]
    Syntax(Vec<SyntaxError>),

    /// The command parsed but breaks a game rule.
    #[error("command rejected: {}", .0.errors().join("; "))]
    Rejected(Verdict),

    /// Nothing to submit.
    #[error("nothing to submit")]
    NotSubmittable,
}

struct SyntaxErrors<'a>(&'a [SyntaxError]);

impl fmt::Display for SyntaxErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Runs the keystroke pipeline: parse, validate, suggest.
#[must_use]
pub fn analyze(state: &GameState, input: &str, max_suggestions: usize) -> Analysis {
    let outcome = parse_progressive(input);
    let verdict = Validator::new(state).validate(outcome.command.as_ref(), ValidationMode::Partial);
    let suggestions = Autocomplete::new(state)
        .with_limit(max_suggestions)
        .suggest(input, &outcome.context, &verdict);
    Analysis {
        outcome,
        verdict,
        suggestions,
    }
}

/// Command console state.
#[derive(Debug)]
pub struct Console<S: KeyValueStore> {
    config: ConsoleConfig,
    history: CommandHistory<S>,
}

impl<S: KeyValueStore> Console<S> {
    /// Creates a console, loading any history saved in `store`.
    #[must_use]
    pub fn new(config: ConsoleConfig, store: S) -> Self {
        let history = CommandHistory::load(store, config.history_key.clone(), config.history_size);
        Self { config, history }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Returns the command history.
    #[must_use]
    pub const fn history(&self) -> &CommandHistory<S> {
        &self.history
    }

    /// Returns the command history mutably, for navigation.
    pub fn history_mut(&mut self) -> &mut CommandHistory<S> {
        &mut self.history
    }

    /// Runs the keystroke pipeline with this console's suggestion limit.
    #[must_use]
    pub fn analyze(&self, state: &GameState, input: &str) -> Analysis {
        analyze(state, input, self.config.max_suggestions)
    }

    /// Runs the submission pipeline without recording anything.
    ///
    /// # Errors
    ///
    /// Returns an error unless `input` is exactly one complete command that
    /// passes validation.
    pub fn check(&self, state: &GameState, input: &str) -> Result<Submission, SubmitError> {
        let outcome = parse_final(input);
        if !outcome.errors.is_empty() {
            return Err(SubmitError::Syntax(outcome.errors));
        }
        let command = outcome.command.ok_or(SubmitError::NotSubmittable)?;

        let verdict = Validator::new(state).validate(Some(&command), ValidationMode::Complete);
        if !verdict.is_valid() {
            return Err(SubmitError::Rejected(verdict));
        }

        let wire = command.to_wire().ok_or(SubmitError::NotSubmittable)?;
        Ok(Submission {
            wire,
            command,
            warnings: verdict.warnings().to_vec(),
        })
    }

    /// Records a submission the player has sent.
    pub fn commit(&mut self, submission: &Submission) {
        info!(wire = %submission.wire, warnings = submission.warnings.len(), "command submitted");
        self.history.add(&submission.wire);
    }

    /// Checks `input` and, if it can be sent, records it.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Console::check`].
    pub fn submit(&mut self, state: &GameState, input: &str) -> Result<Submission, SubmitError> {
        let submission = self.check(state, input)?;
        self.commit(&submission);
        Ok(submission)
    }
}
