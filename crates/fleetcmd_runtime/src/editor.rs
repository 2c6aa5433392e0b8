//! Line editor abstraction for the console.
//!
//! The REPL talks to a [`LineEditor`]; [`RustylineEditor`] is the terminal
//! implementation, with tab completion and inline hints driven by the
//! autocomplete engine.

use std::borrow::Cow;

use fleetcmd_complete::Suggestion;
use fleetcmd_foundation::{Error, GameState, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Context, Editor, Helper, Validator as RLValidator};

use crate::config::ConsoleConfig;
use crate::console::analyze;
use crate::highlight::CommandHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
///
/// This trait allows swapping out the underlying line editor implementation
/// without changing the REPL code.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to the editor's recall list.
    fn add_history(&mut self, line: &str);

    /// Replace the snapshot completions are drawn from.
    fn set_state(&mut self, state: &GameState);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, RLValidator)]
struct ConsoleHelper {
    state: GameState,
    max_suggestions: usize,
    highlighter: CommandHighlighter,
    color: bool,
}

impl ConsoleHelper {
    fn suggestions(&self, input: &str) -> Vec<Suggestion> {
        analyze(&self.state, input, self.max_suggestions).suggestions
    }
}

impl Completer for ConsoleHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = line.get(..pos).unwrap_or(line);
        let candidates = self
            .suggestions(head)
            .into_iter()
            .map(|s| Pair {
                display: format!("{:<14} {}", s.text, s.description),
                replacement: s.text,
            })
            .collect();
        // Suggestions replace the whole line up to the cursor.
        Ok((0, candidates))
    }
}

impl Hinter for ConsoleHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.trim().is_empty() {
            return None;
        }
        self.suggestions(line)
            .iter()
            .filter_map(|s| s.remainder(line))
            .find(|rest| !rest.is_empty())
            .map(str::to_string)
    }
}

impl Highlighter for ConsoleHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default && self.color {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.color
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if self.color {
            Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
        } else {
            Cow::Borrowed(hint)
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ConsoleHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor completing against `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(state: &GameState, config: &ConsoleConfig) -> Result<Self> {
        let rl_config = Config::builder()
            .auto_add_history(false)
            .completion_type(CompletionType::List)
            .max_history_size(config.history_size.max(1))
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = ConsoleHelper {
            state: state.clone(),
            max_suggestions: config.max_suggestions,
            highlighter: CommandHighlighter::new(config.color),
            color: config.color,
        };

        let mut editor =
            Editor::with_config(rl_config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::io(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_state(&mut self, state: &GameState) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.state = state.clone();
        }
    }
}
