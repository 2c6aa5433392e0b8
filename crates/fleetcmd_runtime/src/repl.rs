//! The interactive order console.

use std::fmt::Write as _;
use std::io::{self, Write};

use fleetcmd_foundation::{GameState, Result};
use fleetcmd_parser::grammar::PRODUCTIONS;

use crate::console::{Console, Submission, SubmitError};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::history::Direction;
use crate::store::KeyValueStore;

const CONFIRM_PROMPT: &str = "Send anyway? [y/N] ";

/// What one line of input did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Blank input.
    Nothing,
    /// A command was sent.
    Sent(Submission),
    /// The player declined to send a command with warnings.
    Cancelled,
    /// The input could not be sent.
    Rejected(SubmitError),
    /// Text produced by a meta-command.
    Output(String),
    /// The player asked to leave.
    Quit,
}

/// The interactive console loop.
pub struct Repl<S: KeyValueStore, E: LineEditor = RustylineEditor> {
    editor: E,
    console: Console<S>,
    state: GameState,
    show_banner: bool,
}

impl<S: KeyValueStore> Repl<S, RustylineEditor> {
    /// Creates a console loop with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(console: Console<S>, state: GameState) -> Result<Self> {
        let editor = RustylineEditor::new(&state, console.config())?;
        Ok(Self::with_editor(console, state, editor))
    }
}

impl<S: KeyValueStore, E: LineEditor> Repl<S, E> {
    /// Creates a console loop with the given editor.
    ///
    /// The editor's recall list is seeded from the console history.
    pub fn with_editor(console: Console<S>, state: GameState, mut editor: E) -> Self {
        for entry in console.history().iter() {
            editor.add_history(entry);
        }
        editor.set_state(&state);
        Self {
            editor,
            console,
            state,
            show_banner: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the console.
    #[must_use]
    pub const fn console(&self) -> &Console<S> {
        &self.console
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Replaces the snapshot commands are checked against.
    pub fn set_state(&mut self, state: GameState) {
        self.editor.set_state(&state);
        self.state = state;
    }

    /// Runs the loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.console.config().prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            match self.eval(&line)? {
                Reply::Nothing | Reply::Cancelled => {}
                Reply::Sent(submission) => println!("{}", submission.wire),
                Reply::Rejected(err) => self.print_error(&err.to_string()),
                Reply::Output(text) => println!("{text}"),
                Reply::Quit => break,
            }
        }

        let _ = io::stdout().flush();
        Ok(())
    }

    /// Handles one line of input.
    ///
    /// Commands with warnings are only sent after the player confirms.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the confirmation fails.
    pub fn eval(&mut self, line: &str) -> Result<Reply> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(Reply::Nothing);
        }
        if let Some(meta) = input.strip_prefix(':') {
            return self.meta(meta);
        }
        self.send(input)
    }

    fn send(&mut self, input: &str) -> Result<Reply> {
        let submission = match self.console.check(&self.state, input) {
            Ok(submission) => submission,
            Err(err) => return Ok(Reply::Rejected(err)),
        };

        if submission.needs_confirmation() {
            for warning in &submission.warnings {
                self.print_warning(warning);
            }
            if !self.confirm()? {
                return Ok(Reply::Cancelled);
            }
        }

        self.console.commit(&submission);
        self.editor.add_history(&submission.wire);
        Ok(Reply::Sent(submission))
    }

    fn confirm(&mut self) -> Result<bool> {
        match self.editor.read_line(CONFIRM_PROMPT)? {
            ReadResult::Line(answer) => Ok(matches!(
                answer.trim().to_ascii_lowercase().as_str(),
                "y" | "yes"
            )),
            ReadResult::Interrupted | ReadResult::Eof => Ok(false),
        }
    }

    fn meta(&mut self, command: &str) -> Result<Reply> {
        let (name, rest) = command
            .split_once(char::is_whitespace)
            .unwrap_or((command, ""));
        if name == "again" {
            return match self.recall(rest.trim()) {
                Ok(entry) => self.send(&entry),
                Err(message) => Ok(Reply::Output(message)),
            };
        }
        let reply = match name {
            "quit" | "q" => Reply::Quit,
            "help" | "h" => Reply::Output(help_text()),
            "history" => Reply::Output(self.history_text()),
            "clear-history" => {
                self.console.history_mut().clear();
                Reply::Output("history cleared".to_string())
            }
            "state" => Reply::Output(describe_state(&self.state)),
            "check" => Reply::Output(self.check_text(rest)),
            other => Reply::Output(format!("unknown command ':{other}', try :help")),
        };
        Ok(reply)
    }

    /// Steps `steps` entries back through history, as the up arrow would.
    fn recall(&mut self, steps: &str) -> std::result::Result<String, String> {
        let steps = if steps.is_empty() {
            1
        } else {
            steps
                .parse::<usize>()
                .map_err(|_| format!("expected a number of steps, found '{steps}'"))?
        };
        let history = self.console.history_mut();
        if steps == 0 || steps > history.len() {
            return Err(format!("history holds {} commands", history.len()));
        }

        history.reset_navigation();
        for _ in 0..steps {
            history.navigate(Direction::Up);
        }
        let entry = history.current().map(str::to_string);
        history.reset_navigation();
        entry.ok_or_else(|| "no commands sent yet".to_string())
    }

    fn history_text(&self) -> String {
        let history = self.console.history();
        if history.is_empty() {
            return "no commands sent yet".to_string();
        }
        let mut out = String::new();
        for (i, entry) in history.iter().enumerate() {
            let _ = writeln!(out, "{:>4}  {entry}", i + 1);
        }
        out.truncate(out.trim_end().len());
        out
    }

    fn check_text(&self, input: &str) -> String {
        let analysis = self.console.analyze(&self.state, input);
        let context = &analysis.outcome.context;
        let mut out = format!("context: {context}\n{}", analysis.verdict);
        for suggestion in &analysis.suggestions {
            let _ = write!(out, "\n  {suggestion}");
        }
        out
    }

    fn print_error(&self, message: &str) {
        if self.console.config().color {
            eprintln!("\x1b[31mError: {message}\x1b[0m");
        } else {
            eprintln!("Error: {message}");
        }
    }

    fn print_warning(&self, message: &str) {
        if self.console.config().color {
            eprintln!("\x1b[33mWarning: {message}\x1b[0m");
        } else {
            eprintln!("Warning: {message}");
        }
    }

    fn print_banner(&self) {
        if self.console.config().color {
            println!("\x1b[1;36mfleetcmd\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        } else {
            println!("fleetcmd v{}", env!("CARGO_PKG_VERSION"));
        }
        println!(
            "Commanding as {}. Tab completes, :help lists orders, Ctrl+D exits.\n",
            self.state.player()
        );
        let _ = io::stdout().flush();
    }
}

/// Renders the order reference shown by `:help`.
#[must_use]
pub fn help_text() -> String {
    let mut out = String::from("Orders:\n");
    for production in PRODUCTIONS {
        let _ = writeln!(
            out,
            "  {:<12} {:<44} {}",
            production.example,
            production.render(),
            production.summary
        );
    }
    out.push_str(
        "\nConsole:\n  \
         :help            show this reference\n  \
         :history         list sent commands\n  \
         :again [n]       resend the command n steps back (default 1)\n  \
         :clear-history   forget sent commands\n  \
         :state           summarize the current snapshot\n  \
         :check <input>   show parse context, problems and suggestions\n  \
         :quit            leave the console",
    );
    out
}

/// Summarizes a snapshot for `:state`.
#[must_use]
pub fn describe_state(state: &GameState) -> String {
    let mut out = format!(
        "Player {} ({})\n",
        state.player(),
        if state.is_joined() { "joined" } else { "not joined" }
    );
    out.push_str("Worlds:\n");
    for world in state.worlds() {
        let links: Vec<String> = world.connections.iter().map(ToString::to_string).collect();
        let _ = writeln!(
            out,
            "  {:<5} {:<10} ind {:>3}  pop {:>3}  -> {}",
            world.id,
            world.owner.as_deref().unwrap_or("-"),
            world.industry,
            world.population,
            links.join(" ")
        );
    }
    out.push_str("Fleets:");
    for fleet in state.fleets() {
        let at = fleet
            .world
            .map_or_else(|| "in transit".to_string(), |w| format!("at {w}"));
        let _ = write!(
            out,
            "\n  {:<5} {:<10} {:>3} ships  {at}",
            fleet.id,
            fleet.owner.as_deref().unwrap_or("-"),
            fleet.ships
        );
    }
    let orders: Vec<String> = state
        .orders()
        .map(|o| format!("{} {}", o.fleet, o.kind.as_str()))
        .collect();
    if !orders.is_empty() {
        let _ = write!(out, "\nOrders this turn: {}", orders.join(", "));
    }
    out
}
