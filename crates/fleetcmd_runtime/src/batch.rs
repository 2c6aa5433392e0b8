//! Non-interactive submission of a list of commands.
//!
//! Each input line is one command. Blank lines and lines starting with `#`
//! are skipped. Sent commands are written to the output as wire strings,
//! one per line.

use std::io::{BufRead, Write};

use fleetcmd_foundation::{Error, GameState, Result};
use tracing::warn;

use crate::console::Console;
use crate::store::KeyValueStore;

/// A line that was not sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// One-based input line number.
    pub line: usize,
    /// The input as written.
    pub input: String,
    /// Why it was not sent.
    pub reason: String,
}

/// Outcome of a batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Wire strings that were sent, in order.
    pub sent: Vec<String>,
    /// Commands held back because they carried warnings.
    pub held: Vec<Problem>,
    /// Commands that failed to parse or validate.
    pub rejected: Vec<Problem>,
}

impl BatchReport {
    /// Returns true if every command was sent.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.held.is_empty() && self.rejected.is_empty()
    }
}

/// Submits every command in `input`, writing sent wire strings to `output`.
///
/// Commands with warnings are only sent when `accept_warnings` is set.
///
/// # Errors
///
/// Returns an error if reading the input or writing the output fails.
pub fn run_batch<S, R, W>(
    console: &mut Console<S>,
    state: &GameState,
    input: R,
    mut output: W,
    accept_warnings: bool,
) -> Result<BatchReport>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut report = BatchReport::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|e| Error::io(format!("failed to read input: {e}")))?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let number = index + 1;

        let submission = match console.check(state, text) {
            Ok(submission) => submission,
            Err(e) => {
                warn!(line = number, input = text, error = %e, "command rejected");
                report.rejected.push(Problem {
                    line: number,
                    input: text.to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if submission.needs_confirmation() && !accept_warnings {
            report.held.push(Problem {
                line: number,
                input: text.to_string(),
                reason: submission.warnings.join("; "),
            });
            continue;
        }

        console.commit(&submission);
        writeln!(output, "{}", submission.wire)
            .map_err(|e| Error::io(format!("failed to write output: {e}")))?;
        report.sent.push(submission.wire);
    }

    output
        .flush()
        .map_err(|e| Error::io(format!("failed to write output: {e}")))?;
    Ok(report)
}
