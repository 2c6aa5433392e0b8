//! The console pipeline end to end.

use fleetcmd_foundation::{FleetId, GameState, OrderKind};
use fleetcmd_parser::{FleetStage, ParseContext};
use fleetcmd_runtime::{Console, ConsoleConfig, MemoryStore, SubmitError, run_batch};

fn console() -> Console<MemoryStore> {
    Console::new(ConsoleConfig::plain(), MemoryStore::new())
}

#[test]
fn every_keystroke_gets_feedback() {
    let state = GameState::demo();
    let console = console();
    for input in ["", "F", "F1", "F1W", "F1W3"] {
        let analysis = console.analyze(&state, input);
        assert!(!analysis.suggestions.is_empty(), "{input:?}");
        let limit = console.config().max_suggestions;
        assert!(analysis.suggestions.len() <= limit);
    }

    let analysis = console.analyze(&state, "F1W3");
    assert_eq!(
        analysis.outcome.context,
        ParseContext::Fleet(FleetStage::MovePath)
    );
    assert!(analysis.verdict.is_valid());
}

#[test]
fn suggestion_limit_comes_from_config() {
    let state = GameState::demo();
    let console = Console::new(
        ConsoleConfig::plain().with_max_suggestions(2),
        MemoryStore::new(),
    );
    assert_eq!(console.analyze(&state, "").suggestions.len(), 2);
}

#[test]
fn snapshot_changes_are_seen_immediately() {
    let mut console = console();
    let before = GameState::demo();
    let plain = console.check(&before, "F1W2").unwrap();
    assert!(!plain.needs_confirmation());

    let after = before.with_order(FleetId(1), OrderKind::Fire);
    let submission = console.submit(&after, "F1W2").unwrap();
    assert!(submission.needs_confirmation());
}

#[test]
fn incomplete_input_is_a_syntax_error() {
    let state = GameState::demo();
    let err = console().submit(&state, "F1W2 X").unwrap_err();
    assert!(matches!(err, SubmitError::Syntax(_)));
}

#[test]
fn history_bound_comes_from_config() {
    let state = GameState::demo();
    let mut console = Console::new(
        ConsoleConfig::plain().with_history_size(2),
        MemoryStore::new(),
    );
    for input in ["F1W2", "F1W3", "TURN"] {
        console.submit(&state, input).unwrap();
    }
    assert_eq!(
        console.history().iter().collect::<Vec<_>>(),
        vec!["F1W3", "TURN"]
    );
}

#[test]
fn batch_reports_line_numbers() {
    let state = GameState::demo();
    let mut console = console();
    let mut out = Vec::new();
    let input = "TURN\nF1T\n".as_bytes();
    let report = run_batch(&mut console, &state, input, &mut out, false).unwrap();
    assert_eq!(report.sent, vec!["TURN"]);
    assert_eq!(report.rejected[0].line, 2);
    assert!(report.rejected[0].reason.starts_with("syntax error"));
}
