//! End-to-end tests across every layer.
//!
//! These drive the console the way a player does: keystroke by keystroke,
//! picking suggestions, then submitting.

use fleetcmd::complete::SuggestionKind;
use fleetcmd::foundation::{FleetId, GameState};
use fleetcmd::parser::{
    Command, FleetStage, ParseContext, SyntaxError, parse_final, parse_progressive,
};
use fleetcmd::runtime::serialize::{load_from_file, save_to_file};
use fleetcmd::runtime::{Console, ConsoleConfig, MemoryStore, SubmitError};

fn console() -> Console<MemoryStore> {
    Console::new(ConsoleConfig::plain(), MemoryStore::new())
}

fn pick(console: &Console<MemoryStore>, state: &GameState, input: &str, text: &str) -> String {
    let analysis = console.analyze(state, input);
    let offered = &analysis.suggestions;
    let found = analysis
        .suggestions
        .iter()
        .find(|s| s.text == text)
        .unwrap_or_else(|| panic!("{text} not offered for {input:?}: {offered:?}"));
    found.text.clone()
}

#[test]
fn typing_a_move_by_suggestion() {
    let state = GameState::demo();
    let mut console = console();

    let input = pick(&console, &state, "", "F1");
    let input = pick(&console, &state, &input, "F1W");
    assert_eq!(
        console.analyze(&state, &input).outcome.context,
        ParseContext::Fleet(FleetStage::Action)
    );
    let input = pick(&console, &state, &input, "F1W3");
    assert_eq!(
        console.analyze(&state, &input).outcome.context,
        ParseContext::Fleet(FleetStage::MovePath)
    );

    let analysis = console.analyze(&state, &input);
    assert_eq!(analysis.suggestions[0].kind, SuggestionKind::Submit);
    assert!(analysis.suggestions[0].complete);

    let submission = console.submit(&state, &input).unwrap();
    assert_eq!(submission.wire, "F1W3");
    assert_eq!(console.history().iter().last(), Some("F1W3"));
}

#[test]
fn every_offered_completion_is_honest() {
    let state = GameState::demo();
    let console = console();
    for input in ["", "F", "F1", "F1W", "F1T", "F1T5", "F3A", "W1", "W1B2", "J", "JOIN ", "T"] {
        for suggestion in console.analyze(&state, input).suggestions {
            let parsed = parse_final(&suggestion.text);
            assert_eq!(
                suggestion.complete,
                parsed.is_ok() && parsed.command.as_ref().is_some_and(Command::is_complete),
                "{input:?} -> {:?}",
                suggestion.text
            );
        }
    }
}

#[test]
fn snapshot_round_trips_through_a_file() {
    let name = format!("fleetcmd_it_state_{}.msgpack", std::process::id());
    let path = std::env::temp_dir().join(name);
    let state = GameState::demo();
    save_to_file(&state, &path).unwrap();
    let loaded = load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let console = console();
    assert_eq!(
        console.analyze(&state, "F1").suggestions,
        console.analyze(&loaded, "F1").suggestions
    );
}

#[test]
fn warnings_are_surfaced_before_sending() {
    let state = GameState::demo();
    let mut console = console();

    let analysis = console.analyze(&state, "F1AF2");
    assert!(analysis.verdict.is_valid());
    assert!(analysis.suggestions[0].danger);

    let submission = console.check(&state, "F1AF2").unwrap();
    assert!(submission.needs_confirmation());
    assert!(console.history().is_empty());
    console.commit(&submission);
    assert_eq!(console.history().len(), 1);
}

// =============================================================================
// Regressions
// =============================================================================

/// An unrecognised attack target falls back to an ambush while typing,
/// leaving the stray token behind. Submission must refuse it.
#[test]
fn attack_fallback_is_never_sent() {
    let progressive = parse_progressive("F1AX");
    assert_eq!(
        progressive.command,
        Some(Command::Ambush { fleet: FleetId(1) })
    );
    assert!(!progressive.consumed_all);

    let last = parse_final("F1AX");
    assert!(matches!(
        last.errors.as_slice(),
        [SyntaxError::Incomplete { offset: 3, .. }]
    ));

    let state = GameState::demo();
    let mut console = console();
    let analysis = console.analyze(&state, "F1AX");
    let offered = &analysis.suggestions;
    assert!(offered.iter().all(|s| s.kind != SuggestionKind::Submit));
    assert!(matches!(
        console.submit(&state, "F1AX"),
        Err(SubmitError::Syntax(_))
    ));
    assert!(console.history().is_empty());
}
