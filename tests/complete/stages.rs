//! Per-stage completions over the demo map.
//!
//! Demo map: W1 (ours) links W2, W3; W3 (ours) links W1, W4, W5. F1 and F2
//! are ours at W1, F3 is ours at W3 with no ships, F4 is ours in transit,
//! and the rival's F9 sits at W3.

use fleetcmd_complete::{Autocomplete, Suggestion, SuggestionKind};
use fleetcmd_foundation::GameState;
use fleetcmd_parser::parse_progressive;
use fleetcmd_validator::{ValidationMode, Validator};

fn suggest(input: &str) -> Vec<Suggestion> {
    let state = GameState::demo();
    let outcome = parse_progressive(input);
    let command = outcome.command.as_ref();
    let verdict = Validator::new(&state).validate(command, ValidationMode::Partial);
    Autocomplete::new(&state).suggest(input, &outcome.context, &verdict)
}

fn texts(input: &str) -> Vec<String> {
    suggest(input).into_iter().map(|s| s.text).collect()
}

#[test]
fn fleet_action_letters() {
    let found = suggest("F2");
    let actions: Vec<&str> = found
        .iter()
        .filter(|s| s.kind == SuggestionKind::Action)
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(actions, vec!["F2W", "F2T", "F2A"]);
}

#[test]
fn multi_hop_paths_extend_from_the_last_world() {
    let found = texts("F1W3W4");
    assert_eq!(found[0], "F1W3W4");
    assert!(found.contains(&"F1W3W4W2".to_string()));
    assert!(found.contains(&"F1W3W4W3".to_string()));
    assert!(!found.contains(&"F1W3W4W5".to_string()));
}

#[test]
fn path_description_on_first_hop_suggestion() {
    let found = suggest("F1W3W4");
    let first_hop = found
        .iter()
        .find(|s| s.kind != SuggestionKind::Submit)
        .expect("a hop suggestion");
    assert_eq!(first_hop.description, "Path: W1 -> W3 -> W4");
}

#[test]
fn transfer_targets_are_friendly() {
    let found = texts("F1T5");
    assert!(found.contains(&"F1T5F2".to_string()));
    assert!(found.iter().all(|t| t != "F1T5F9"));
}

#[test]
fn build_targets_are_fleets_at_the_world() {
    let found = texts("W1B3");
    assert!(found.contains(&"W1B3I".to_string()));
    assert!(found.contains(&"W1B3P".to_string()));
    assert!(found.contains(&"W1B3F1".to_string()));
    assert!(found.contains(&"W1B3F2".to_string()));
    assert!(found.iter().all(|t| t != "W1B3F3"));
}

#[test]
fn attack_targets_include_ambush_and_hostiles() {
    let found = suggest("F3A");
    let texts: Vec<&str> = found.iter().map(|s| s.text.as_str()).collect();
    assert!(texts.contains(&"F3AP"));
    assert!(texts.contains(&"F3AI"));
    assert!(texts.contains(&"F3AF9"));
}

#[test]
fn turn_context() {
    assert_eq!(texts("TURN"), vec!["TURN"]);
}

#[test]
fn next_hop_after_a_bare_w() {
    assert_eq!(texts("F1W3W"), vec!["F1W3W1", "F1W3W4", "F1W3W5"]);
}

#[test]
fn multi_digit_amounts_are_offered() {
    assert!(texts("F1T1").contains(&"F1T14".to_string()));
    assert!(texts("F1T1").contains(&"F1T1I".to_string()));
}
