//! Top-level ranking and suggestion invariants.

use fleetcmd_complete::{Autocomplete, DEFAULT_LIMIT, Suggestion, SuggestionKind};
use fleetcmd_foundation::{FleetId, FleetInfo, GameState, WorldId, WorldInfo};
use fleetcmd_parser::{parse_final, parse_progressive};
use fleetcmd_validator::{ValidationMode, Validator};

/// Owns fleets 3 and 7 and world 2; has not joined.
fn newcomer() -> GameState {
    GameState::new("me")
        .with_world(
            WorldInfo::new(WorldId(2))
                .with_owner("me")
                .with_industry(5)
                .with_population(9)
                .with_connections([4]),
        )
        .with_world(WorldInfo::new(WorldId(4)).with_connections([2]))
        .with_fleet(
            FleetInfo::new(FleetId(3), WorldId(2))
                .with_owner("me")
                .with_ships(4),
        )
        .with_fleet(
            FleetInfo::new(FleetId(7), WorldId(4))
                .with_owner("me")
                .with_ships(1)
                .in_transit(),
        )
        .with_fleet(
            FleetInfo::new(FleetId(8), WorldId(4))
                .with_owner("other")
                .with_ships(2),
        )
}

fn suggest(state: &GameState, input: &str) -> Vec<Suggestion> {
    let outcome = parse_progressive(input);
    let verdict = Validator::new(state).validate(outcome.command.as_ref(), ValidationMode::Partial);
    Autocomplete::new(state).suggest(input, &outcome.context, &verdict)
}

#[test]
fn empty_input_ranking() {
    let found = suggest(&newcomer(), "");
    let ranked: Vec<(&str, Option<i32>)> = found
        .iter()
        .map(|s| (s.text.as_str(), s.priority))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("JOIN ", Some(100)),
            ("F3", Some(10)),
            ("F7", Some(10)),
            ("W2", Some(8)),
            ("TURN", Some(5)),
        ]
    );
    assert_eq!(found[1].description, "4 ships at W2");
    assert_eq!(found[2].description, "1 ships in transit");
}

#[test]
fn joined_players_lose_the_join_entry() {
    let found = suggest(&newcomer().with_joined(true), "");
    assert_eq!(found[0].text, "F3");
    assert!(found.iter().all(|s| !s.text.starts_with("JOIN")));
}

#[test]
fn top_level_is_capped() {
    let mut state = GameState::new("me");
    for id in 1..=20 {
        state = state.with_world(WorldInfo::new(WorldId(id)).with_owner("me"));
    }
    assert_eq!(suggest(&state, "").len(), DEFAULT_LIMIT);
}

#[test]
fn complete_flag_matches_the_parser() {
    let state = GameState::demo();
    for input in ["", "F1", "F1W", "F1W3", "F1T", "F1T5", "F3A", "W1B", "W1B3", "JOIN", "x"] {
        for suggestion in suggest(&state, input) {
            let outcome = parse_final(&suggestion.text);
            let submittable = outcome.errors.is_empty()
                && outcome.command.is_some_and(|c| c.is_complete());
            let text = &suggestion.text;
            assert_eq!(suggestion.complete, submittable, "{input} -> {text}");
        }
    }
}

#[test]
fn suggestions_are_unique() {
    let state = GameState::demo();
    for input in ["", "F1", "F1W3", "F1T5", "W1B3", "F3A", "JOIN m"] {
        let found = suggest(&state, input);
        let mut texts: Vec<&str> = found.iter().map(|s| s.text.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), found.len(), "{input}");
    }
}

#[test]
fn valid_commands_offer_submit_first() {
    let state = GameState::demo();
    let found = suggest(&state, "f1w2");
    assert_eq!(found[0].kind, SuggestionKind::Submit);
    assert_eq!(found[0].text, "F1W2");
    assert!(!found[0].danger);
    assert!(found[0].complete);
}

#[test]
fn invalid_commands_are_not_offered_for_submit() {
    let state = GameState::demo();
    // Fleet 9 belongs to the rival.
    let found = suggest(&state, "F9A");
    assert!(found.iter().all(|s| s.kind != SuggestionKind::Submit));
}
