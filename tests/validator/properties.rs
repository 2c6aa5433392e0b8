//! Property tests for validation.

use fleetcmd_foundation::GameState;
use fleetcmd_parser::parse_progressive;
use fleetcmd_validator::{ValidationMode, Validator};
use proptest::prelude::*;

/// Inputs built from the command alphabet, so most of them parse.
fn command_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            (0u32..12).prop_map(|n| format!("F{n}")),
            (0u32..7).prop_map(|n| format!("W{n}")),
            (0u32..30).prop_map(|n| format!("T{n}")),
            (0u32..30).prop_map(|n| format!("B{n}")),
            Just("A".to_string()),
            Just("I".to_string()),
            Just("P".to_string()),
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

fn mode() -> impl Strategy<Value = ValidationMode> {
    prop_oneof![Just(ValidationMode::Partial), Just(ValidationMode::Complete)]
}

proptest! {
    #[test]
    fn validation_is_idempotent(input in command_like(), mode in mode()) {
        let state = GameState::demo();
        let command = parse_progressive(&input).command;
        let validator = Validator::new(&state);
        let first = validator.validate(command.as_ref(), mode);
        let second = validator.validate(command.as_ref(), mode);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn validity_is_exactly_no_errors(input in command_like(), mode in mode()) {
        let state = GameState::demo();
        let command = parse_progressive(&input).command;
        let verdict = Validator::new(&state).validate(command.as_ref(), mode);
        prop_assert_eq!(verdict.is_valid(), verdict.errors().is_empty());
    }

    #[test]
    fn partial_mode_accepts_every_partial(input in command_like()) {
        let state = GameState::demo();
        if let Some(command) = parse_progressive(&input).command {
            if command.is_partial() {
                let validator = Validator::new(&state);
                let verdict = validator.validate(Some(&command), ValidationMode::Partial);
                prop_assert!(verdict.is_valid());
            }
        }
    }
}
