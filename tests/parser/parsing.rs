//! Progressive and final parsing.

use fleetcmd_foundation::{FleetId, WorldId};
use fleetcmd_parser::{Command, SyntaxError, Target, WorldTarget, parse_final, parse_progressive};

fn command(input: &str) -> Command {
    let outcome = parse_final(input);
    assert!(outcome.errors.is_empty(), "{input}: {:?}", outcome.errors);
    outcome.command.expect("command")
}

// =============================================================================
// Complete commands
// =============================================================================

#[test]
fn every_wire_form() {
    assert_eq!(
        command("F5W1W3W10"),
        Command::Move {
            fleet: FleetId(5),
            path: vec![WorldId(1), WorldId(3), WorldId(10)],
        }
    );
    assert_eq!(
        command("W3B25P"),
        Command::Build {
            world: WorldId(3),
            amount: 25,
            target: Target::Population,
        }
    );
    assert_eq!(
        command("F5T10F7"),
        Command::Transfer {
            fleet: FleetId(5),
            amount: 10,
            target: Target::Fleet(FleetId(7)),
        }
    );
    assert_eq!(
        command("F5AI"),
        Command::FireAtWorld {
            fleet: FleetId(5),
            target: WorldTarget::Industry,
        }
    );
    assert_eq!(
        command("F5AF9"),
        Command::FireAtFleet {
            fleet: FleetId(5),
            target: FleetId(9),
        }
    );
    assert_eq!(command("F5A"), Command::Ambush { fleet: FleetId(5) });
    assert_eq!(
        command("JOIN Pirate Jo"),
        Command::Join {
            args: "Pirate Jo".to_string()
        }
    );
    assert_eq!(command("TURN"), Command::Turn);
}

#[test]
fn leading_zeros_normalize() {
    assert_eq!(command("F05W007").to_wire().as_deref(), Some("F5W7"));
}

// =============================================================================
// Partial commands
// =============================================================================

#[test]
fn partials_while_typing() {
    let cases = [
        ("F5", Command::PartialFleet { fleet: FleetId(5) }),
        ("W3", Command::PartialWorld { world: WorldId(3) }),
        (
            "F5T10",
            Command::PartialTransfer {
                fleet: FleetId(5),
                amount: 10,
            },
        ),
        (
            "W3B25",
            Command::PartialBuild {
                world: WorldId(3),
                amount: 25,
            },
        ),
        ("JOIN", Command::PartialJoin),
    ];
    for (input, expected) in cases {
        let outcome = parse_progressive(input);
        assert!(outcome.is_ok(), "{input}");
        assert!(outcome.consumed_all, "{input}");
        assert_eq!(outcome.command, Some(expected));
    }
}

#[test]
fn partials_have_no_wire_form() {
    assert_eq!(command("F5").to_wire(), None);
    assert!(command("W3B2").is_partial());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_number_is_positioned() {
    let outcome = parse_progressive("F5T");
    assert_eq!(outcome.command, None);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].offset(), 3);
    assert_eq!(
        outcome.errors[0].to_string(),
        "expected NUMBER, found EOF at offset 3"
    );
}

#[test]
fn world_needs_build() {
    let outcome = parse_progressive("W3T5");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].to_string().starts_with("expected BUILD"));
}

#[test]
fn garbage_start() {
    let outcome = parse_progressive("?");
    assert_eq!(outcome.command, None);
    assert!(matches!(outcome.errors[0], SyntaxError::Expected { offset: 0, .. }));
}

#[test]
fn oversized_numbers() {
    let outcome = parse_progressive("F99999999999");
    assert!(matches!(
        outcome.errors[0],
        SyntaxError::NumberOutOfRange { offset: 1, .. }
    ));
}

#[test]
fn final_flags_leftovers() {
    let progressive = parse_progressive("F5W1B");
    assert!(progressive.errors.is_empty());
    assert!(!progressive.consumed_all);

    let final_ = parse_final("F5W1B");
    assert!(final_.command.is_some());
    assert!(matches!(
        final_.errors.as_slice(),
        [SyntaxError::Incomplete { offset: 4, .. }]
    ));
}

#[test]
fn empty_input_is_not_an_error() {
    let outcome = parse_final("   ");
    assert!(outcome.is_empty());
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.command, None);
}
