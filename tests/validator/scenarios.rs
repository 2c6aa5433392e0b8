//! Rule checks against hand-built snapshots.

use fleetcmd_foundation::{FleetId, FleetInfo, GameState, OrderKind, WorldId, WorldInfo};
use fleetcmd_parser::parse_final;
use fleetcmd_validator::{ValidationMode, Validator, Verdict};

const ME: &str = "me";
const RIVAL: &str = "rival";

/// Fleet 5 and fleet 9 are ours at world 7; fleet 6 is a rival's at world 7.
fn map() -> GameState {
    GameState::new(ME)
        .with_world(
            WorldInfo::new(WorldId(3))
                .with_owner(ME)
                .with_industry(10)
                .with_connections([7]),
        )
        .with_world(
            WorldInfo::new(WorldId(7))
                .with_owner(RIVAL)
                .with_population(12)
                .with_connections([3, 10]),
        )
        .with_world(WorldInfo::new(WorldId(10)).with_connections([7]))
        .with_fleet(
            FleetInfo::new(FleetId(5), WorldId(7))
                .with_owner(ME)
                .with_ships(8),
        )
        .with_fleet(
            FleetInfo::new(FleetId(9), WorldId(7))
                .with_owner(ME)
                .with_ships(2),
        )
        .with_fleet(
            FleetInfo::new(FleetId(6), WorldId(7))
                .with_owner(RIVAL)
                .with_ships(4),
        )
        .with_fleet(
            FleetInfo::new(FleetId(12), WorldId(3))
                .with_owner(ME)
                .with_ships(1),
        )
}

fn check(state: &GameState, input: &str) -> Verdict {
    let outcome = parse_final(input);
    assert!(outcome.errors.is_empty(), "{input}: {:?}", outcome.errors);
    Validator::new(state).validate(outcome.command.as_ref(), ValidationMode::Complete)
}

// =============================================================================
// Acceptance scenarios
// =============================================================================

#[test]
fn move_with_someone_elses_fleet() {
    let state = map().with_fleet(
        FleetInfo::new(FleetId(5), WorldId(7))
            .with_owner(RIVAL)
            .with_ships(8),
    );
    let verdict = check(&state, "F5W10");
    assert!(!verdict.is_valid());
    assert_eq!(verdict.errors().len(), 1);
    assert!(verdict.errors()[0].contains("not yours"));
    assert!(verdict.suggestions()[0].starts_with("Your fleets: "));
}

#[test]
fn build_beyond_industry() {
    let verdict = check(&map(), "W3B25I");
    assert_eq!(
        verdict.errors(),
        ["Insufficient industry: need 25, have 10"]
    );
    assert_eq!(verdict.suggestions(), ["Maximum buildable: 10"]);
}

#[test]
fn ambush_on_a_foreign_world() {
    let verdict = check(&map(), "F5A");
    assert!(verdict.is_valid());
    assert!(!verdict.has_warnings());
}

#[test]
fn firing_at_own_fleet_warns_once() {
    let verdict = check(&map(), "F5AF9");
    assert!(verdict.is_valid());
    assert_eq!(verdict.warnings().len(), 1);
    assert!(verdict.warnings()[0].contains("your own fleet"));
}

// =============================================================================
// Move
// =============================================================================

#[test]
fn connected_path() {
    assert!(check(&map(), "F5W10W7W3").is_valid());
}

#[test]
fn broken_path_names_the_pair() {
    let verdict = check(&map(), "F5W10W3");
    assert_eq!(verdict.errors(), ["World 10 is not connected to world 3"]);
    assert_eq!(verdict.suggestions(), ["World 10 connects to: W7"]);
}

#[test]
fn path_through_a_missing_world_is_folded() {
    // World 10 links to world 99, which the snapshot does not hold.
    let state = map().with_world(WorldInfo::new(WorldId(10)).with_connections([7, 99]));
    let verdict = check(&state, "F5W10W99W7");
    assert_eq!(verdict.errors().len(), 1);
    assert!(verdict.errors()[0].starts_with("Validation failed: "));
}

#[test]
fn existing_move_warns() {
    let state = map().with_order(FleetId(5), OrderKind::Move);
    let verdict = check(&state, "F5W3");
    assert!(verdict.is_valid());
    assert!(verdict.warnings()[0].contains("already has a MOVE order"));
}

#[test]
fn transfers_do_not_conflict() {
    let state = map().with_order(FleetId(5), OrderKind::Transfer);
    assert!(!check(&state, "F5W3").has_warnings());
}

#[test]
fn empty_fleet_cannot_move() {
    let state = map().with_fleet(FleetInfo::new(FleetId(5), WorldId(7)).with_owner(ME));
    assert_eq!(check(&state, "F5W3").errors(), ["Fleet 5 has no ships"]);
}

// =============================================================================
// Transfer
// =============================================================================

#[test]
fn transfer_bounds() {
    assert!(check(&map(), "F5T8F9").is_valid());
    let verdict = check(&map(), "F5T9F9");
    assert_eq!(verdict.errors(), ["Insufficient ships: need 9, have 8"]);
    assert_eq!(verdict.suggestions(), ["Maximum transferable: 8"]);
    assert_eq!(
        check(&map(), "F5T0F9").errors(),
        ["Transfer amount must be positive"]
    );
}

#[test]
fn garrison_transfer_bounds() {
    assert!(check(&map(), "F12T1P").is_valid());
    assert_eq!(
        check(&map(), "F12T2P").errors(),
        ["Insufficient ships: need 2, have 1"]
    );
}

#[test]
fn transfer_to_defences_needs_an_owned_world() {
    assert_eq!(
        check(&map(), "F5T1I").errors(),
        ["Cannot transfer to world 7, which is not yours"]
    );
    assert!(check(&map(), "F12T1I").is_valid());
}

#[test]
fn transfer_between_fleets() {
    assert!(check(&map(), "F5T1F9").is_valid());
    assert!(check(&map(), "F5T1F6").is_valid());
    assert_eq!(
        check(&map(), "F5T1F12").errors(),
        ["Fleet 12 is not at the same world as fleet 5"]
    );
    assert!(!check(&map(), "F5T1F5").is_valid());
}

// =============================================================================
// Fire
// =============================================================================

#[test]
fn fire_at_empty_resource_warns() {
    let verdict = check(&map(), "F5AI");
    assert!(verdict.is_valid());
    assert_eq!(verdict.warnings(), ["World 7 has no industry to fire at"]);
    assert!(!check(&map(), "F5AP").has_warnings());
}

#[test]
fn fire_at_own_world_warns() {
    let verdict = check(&map(), "F12AI");
    let warnings = verdict.warnings();
    assert!(warnings.iter().any(|w| w == "Firing at your own world 3"));
}

#[test]
fn fire_needs_co_location() {
    assert!(check(&map(), "F5AF6").is_valid());
    assert!(!check(&map(), "F12AF6").is_valid());
}

#[test]
fn empty_fleet_cannot_fire() {
    let state = map().with_fleet(FleetInfo::new(FleetId(5), WorldId(7)).with_owner(ME));
    assert_eq!(check(&state, "F5AP").errors(), ["Fleet 5 has no ships"]);
    assert_eq!(check(&state, "F5AF6").errors(), ["Fleet 5 has no ships"]);
}

#[test]
fn in_transit_fleets_cannot_act_on_worlds() {
    let state = map().with_fleet(
        FleetInfo::new(FleetId(5), WorldId(7))
            .with_owner(ME)
            .with_ships(8)
            .in_transit(),
    );
    for input in ["F5A", "F5AP", "F5T1I", "F5W3"] {
        assert!(!check(&state, input).is_valid(), "{input}");
    }
}

// =============================================================================
// Build
// =============================================================================

#[test]
fn build_into_a_fleet_here() {
    assert!(check(&map(), "W3B5F12").is_valid());
    let verdict = check(&map(), "W3B5F5");
    assert_eq!(verdict.errors(), ["Fleet 5 is not at world 3"]);
    assert_eq!(verdict.suggestions(), ["Your fleets at world 3: F12"]);
}

#[test]
fn build_on_foreign_world() {
    let verdict = check(&map(), "W7B1I");
    assert!(verdict.errors()[0].contains("not yours"));
}

// =============================================================================
// Join and Turn
// =============================================================================

#[test]
fn join_text() {
    assert!(!check(&map(), "JOIN Merchant Ana").has_warnings());
    let verdict = check(&map(), "JOIN Ana");
    assert!(verdict.is_valid());
    assert!(verdict.has_warnings());
}

#[test]
fn turn_is_always_valid() {
    assert_eq!(check(&GameState::new("nobody"), "TURN"), Verdict::valid());
}
