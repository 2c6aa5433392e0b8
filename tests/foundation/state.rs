//! Integration tests for the game-state snapshot.

use fleetcmd_foundation::{
    FleetId, FleetInfo, GameState, OrderKind, WorldId, WorldInfo, find_character_type,
};

fn small() -> GameState {
    GameState::new("ana")
        .with_world(
            WorldInfo::new(WorldId(1))
                .with_owner("ana")
                .with_connections([2]),
        )
        .with_world(WorldInfo::new(WorldId(2)).with_connections([1]))
        .with_fleet(FleetInfo::new(FleetId(3), WorldId(1)).with_owner("ana"))
        .with_fleet(FleetInfo::new(FleetId(4), WorldId(1)).with_owner("bo"))
        .with_fleet(
            FleetInfo::new(FleetId(1), WorldId(2))
                .with_owner("ana")
                .in_transit(),
        )
}

// =============================================================================
// Ownership
// =============================================================================

#[test]
fn owned_fleets_in_id_order() {
    let ids: Vec<FleetId> = small().owned_fleets().map(|f| f.id).collect();
    assert_eq!(ids, vec![FleetId(1), FleetId(3)]);
}

#[test]
fn owned_worlds() {
    let ids: Vec<WorldId> = small().owned_worlds().map(|w| w.id).collect();
    assert_eq!(ids, vec![WorldId(1)]);
}

#[test]
fn unowned_is_never_mine() {
    assert!(!small().is_mine(None));
}

// =============================================================================
// Position
// =============================================================================

#[test]
fn transit_fleets_are_nowhere() {
    let state = small();
    let moving = state.fleet(FleetId(1)).expect("fleet 1 exists");
    assert!(!moving.is_stationed());
    let at_one: Vec<FleetId> = state.fleets_at(WorldId(1)).map(|f| f.id).collect();
    assert_eq!(at_one, vec![FleetId(3), FleetId(4)]);
}

// =============================================================================
// Snapshots are values
// =============================================================================

#[test]
fn builders_do_not_touch_the_original() {
    let before = small();
    let after = before.clone().with_order(FleetId(3), OrderKind::Move);
    assert_eq!(before.orders().count(), 0);
    assert_eq!(after.orders_for(FleetId(3)).count(), 1);
    assert!(after.orders().all(|o| o.kind.is_exclusive()));
}

#[test]
fn demo_map_is_consistent() {
    let state = GameState::demo();
    for fleet in state.fleets() {
        if let Some(world) = fleet.world {
            let id = fleet.id;
            assert!(state.world(world).is_some(), "{id} at missing {world}");
        }
    }
    for world in state.worlds() {
        for link in &world.connections {
            let other = state.world(*link).expect("linked world exists");
            let id = world.id;
            assert!(other.is_connected_to(id), "{id} -> {link} is one-way");
        }
    }
}

#[test]
fn character_lookup() {
    assert_eq!(
        find_character_type("JOIN as an empire builder"),
        Some("Empire Builder")
    );
    assert_eq!(find_character_type("Bob"), None);
}
