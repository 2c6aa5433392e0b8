//! Read-only game-state snapshot.
//!
//! The snapshot is a persistent structure: every `with_*` call returns a new
//! snapshot sharing structure with the old one, so the store that owns the
//! live game can hand out cheap clones to the command pipeline on every
//! keystroke. Iteration is in ascending id order.

use im::{OrdMap, Vector};

use crate::ids::{FleetId, WorldId};

// =============================================================================
// Entities
// =============================================================================

/// A map node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldInfo {
    /// World identifier.
    pub id: WorldId,
    /// Owning player name, `None` for unowned worlds.
    pub owner: Option<String>,
    /// Industry available for building ships.
    pub industry: u32,
    /// Population living on the world.
    pub population: u32,
    /// Worlds reachable in one hop.
    pub connections: Vec<WorldId>,
}

impl WorldInfo {
    /// Creates an unowned, empty world with no connections.
    #[must_use]
    pub fn new(id: WorldId) -> Self {
        Self {
            id,
            owner: None,
            industry: 0,
            population: 0,
            connections: Vec::new(),
        }
    }

    /// Builder method to set the owner.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Builder method to set industry.
    #[must_use]
    pub const fn with_industry(mut self, industry: u32) -> Self {
        self.industry = industry;
        self
    }

    /// Builder method to set population.
    #[must_use]
    pub const fn with_population(mut self, population: u32) -> Self {
        self.population = population;
        self
    }

    /// Builder method to set the connection list.
    #[must_use]
    pub fn with_connections(mut self, connections: impl IntoIterator<Item = u32>) -> Self {
        self.connections = connections.into_iter().map(WorldId).collect();
        self
    }

    /// Returns true if `other` is reachable in one hop.
    #[must_use]
    pub fn is_connected_to(&self, other: WorldId) -> bool {
        self.connections.contains(&other)
    }
}

/// A group of ships.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetInfo {
    /// Fleet identifier.
    pub id: FleetId,
    /// Owning player name, `None` for neutral fleets.
    pub owner: Option<String>,
    /// Current world, `None` while in transit.
    pub world: Option<WorldId>,
    /// Number of ships.
    pub ships: u32,
    /// Cargo carried.
    pub cargo: u32,
}

impl FleetInfo {
    /// Creates an unowned, empty fleet stationed at `world`.
    #[must_use]
    pub fn new(id: FleetId, world: WorldId) -> Self {
        Self {
            id,
            owner: None,
            world: Some(world),
            ships: 0,
            cargo: 0,
        }
    }

    /// Builder method to set the owner.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Builder method to set the ship count.
    #[must_use]
    pub const fn with_ships(mut self, ships: u32) -> Self {
        self.ships = ships;
        self
    }

    /// Builder method to set the cargo.
    #[must_use]
    pub const fn with_cargo(mut self, cargo: u32) -> Self {
        self.cargo = cargo;
        self
    }

    /// Builder method to put the fleet in transit.
    #[must_use]
    pub const fn in_transit(mut self) -> Self {
        self.world = None;
        self
    }

    /// Returns true if the fleet is at a world.
    #[must_use]
    pub const fn is_stationed(&self) -> bool {
        self.world.is_some()
    }
}

/// Kind of an order already queued for this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderKind {
    /// Fleet movement.
    Move,
    /// Firing at a world or fleet.
    Fire,
    /// Ambush at the current world.
    Ambush,
    /// Ship construction.
    Build,
    /// Ship transfer.
    Transfer,
}

impl OrderKind {
    /// Returns true for orders a fleet may hold at most one of per turn.
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::Move | Self::Fire | Self::Ambush)
    }

    /// Returns the upper-case order name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "MOVE",
            Self::Fire => "FIRE",
            Self::Ambush => "AMBUSH",
            Self::Build => "BUILD",
            Self::Transfer => "TRANSFER",
        }
    }
}

/// An order already queued for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueuedOrder {
    /// Fleet the order belongs to.
    pub fleet: FleetId,
    /// What the order does.
    pub kind: OrderKind,
}

// =============================================================================
// Snapshot
// =============================================================================

/// A snapshot of everything the command pipeline may read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    player: String,
    joined: bool,
    worlds: OrdMap<WorldId, WorldInfo>,
    fleets: OrdMap<FleetId, FleetInfo>,
    orders: Vector<QueuedOrder>,
}

impl GameState {
    /// Creates an empty snapshot for the given player, not yet joined.
    #[must_use]
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            joined: false,
            worlds: OrdMap::new(),
            fleets: OrdMap::new(),
            orders: Vector::new(),
        }
    }

    /// Builder method to set whether the player has joined the game.
    #[must_use]
    pub fn with_joined(mut self, joined: bool) -> Self {
        self.joined = joined;
        self
    }

    /// Returns a snapshot with `world` inserted or replaced.
    #[must_use]
    pub fn with_world(mut self, world: WorldInfo) -> Self {
        self.worlds.insert(world.id, world);
        self
    }

    /// Returns a snapshot with `fleet` inserted or replaced.
    #[must_use]
    pub fn with_fleet(mut self, fleet: FleetInfo) -> Self {
        self.fleets.insert(fleet.id, fleet);
        self
    }

    /// Returns a snapshot with `order` appended to the queue.
    #[must_use]
    pub fn with_order(mut self, fleet: FleetId, kind: OrderKind) -> Self {
        self.orders.push_back(QueuedOrder { fleet, kind });
        self
    }

    /// Returns the current player's name.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Returns true once the player has joined the game.
    #[must_use]
    pub const fn is_joined(&self) -> bool {
        self.joined
    }

    /// Returns true if `owner` is the current player.
    #[must_use]
    pub fn is_mine(&self, owner: Option<&str>) -> bool {
        owner == Some(self.player.as_str())
    }

    /// Looks up a world.
    #[must_use]
    pub fn world(&self, id: WorldId) -> Option<&WorldInfo> {
        self.worlds.get(&id)
    }

    /// Looks up a fleet.
    #[must_use]
    pub fn fleet(&self, id: FleetId) -> Option<&FleetInfo> {
        self.fleets.get(&id)
    }

    /// Iterates all worlds.
    pub fn worlds(&self) -> impl Iterator<Item = &WorldInfo> {
        self.worlds.values()
    }

    /// Iterates all fleets.
    pub fn fleets(&self) -> impl Iterator<Item = &FleetInfo> {
        self.fleets.values()
    }

    /// Iterates the order queue.
    pub fn orders(&self) -> impl Iterator<Item = &QueuedOrder> {
        self.orders.iter()
    }

    /// Iterates the queued orders for one fleet.
    pub fn orders_for(&self, fleet: FleetId) -> impl Iterator<Item = &QueuedOrder> {
        self.orders.iter().filter(move |o| o.fleet == fleet)
    }

    /// Iterates the current player's fleets.
    pub fn owned_fleets(&self) -> impl Iterator<Item = &FleetInfo> {
        self.fleets().filter(|f| self.is_mine(f.owner.as_deref()))
    }

    /// Iterates the current player's worlds.
    pub fn owned_worlds(&self) -> impl Iterator<Item = &WorldInfo> {
        self.worlds().filter(|w| self.is_mine(w.owner.as_deref()))
    }

    /// Iterates the fleets stationed at `world`.
    pub fn fleets_at(&self, world: WorldId) -> impl Iterator<Item = &FleetInfo> {
        self.fleets().filter(move |f| f.world == Some(world))
    }

    /// A small map for trying out the console.
    #[must_use]
    pub fn demo() -> Self {
        let me = "Commander";
        let rival = "Vex";
        Self::new(me)
            .with_world(
                WorldInfo::new(WorldId(1))
                    .with_owner(me)
                    .with_industry(12)
                    .with_population(40)
                    .with_connections([2, 3]),
            )
            .with_world(
                WorldInfo::new(WorldId(2))
                    .with_industry(4)
                    .with_population(10)
                    .with_connections([1, 4]),
            )
            .with_world(
                WorldInfo::new(WorldId(3))
                    .with_owner(me)
                    .with_industry(6)
                    .with_population(22)
                    .with_connections([1, 4, 5]),
            )
            .with_world(
                WorldInfo::new(WorldId(4))
                    .with_owner(rival)
                    .with_industry(9)
                    .with_population(30)
                    .with_connections([2, 3]),
            )
            .with_world(WorldInfo::new(WorldId(5)).with_connections([3]))
            .with_fleet(
                FleetInfo::new(FleetId(1), WorldId(1))
                    .with_owner(me)
                    .with_ships(14),
            )
            .with_fleet(
                FleetInfo::new(FleetId(2), WorldId(1))
                    .with_owner(me)
                    .with_ships(3),
            )
            .with_fleet(
                FleetInfo::new(FleetId(3), WorldId(3))
                    .with_owner(me)
                    .with_ships(0),
            )
            .with_fleet(
                FleetInfo::new(FleetId(4), WorldId(4))
                    .with_owner(me)
                    .with_ships(6)
                    .in_transit(),
            )
            .with_fleet(
                FleetInfo::new(FleetId(9), WorldId(3))
                    .with_owner(rival)
                    .with_ships(8),
            )
    }
}
