//! Rule primitives shared by the per-command checks.
//!
//! Every function here is a pure query over a [`GameState`]. None of them
//! record anything; the validator decides what a failure means.

use std::fmt;

use fleetcmd_foundation::{
    Error, FleetId, FleetInfo, GameState, OrderKind, Result, WorldId, WorldInfo,
};
use thiserror::Error;

/// An entity that cannot be used because it is missing or belongs to someone else.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OwnershipError {
    /// No such entity in the snapshot.
    #[error("{0} does not exist")]
    Missing(Subject),
    /// The entity exists but is not the player's.
    #[error("{subject} is not yours ({})", describe_owner(.owner.as_deref()))]
    Foreign {
        /// What was looked up.
        subject: Subject,
        /// Its actual owner, if any.
        owner: Option<String>,
    },
}

fn describe_owner(owner: Option<&str>) -> String {
    match owner {
        Some(name) => format!("owned by {name}"),
        None => "unowned".to_string(),
    }
}

/// A fleet or world named in a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    /// A fleet.
    Fleet(FleetId),
    /// A world.
    World(WorldId),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fleet(id) => write!(f, "Fleet {}", id.get()),
            Self::World(id) => write!(f, "World {}", id.get()),
        }
    }
}

/// Looks up a fleet the player must own.
pub fn owned_fleet(
    state: &GameState,
    id: FleetId,
) -> std::result::Result<&FleetInfo, OwnershipError> {
    let fleet = state
        .fleet(id)
        .ok_or(OwnershipError::Missing(Subject::Fleet(id)))?;
    if state.is_mine(fleet.owner.as_deref()) {
        Ok(fleet)
    } else {
        Err(OwnershipError::Foreign {
            subject: Subject::Fleet(id),
            owner: fleet.owner.clone(),
        })
    }
}

/// Looks up a world the player must own.
pub fn owned_world(
    state: &GameState,
    id: WorldId,
) -> std::result::Result<&WorldInfo, OwnershipError> {
    let world = state
        .world(id)
        .ok_or(OwnershipError::Missing(Subject::World(id)))?;
    if state.is_mine(world.owner.as_deref()) {
        Ok(world)
    } else {
        Err(OwnershipError::Foreign {
            subject: Subject::World(id),
            owner: world.owner.clone(),
        })
    }
}

/// Returns the first Move, Fire or Ambush order already queued for `fleet`.
#[must_use]
pub fn exclusive_order(state: &GameState, fleet: FleetId) -> Option<OrderKind> {
    state
        .orders_for(fleet)
        .map(|order| order.kind)
        .find(|kind| kind.is_exclusive())
}

/// Returns true if `fleet` already holds a Move, Fire or Ambush order.
#[must_use]
pub fn has_exclusive_order(state: &GameState, fleet: FleetId) -> bool {
    exclusive_order(state, fleet).is_some()
}

/// Why an amount was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Zero was requested.
    #[error("amount must be positive")]
    Zero,
    /// More was requested than is available.
    #[error("need {need}, have {have}")]
    Insufficient {
        /// Requested amount.
        need: u32,
        /// Available amount.
        have: u32,
    },
}

/// Checks `0 < amount <= available`.
pub fn check_amount(amount: u32, available: u32) -> std::result::Result<(), AmountError> {
    if amount == 0 {
        Err(AmountError::Zero)
    } else if amount > available {
        Err(AmountError::Insufficient {
            need: amount,
            have: available,
        })
    } else {
        Ok(())
    }
}

/// Outcome of walking a move path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathCheck {
    /// Every hop follows a connection.
    Connected,
    /// `to` is not reachable from `from` in one hop.
    Broken {
        /// World the hop starts from.
        from: WorldId,
        /// World the hop was meant to reach.
        to: WorldId,
    },
}

/// Walks `path` hop by hop starting at `start`.
///
/// # Errors
///
/// Returns an error if a world on the walk is absent from the snapshot.
pub fn check_path(state: &GameState, start: WorldId, path: &[WorldId]) -> Result<PathCheck> {
    let mut here = start;
    for &next in path {
        let world = state.world(here).ok_or_else(|| Error::missing_world(here))?;
        if !world.is_connected_to(next) {
            return Ok(PathCheck::Broken {
                from: here,
                to: next,
            });
        }
        here = next;
    }
    Ok(PathCheck::Connected)
}

/// Returns true if both fleets are stationed at the same world.
#[must_use]
pub fn co_located(a: &FleetInfo, b: &FleetInfo) -> bool {
    a.world.is_some() && a.world == b.world
}
