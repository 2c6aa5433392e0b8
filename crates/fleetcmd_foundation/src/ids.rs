//! Typed identifiers for fleets and worlds.
//!
//! Both identifiers are plain numbers on the wire (`F5`, `W10`); the newtypes
//! keep a fleet number from ever being used where a world number is expected.

use std::fmt;

/// Identifier of a fleet, written `F<n>` in commands.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FleetId(pub u32);

/// Identifier of a world, written `W<n>` in commands.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorldId(pub u32);

impl FleetId {
    /// Creates a fleet identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw fleet number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl WorldId {
    /// Creates a world identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw world number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

impl From<u32> for FleetId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<u32> for WorldId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
