//! Command representations.
//!
//! A [`Command`] is either complete (it serializes to exactly one wire string
//! and can be submitted) or partial (a valid prefix produced while typing,
//! used only for live feedback).

use std::fmt;

use fleetcmd_foundation::{FleetId, WorldId};

/// Destination of built or transferred ships.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Industry defence ships (`I`).
    Industry,
    /// Population defence ships (`P`).
    Population,
    /// Another fleet (`F<n>`).
    Fleet(FleetId),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Industry => f.write_str("I"),
            Self::Population => f.write_str("P"),
            Self::Fleet(id) => write!(f, "{id}"),
        }
    }
}

/// What a fleet fires at on a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorldTarget {
    /// The world's population (`P`).
    Population,
    /// The world's industry (`I`).
    Industry,
}

impl WorldTarget {
    /// Human name of the targeted resource.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::Industry => "industry",
        }
    }
}

impl fmt::Display for WorldTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Population => f.write_str("P"),
            Self::Industry => f.write_str("I"),
        }
    }
}

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `F<fleet>W<world>[W<world>...]`
    Move {
        /// Fleet to move.
        fleet: FleetId,
        /// Worlds to visit in order; never empty.
        path: Vec<WorldId>,
    },
    /// `W<world>B<amount>{I|P|F<fleet>}`
    Build {
        /// World doing the building.
        world: WorldId,
        /// Number of ships.
        amount: u32,
        /// Where the ships go.
        target: Target,
    },
    /// `F<fleet>T<amount>{I|P|F<fleet>}`
    Transfer {
        /// Fleet giving up ships.
        fleet: FleetId,
        /// Number of ships.
        amount: u32,
        /// Where the ships go.
        target: Target,
    },
    /// `F<fleet>A{P|I}`
    FireAtWorld {
        /// Firing fleet.
        fleet: FleetId,
        /// Resource fired at.
        target: WorldTarget,
    },
    /// `F<fleet>AF<fleet>`
    FireAtFleet {
        /// Firing fleet.
        fleet: FleetId,
        /// Fleet fired at.
        target: FleetId,
    },
    /// `F<fleet>A`
    Ambush {
        /// Ambushing fleet.
        fleet: FleetId,
    },
    /// `JOIN <raw text>`
    Join {
        /// Free text after the keyword, original casing.
        args: String,
    },
    /// `TURN`
    Turn,
    /// `F<fleet>` with no action yet.
    PartialFleet {
        /// Fleet typed so far.
        fleet: FleetId,
    },
    /// `W<world>` with no action yet.
    PartialWorld {
        /// World typed so far.
        world: WorldId,
    },
    /// `F<fleet>T<amount>` with no target yet.
    PartialTransfer {
        /// Fleet giving up ships.
        fleet: FleetId,
        /// Number of ships.
        amount: u32,
    },
    /// `W<world>B<amount>` with no target yet.
    PartialBuild {
        /// World doing the building.
        world: WorldId,
        /// Number of ships.
        amount: u32,
    },
    /// `JOIN` with no argument text yet.
    PartialJoin,
}

/// The shape of a command, without its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Fleet movement.
    Move,
    /// Ship construction.
    Build,
    /// Ship transfer.
    Transfer,
    /// Firing at a world.
    FireAtWorld,
    /// Firing at a fleet.
    FireAtFleet,
    /// Ambush.
    Ambush,
    /// Joining the game.
    Join,
    /// Ending the turn.
    Turn,
    /// Fleet prefix only.
    PartialFleet,
    /// World prefix only.
    PartialWorld,
    /// Transfer without target.
    PartialTransfer,
    /// Build without target.
    PartialBuild,
    /// JOIN without text.
    PartialJoin,
}

impl Command {
    /// Returns the shape of this command.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Move { .. } => CommandKind::Move,
            Self::Build { .. } => CommandKind::Build,
            Self::Transfer { .. } => CommandKind::Transfer,
            Self::FireAtWorld { .. } => CommandKind::FireAtWorld,
            Self::FireAtFleet { .. } => CommandKind::FireAtFleet,
            Self::Ambush { .. } => CommandKind::Ambush,
            Self::Join { .. } => CommandKind::Join,
            Self::Turn => CommandKind::Turn,
            Self::PartialFleet { .. } => CommandKind::PartialFleet,
            Self::PartialWorld { .. } => CommandKind::PartialWorld,
            Self::PartialTransfer { .. } => CommandKind::PartialTransfer,
            Self::PartialBuild { .. } => CommandKind::PartialBuild,
            Self::PartialJoin => CommandKind::PartialJoin,
        }
    }

    /// Returns true if this command can be submitted.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.is_partial()
    }

    /// Returns true for the live-feedback-only variants.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        matches!(
            self,
            Self::PartialFleet { .. }
                | Self::PartialWorld { .. }
                | Self::PartialTransfer { .. }
                | Self::PartialBuild { .. }
                | Self::PartialJoin
        )
    }

    /// The fleet issuing this command, if it is a fleet command.
    #[must_use]
    pub const fn acting_fleet(&self) -> Option<FleetId> {
        match self {
            Self::Move { fleet, .. }
            | Self::Transfer { fleet, .. }
            | Self::FireAtWorld { fleet, .. }
            | Self::FireAtFleet { fleet, .. }
            | Self::Ambush { fleet }
            | Self::PartialFleet { fleet }
            | Self::PartialTransfer { fleet, .. } => Some(*fleet),
            _ => None,
        }
    }

    /// Serializes a complete command to its canonical wire string.
    ///
    /// Returns `None` for partial commands.
    #[must_use]
    pub fn to_wire(&self) -> Option<String> {
        let wire = match self {
            Self::Move { fleet, path } => {
                let mut out = fleet.to_string();
                for world in path {
                    out.push_str(&world.to_string());
                }
                out
            }
            Self::Build {
                world,
                amount,
                target,
            } => format!("{world}B{amount}{target}"),
            Self::Transfer {
                fleet,
                amount,
                target,
            } => format!("{fleet}T{amount}{target}"),
            Self::FireAtWorld { fleet, target } => format!("{fleet}A{target}"),
            Self::FireAtFleet { fleet, target } => format!("{fleet}A{target}"),
            Self::Ambush { fleet } => format!("{fleet}A"),
            Self::Join { args } => format!("JOIN {args}"),
            Self::Turn => "TURN".to_string(),
            Self::PartialFleet { .. }
            | Self::PartialWorld { .. }
            | Self::PartialTransfer { .. }
            | Self::PartialBuild { .. }
            | Self::PartialJoin => return None,
        };
        Some(wire)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move { fleet, path } => {
                write!(f, "Move {fleet}")?;
                for world in path {
                    write!(f, " -> {world}")?;
                }
                Ok(())
            }
            Self::Build {
                world,
                amount,
                target,
            } => write!(
                f,
                "Build {amount} ships at {world} for {}",
                describe(*target)
            ),
            Self::Transfer {
                fleet,
                amount,
                target,
            } => write!(
                f,
                "Transfer {amount} ships from {fleet} to {}",
                describe(*target)
            ),
            Self::FireAtWorld { fleet, target } => {
                write!(f, "{fleet} fires at world {}", target.resource())
            }
            Self::FireAtFleet { fleet, target } => write!(f, "{fleet} fires at {target}"),
            Self::Ambush { fleet } => write!(f, "{fleet} lies in ambush"),
            Self::Join { args } => write!(f, "Join game as {args}"),
            Self::Turn => f.write_str("End turn"),
            Self::PartialFleet { fleet } => write!(f, "{fleet} ..."),
            Self::PartialWorld { world } => write!(f, "{world} ..."),
            Self::PartialTransfer { fleet, amount } => {
                write!(f, "Transfer {amount} ships from {fleet} ...")
            }
            Self::PartialBuild { world, amount } => {
                write!(f, "Build {amount} ships at {world} ...")
            }
            Self::PartialJoin => f.write_str("Join game ..."),
        }
    }
}

fn describe(target: Target) -> String {
    match target {
        Target::Industry => "industry defence".to_string(),
        Target::Population => "population defence".to_string(),
        Target::Fleet(id) => id.to_string(),
    }
}
