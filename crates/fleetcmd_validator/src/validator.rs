//! Per-command validation.
//!
//! [`Validator::validate`] matches exhaustively on [`Command`] and hands each
//! complete variant to one check. Checks add errors, warnings and suggestions
//! to a [`Verdict`]; an `Err` from a check means the snapshot itself is
//! inconsistent and becomes the verdict's only error.

use fleetcmd_foundation::{
    CHARACTER_TYPES, Error, FleetId, FleetInfo, GameState, Result, WorldId, find_character_type,
};
use fleetcmd_parser::grammar::production;
use fleetcmd_parser::{Command, CommandKind, Target, WorldTarget};
use tracing::debug;

use crate::rules::{
    AmountError, OwnershipError, PathCheck, Subject, check_amount, check_path, co_located,
    exclusive_order, owned_fleet, owned_world,
};
use crate::verdict::Verdict;

/// How much of a command must be present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Live feedback while typing: partial commands are fine.
    #[default]
    Partial,
    /// Submission: the command must be complete.
    Complete,
}

/// Checks commands against a game-state snapshot.
#[derive(Clone, Copy, Debug)]
pub struct Validator<'s> {
    state: &'s GameState,
}

impl<'s> Validator<'s> {
    /// Creates a validator over `state`.
    #[must_use]
    pub const fn new(state: &'s GameState) -> Self {
        Self { state }
    }

    /// Validates a parsed command.
    ///
    /// `None` (nothing parsed) is always invalid. Validation never mutates
    /// the snapshot, so the same inputs always give the same verdict.
    #[must_use]
    pub fn validate(&self, command: Option<&Command>, mode: ValidationMode) -> Verdict {
        let Some(command) = command else {
            return Verdict::invalid("No valid command entered");
        };

        let mut verdict = Verdict::valid();
        let checked = match command {
            Command::Move { fleet, path } => self.check_move(*fleet, path, &mut verdict),
            Command::Build {
                world,
                amount,
                target,
            } => self.check_build(*world, *amount, *target, &mut verdict),
            Command::Transfer {
                fleet,
                amount,
                target,
            } => self.check_transfer(*fleet, *amount, *target, &mut verdict),
            Command::FireAtWorld { fleet, target } => {
                self.check_fire_at_world(*fleet, *target, &mut verdict)
            }
            Command::FireAtFleet { fleet, target } => {
                self.check_fire_at_fleet(*fleet, *target, &mut verdict)
            }
            Command::Ambush { fleet } => self.check_ambush(*fleet, &mut verdict),
            Command::Join { args } => {
                check_join(args, &mut verdict);
                Ok(())
            }
            Command::Turn => Ok(()),
            Command::PartialJoin if mode == ValidationMode::Complete => {
                check_join("", &mut verdict);
                Ok(())
            }
            Command::PartialFleet { .. }
            | Command::PartialWorld { .. }
            | Command::PartialTransfer { .. }
            | Command::PartialBuild { .. }
            | Command::PartialJoin => {
                if mode == ValidationMode::Complete {
                    verdict.error(format!("Incomplete command: {command}"));
                    if let Some(shape) = completed_kind(command.kind()).and_then(production) {
                        verdict.suggest(format!("For example: {}", shape.example));
                    }
                }
                Ok(())
            }
        };

        if let Err(err) = checked {
            verdict = Verdict::invalid(format!("Validation failed: {err}"));
        }

        debug!(
            %command,
            ?mode,
            valid = verdict.is_valid(),
            errors = verdict.errors().len(),
            warnings = verdict.warnings().len(),
            "validated"
        );
        verdict
    }

    // =========================================================================
    // Fleet commands
    // =========================================================================

    fn check_move(&self, fleet: FleetId, path: &[WorldId], verdict: &mut Verdict) -> Result<()> {
        let Some(info) = self.acting_fleet(fleet, verdict) else {
            return Ok(());
        };

        require_ships(info, verdict);
        self.warn_exclusive(fleet, verdict);

        let Some(start) = info.world else {
            verdict.error(format!(
                "Fleet {} is in transit and cannot move",
                fleet.get()
            ));
            return Ok(());
        };

        if let PathCheck::Broken { from, to } = check_path(self.state, start, path)? {
            verdict.error(format!(
                "World {} is not connected to world {}",
                from.get(),
                to.get()
            ));
            let world = self
                .state
                .world(from)
                .ok_or_else(|| Error::missing_world(from))?;
            verdict.suggest(connections_hint(from, &world.connections));
        }
        Ok(())
    }

    fn check_transfer(
        &self,
        fleet: FleetId,
        amount: u32,
        target: Target,
        verdict: &mut Verdict,
    ) -> Result<()> {
        let Some(info) = self.acting_fleet(fleet, verdict) else {
            return Ok(());
        };

        match check_amount(amount, info.ships) {
            Ok(()) => {}
            Err(AmountError::Zero) => verdict.error("Transfer amount must be positive"),
            Err(AmountError::Insufficient { need, have }) => {
                verdict.error(format!("Insufficient ships: need {need}, have {have}"));
                verdict.suggest(format!("Maximum transferable: {have}"));
            }
        }

        match target {
            Target::Industry | Target::Population => {
                let Some(here) = info.world else {
                    verdict.error(format!(
                        "Fleet {} is in transit and cannot transfer to a world",
                        fleet.get()
                    ));
                    return Ok(());
                };
                let world = self
                    .state
                    .world(here)
                    .ok_or_else(|| Error::dangling_world(fleet, here))?;
                if !self.state.is_mine(world.owner.as_deref()) {
                    verdict.error(format!(
                        "Cannot transfer to world {}, which is not yours",
                        here.get()
                    ));
                }
            }
            Target::Fleet(other) if other == fleet => {
                verdict.error(format!("Fleet {} cannot transfer to itself", fleet.get()));
            }
            Target::Fleet(other) => {
                if let Some(receiver) = self.target_fleet(other, verdict) {
                    require_co_located(info, receiver, verdict);
                }
            }
        }
        Ok(())
    }

    fn check_fire_at_world(
        &self,
        fleet: FleetId,
        target: WorldTarget,
        verdict: &mut Verdict,
    ) -> Result<()> {
        let Some(info) = self.acting_fleet(fleet, verdict) else {
            return Ok(());
        };
        require_ships(info, verdict);
        self.warn_exclusive(fleet, verdict);

        let Some(here) = info.world else {
            verdict.error(format!(
                "Fleet {} is in transit and cannot fire at a world",
                fleet.get()
            ));
            return Ok(());
        };
        let world = self
            .state
            .world(here)
            .ok_or_else(|| Error::dangling_world(fleet, here))?;

        let available = match target {
            WorldTarget::Population => world.population,
            WorldTarget::Industry => world.industry,
        };
        if available == 0 {
            verdict.warn(format!(
                "World {} has no {} to fire at",
                here.get(),
                target.resource()
            ));
        }
        if self.state.is_mine(world.owner.as_deref()) {
            verdict.warn(format!("Firing at your own world {}", here.get()));
        }
        Ok(())
    }

    fn check_fire_at_fleet(
        &self,
        fleet: FleetId,
        target: FleetId,
        verdict: &mut Verdict,
    ) -> Result<()> {
        let Some(info) = self.acting_fleet(fleet, verdict) else {
            return Ok(());
        };
        require_ships(info, verdict);
        self.warn_exclusive(fleet, verdict);

        if target == fleet {
            verdict.error(format!("Fleet {} cannot fire at itself", fleet.get()));
            return Ok(());
        }
        let Some(victim) = self.target_fleet(target, verdict) else {
            return Ok(());
        };
        require_co_located(info, victim, verdict);
        if self.state.is_mine(victim.owner.as_deref()) {
            verdict.warn(format!("Attacking your own fleet {}", target.get()));
        }
        Ok(())
    }

    fn check_ambush(&self, fleet: FleetId, verdict: &mut Verdict) -> Result<()> {
        let Some(info) = self.acting_fleet(fleet, verdict) else {
            return Ok(());
        };
        self.warn_exclusive(fleet, verdict);

        if !info.is_stationed() {
            verdict.error(format!(
                "Fleet {} is in transit and cannot ambush",
                fleet.get()
            ));
        }
        Ok(())
    }

    // =========================================================================
    // World commands
    // =========================================================================

    fn check_build(
        &self,
        world: WorldId,
        amount: u32,
        target: Target,
        verdict: &mut Verdict,
    ) -> Result<()> {
        let info = match owned_world(self.state, world) {
            Ok(info) => info,
            Err(err) => {
                verdict.error(err.to_string());
                verdict.suggest(self.worlds_hint());
                return Ok(());
            }
        };

        match check_amount(amount, info.industry) {
            Ok(()) => {}
            Err(AmountError::Zero) => verdict.error("Build amount must be positive"),
            Err(AmountError::Insufficient { need, have }) => {
                verdict.error(format!("Insufficient industry: need {need}, have {have}"));
                verdict.suggest(format!("Maximum buildable: {have}"));
            }
        }

        if let Target::Fleet(receiver) = target {
            match owned_fleet(self.state, receiver) {
                Err(err) => verdict.error(err.to_string()),
                Ok(fleet) if fleet.world != Some(world) => {
                    verdict.error(format!(
                        "Fleet {} is not at world {}",
                        receiver.get(),
                        world.get()
                    ));
                    let here: Vec<FleetId> = self
                        .state
                        .fleets_at(world)
                        .filter(|f| self.state.is_mine(f.owner.as_deref()))
                        .map(|f| f.id)
                        .collect();
                    if !here.is_empty() {
                        verdict.suggest(format!(
                            "Your fleets at world {}: {}",
                            world.get(),
                            join_ids(&here)
                        ));
                    }
                }
                Ok(_) => {}
            }
        }
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Resolves the fleet issuing a command, recording why it cannot act.
    fn acting_fleet(&self, fleet: FleetId, verdict: &mut Verdict) -> Option<&'s FleetInfo> {
        match owned_fleet(self.state, fleet) {
            Ok(info) => Some(info),
            Err(err) => {
                verdict.error(err.to_string());
                verdict.suggest(self.fleets_hint());
                None
            }
        }
    }

    /// Resolves a fleet on the receiving end of a command. Any owner will do.
    fn target_fleet(&self, fleet: FleetId, verdict: &mut Verdict) -> Option<&'s FleetInfo> {
        let found = self.state.fleet(fleet);
        if found.is_none() {
            verdict.error(OwnershipError::Missing(Subject::Fleet(fleet)).to_string());
        }
        found
    }

    fn warn_exclusive(&self, fleet: FleetId, verdict: &mut Verdict) {
        if let Some(kind) = exclusive_order(self.state, fleet) {
            verdict.warn(format!(
                "Fleet {} already has a {} order this turn; it will be replaced",
                fleet.get(),
                kind.as_str()
            ));
        }
    }

    fn fleets_hint(&self) -> String {
        let ids: Vec<FleetId> = self.state.owned_fleets().map(|f| f.id).collect();
        if ids.is_empty() {
            "You have no fleets".to_string()
        } else {
            format!("Your fleets: {}", join_ids(&ids))
        }
    }

    fn worlds_hint(&self) -> String {
        let ids: Vec<WorldId> = self.state.owned_worlds().map(|w| w.id).collect();
        if ids.is_empty() {
            "You have no worlds".to_string()
        } else {
            format!("Your worlds: {}", join_ids(&ids))
        }
    }
}

/// The complete command a partial one can only grow into.
const fn completed_kind(kind: CommandKind) -> Option<CommandKind> {
    match kind {
        CommandKind::PartialWorld | CommandKind::PartialBuild => Some(CommandKind::Build),
        CommandKind::PartialTransfer => Some(CommandKind::Transfer),
        CommandKind::PartialJoin => Some(CommandKind::Join),
        _ => None,
    }
}

fn check_join(args: &str, verdict: &mut Verdict) {
    let args = args.trim();
    if args.is_empty() {
        verdict.error("JOIN needs a character type");
        verdict.suggest(format!("Character types: {}", CHARACTER_TYPES.join(", ")));
    } else if find_character_type(args).is_none() {
        verdict.warn(format!(
            "No known character type in \"{args}\" (expected one of: {})",
            CHARACTER_TYPES.join(", ")
        ));
    }
}

fn require_ships(fleet: &FleetInfo, verdict: &mut Verdict) {
    if fleet.ships == 0 {
        verdict.error(format!("Fleet {} has no ships", fleet.id.get()));
    }
}

fn require_co_located(actor: &FleetInfo, other: &FleetInfo, verdict: &mut Verdict) {
    if !co_located(actor, other) {
        verdict.error(format!(
            "Fleet {} is not at the same world as fleet {}",
            other.id.get(),
            actor.id.get()
        ));
    }
}

fn connections_hint(from: WorldId, connections: &[WorldId]) -> String {
    if connections.is_empty() {
        format!("World {} has no connections", from.get())
    } else {
        format!(
            "World {} connects to: {}",
            from.get(),
            join_ids(connections)
        )
    }
}

fn join_ids<T: ToString>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
