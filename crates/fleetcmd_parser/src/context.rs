//! Input-stage detection.
//!
//! Works out which argument the player is currently typing from token
//! positions alone. It never looks at token values, never validates, and
//! never fails, so it still has an answer when the parse itself errors out.

use std::fmt;

use crate::tokenizer::{Token, TokenKind};

/// Argument position within a fleet command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FleetStage {
    /// Typing the fleet number.
    FleetId,
    /// Fleet chosen, no recognised action yet.
    Action,
    /// Adding worlds to a move path.
    MovePath,
    /// Typing the number of ships to transfer.
    TransferAmount,
    /// Choosing where transferred ships go.
    TransferTarget,
    /// Just typed `A`; ambush or a fire target may follow.
    AttackType,
    /// Typing the fire target.
    AttackTarget,
}

impl FleetStage {
    /// Snake-case stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FleetId => "fleet_id",
            Self::Action => "action",
            Self::MovePath => "move_path",
            Self::TransferAmount => "transfer_amount",
            Self::TransferTarget => "transfer_target",
            Self::AttackType => "attack_type",
            Self::AttackTarget => "attack_target",
        }
    }
}

/// Argument position within a world command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorldStage {
    /// Typing the world number.
    WorldId,
    /// World chosen, no recognised action yet.
    Action,
    /// Typing the number of ships to build.
    BuildAmount,
    /// Choosing where built ships go.
    BuildTarget,
}

impl WorldStage {
    /// Snake-case stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WorldId => "world_id",
            Self::Action => "action",
            Self::BuildAmount => "build_amount",
            Self::BuildTarget => "build_target",
        }
    }
}

/// What kind of command is being typed, and where in it the player is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseContext {
    /// Nothing typed.
    Empty,
    /// A fleet command.
    Fleet(FleetStage),
    /// A world command.
    World(WorldStage),
    /// `JOIN` and its free text.
    Join,
    /// `TURN`.
    Turn,
    /// Input that starts with no recognised command token.
    Unknown,
}

impl ParseContext {
    /// Name of the context kind.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Fleet(_) => "fleet",
            Self::World(_) => "world",
            Self::Join => "join",
            Self::Turn => "turn",
            Self::Unknown => "unknown",
        }
    }

    /// Name of the stage, if the kind has stages.
    #[must_use]
    pub const fn stage(self) -> Option<&'static str> {
        match self {
            Self::Fleet(stage) => Some(stage.as_str()),
            Self::World(stage) => Some(stage.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage() {
            Some(stage) => write!(f, "{}/{stage}", self.kind()),
            None => f.write_str(self.kind()),
        }
    }
}

/// Detects the input stage from token positions.
///
/// The end-of-input marker does not count as a token here.
#[must_use]
pub fn detect_context(tokens: &[Token]) -> ParseContext {
    let real: Vec<TokenKind> = tokens
        .iter()
        .filter(|t| !t.is_eof())
        .map(|t| t.kind)
        .collect();
    let count = real.len();

    let Some(&first) = real.first() else {
        return ParseContext::Empty;
    };
    let third = real.get(2).copied();

    match first {
        TokenKind::FleetPrefix => ParseContext::Fleet(fleet_stage(count, third)),
        TokenKind::WorldPrefix => ParseContext::World(world_stage(count, third)),
        TokenKind::Join => ParseContext::Join,
        TokenKind::Turn => ParseContext::Turn,
        _ => ParseContext::Unknown,
    }
}

fn fleet_stage(count: usize, third: Option<TokenKind>) -> FleetStage {
    if count <= 2 {
        return FleetStage::FleetId;
    }
    match third {
        Some(TokenKind::WorldPrefix) => FleetStage::MovePath,
        Some(TokenKind::Transfer) if count <= 4 => FleetStage::TransferAmount,
        Some(TokenKind::Transfer) => FleetStage::TransferTarget,
        Some(TokenKind::Attack) if count <= 3 => FleetStage::AttackType,
        Some(TokenKind::Attack) => FleetStage::AttackTarget,
        _ => FleetStage::Action,
    }
}

fn world_stage(count: usize, third: Option<TokenKind>) -> WorldStage {
    if count <= 2 {
        return WorldStage::WorldId;
    }
    match third {
        Some(TokenKind::Build) if count <= 4 => WorldStage::BuildAmount,
        Some(TokenKind::Build) => WorldStage::BuildTarget,
        _ => WorldStage::Action,
    }
}
