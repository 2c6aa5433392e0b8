//! Declarative reference for the command language.
//!
//! The parser is hand-written; this table states the same grammar as data so
//! help screens can render it and tests can check the parser against it.

use std::fmt::Write as _;

use crate::ast::CommandKind;
use crate::tokenizer::TokenKind;

/// One element of a command shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    /// A single token.
    Token(TokenKind),
    /// One or more repetitions of a sequence.
    Repeat(&'static [Element]),
    /// Exactly one of several sequences.
    Choice(&'static [&'static [Element]]),
}

/// A legal command shape.
#[derive(Clone, Copy, Debug)]
pub struct Production {
    /// Command this shape produces.
    pub kind: CommandKind,
    /// Token sequence.
    pub elements: &'static [Element],
    /// A concrete example.
    pub example: &'static str,
    /// One-line explanation.
    pub summary: &'static str,
}

impl Production {
    /// Renders the shape using token kind names.
    #[must_use]
    pub fn render(&self) -> String {
        render_sequence(self.elements)
    }
}

fn render_sequence(elements: &[Element]) -> String {
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match element {
            Element::Token(kind) => out.push_str(kind.name()),
            Element::Repeat(inner) => {
                let _ = write!(out, "({})+", render_sequence(inner));
            }
            Element::Choice(options) => {
                let rendered: Vec<String> =
                    options.iter().map(|seq| render_sequence(seq)).collect();
                let _ = write!(out, "({})", rendered.join(" | "));
            }
        }
    }
    out
}

use Element::{Choice, Repeat, Token as T};
use TokenKind::{
    Attack, Build, FleetPrefix, Join, JoinArgs, Number, TargetIndustry, TargetPopulation,
    Transfer, Turn, WorldPrefix,
};

const SHIP_TARGET: Element = Choice(&[
    &[T(TargetIndustry)],
    &[T(TargetPopulation)],
    &[T(FleetPrefix), T(Number)],
]);

/// Every complete command shape.
pub const PRODUCTIONS: &[Production] = &[
    Production {
        kind: CommandKind::Move,
        elements: &[
            T(FleetPrefix),
            T(Number),
            Repeat(&[T(WorldPrefix), T(Number)]),
        ],
        example: "F5W1W3W10",
        summary: "Move a fleet along connected worlds",
    },
    Production {
        kind: CommandKind::Build,
        elements: &[T(WorldPrefix), T(Number), T(Build), T(Number), SHIP_TARGET],
        example: "W3B25I",
        summary: "Build ships at a world for its defences or a fleet",
    },
    Production {
        kind: CommandKind::Transfer,
        elements: &[T(FleetPrefix), T(Number), T(Transfer), T(Number), SHIP_TARGET],
        example: "F5T10F7",
        summary: "Transfer ships from a fleet to defences or another fleet",
    },
    Production {
        kind: CommandKind::FireAtWorld,
        elements: &[
            T(FleetPrefix),
            T(Number),
            T(Attack),
            Choice(&[&[T(TargetPopulation)], &[T(TargetIndustry)]]),
        ],
        example: "F5AP",
        summary: "Fire at a world's population or industry",
    },
    Production {
        kind: CommandKind::FireAtFleet,
        elements: &[T(FleetPrefix), T(Number), T(Attack), T(FleetPrefix), T(Number)],
        example: "F5AF9",
        summary: "Fire at another fleet at the same world",
    },
    Production {
        kind: CommandKind::Ambush,
        elements: &[T(FleetPrefix), T(Number), T(Attack)],
        example: "F5A",
        summary: "Ambush fleets arriving at the current world",
    },
    Production {
        kind: CommandKind::Join,
        elements: &[T(Join), T(JoinArgs)],
        example: "JOIN Merchant Bob",
        summary: "Join the game as a character type",
    },
    Production {
        kind: CommandKind::Turn,
        elements: &[T(Turn)],
        example: "TURN",
        summary: "Finish entering orders for this turn",
    },
];

/// Looks up the production for a command kind.
#[must_use]
pub fn production(kind: CommandKind) -> Option<&'static Production> {
    PRODUCTIONS.iter().find(|p| p.kind == kind)
}
