//! The suggestion engine.
//!
//! Structured completions follow the parse context stage by stage. Free
//! text (unknown input and JOIN arguments) is ranked with
//! [`fuzzy`](fleetcmd_parser::fuzzy) instead.

use std::collections::HashSet;

use fleetcmd_foundation::{CHARACTER_TYPES, FleetId, FleetInfo, GameState, WorldId, WorldInfo};
use fleetcmd_parser::{
    FleetStage, ParseContext, ParseOutcome, Token, TokenKind, WorldStage, fuzzy, parse_final,
    parse_progressive,
};
use fleetcmd_validator::Verdict;
use tracing::trace;

use crate::suggestion::{Suggestion, SuggestionKind};

/// Default number of suggestions returned.
pub const DEFAULT_LIMIT: usize = 10;

const JOIN_PRIORITY: i32 = 100;
const FLEET_PRIORITY: i32 = 10;
const WORLD_PRIORITY: i32 = 8;
const TURN_PRIORITY: i32 = 5;

/// Produces completions from a game-state snapshot.
#[derive(Clone, Copy, Debug)]
pub struct Autocomplete<'s> {
    state: &'s GameState,
    limit: usize,
}

impl<'s> Autocomplete<'s> {
    /// Creates an engine over `state` returning at most [`DEFAULT_LIMIT`] suggestions.
    #[must_use]
    pub const fn new(state: &'s GameState) -> Self {
        Self {
            state,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Builder method to change the number of suggestions returned.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Suggests whole-line completions for `input`.
    ///
    /// A complete, valid command is offered for submission first. The rest
    /// depends on `context`.
    #[must_use]
    pub fn suggest(
        &self,
        input: &str,
        context: &ParseContext,
        verdict: &Verdict,
    ) -> Vec<Suggestion> {
        let outcome = parse_progressive(input);
        let typed = Typed::new(&outcome.tokens);

        let mut suggestions: Vec<Suggestion> = submit_suggestion(&outcome, verdict)
            .into_iter()
            .collect();

        let staged = match *context {
            ParseContext::Empty => self.top_level(),
            ParseContext::Fleet(stage) => self.fleet_stage(stage, &typed),
            ParseContext::World(stage) => self.world_stage(stage, &typed),
            ParseContext::Join => join_suggestions(&typed),
            ParseContext::Turn => vec![turn_keyword()],
            ParseContext::Unknown => self.unknown(input),
        };
        suggestions.extend(staged);

        let mut seen = HashSet::new();
        suggestions.retain(|s| seen.insert(s.text.clone()));
        suggestions.truncate(self.limit);
        for suggestion in &mut suggestions {
            suggestion.complete = submittable(&suggestion.text);
        }

        trace!(input, %context, count = suggestions.len(), "suggested");
        suggestions
    }

    /// Suggestions for empty input, highest priority first.
    #[must_use]
    pub fn top_level(&self) -> Vec<Suggestion> {
        let mut all = self.top_level_candidates();
        all.sort_by(|a, b| b.priority.cmp(&a.priority));
        all.truncate(self.limit);
        all
    }

    fn top_level_candidates(&self) -> Vec<Suggestion> {
        let mut all = Vec::new();
        if !self.state.is_joined() {
            all.push(join_keyword().with_priority(JOIN_PRIORITY));
        }
        for fleet in self.state.owned_fleets() {
            all.push(fleet_suggestion(fleet).with_priority(FLEET_PRIORITY));
        }
        for world in self.state.owned_worlds() {
            all.push(self.world_suggestion(world).with_priority(WORLD_PRIORITY));
        }
        all.push(turn_keyword().with_priority(TURN_PRIORITY));
        all
    }

    /// Fuzzy-filters the top-level set and keywords against free text.
    fn unknown(&self, input: &str) -> Vec<Suggestion> {
        let mut candidates = self.top_level_candidates();
        candidates.push(join_keyword());
        candidates.push(turn_keyword());

        fuzzy::rank(input.trim(), &candidates, |s| s.text.trim())
            .into_iter()
            .map(|(_, s)| s.clone())
            .collect()
    }

    // =========================================================================
    // Fleet stages
    // =========================================================================

    fn fleet_stage(&self, stage: FleetStage, typed: &Typed<'_>) -> Vec<Suggestion> {
        if stage == FleetStage::FleetId {
            return self.fleet_ids(typed);
        }
        let Some(fleet) = typed.number(1).map(FleetId) else {
            return Vec::new();
        };

        let found = match stage {
            FleetStage::FleetId => Vec::new(),
            FleetStage::Action => return self.fleet_actions(fleet, typed),
            FleetStage::MovePath => self.move_path(fleet, typed),
            FleetStage::TransferAmount if typed.len() < 4 => self
                .state
                .fleet(fleet)
                .map(|info| amounts(&typed.normalized(), info.ships, "ships"))
                .unwrap_or_default(),
            FleetStage::TransferAmount => {
                let mut found = self.transfer_targets(fleet, &typed.normalized());
                if let Some(info) = self.state.fleet(fleet) {
                    found.extend(longer_amounts(typed, info.ships));
                }
                found
            }
            FleetStage::TransferTarget => self.transfer_targets(fleet, &typed.prefix(4)),
            FleetStage::AttackType | FleetStage::AttackTarget => {
                self.attack_targets(fleet, &typed.prefix(3))
            }
        };
        typed.keep_extending(found)
    }

    fn fleet_ids(&self, typed: &Typed<'_>) -> Vec<Suggestion> {
        let mut found: Vec<Suggestion> = self.state.owned_fleets().map(fleet_suggestion).collect();
        if let Some(fleet) = typed.number(1).map(FleetId) {
            let owner = self.state.fleet(fleet).and_then(|f| f.owner.as_deref());
            if self.state.is_mine(owner) {
                found.extend(action_letters(&fleet.to_string()));
            }
        }
        typed.keep_extending(found)
    }

    fn fleet_actions(&self, fleet: FleetId, typed: &Typed<'_>) -> Vec<Suggestion> {
        let base = typed.prefix(2);
        // `W` with no digit yet tokenizes as unknown; offer first hops.
        if typed.len() == 3 && typed.ends_with_bare_world() {
            if let Some(from) = self.state.fleet(fleet).and_then(|f| f.world) {
                return self.hops(&base, from);
            }
        }
        action_letters(&base)
    }

    fn move_path(&self, fleet: FleetId, typed: &Typed<'_>) -> Vec<Suggestion> {
        let Some(info) = self.state.fleet(fleet) else {
            return Vec::new();
        };
        let hops = typed.hops();
        let whole_hops = 2 + 2 * hops.len();
        if typed.len() == whole_hops + 1 && typed.ends_with_bare_world() {
            return hops
                .last()
                .copied()
                .or(info.world)
                .map(|from| self.hops(&typed.prefix(whole_hops), from))
                .unwrap_or_default();
        }
        if typed.len() != whole_hops {
            return Vec::new();
        }
        let normalized = typed.normalized();

        let mut found = Vec::new();
        if let Some(from) = hops.last().copied().or(info.world) {
            found.extend(self.hops(&normalized, from));
        }
        // The last hop may be a prefix of a longer world id.
        if let Some((_, before)) = hops.split_last() {
            if let Some(prev) = before.last().copied().or(info.world) {
                let base = typed.prefix(typed.len() - 2);
                found.extend(longer_than(self.hops(&base, prev), &normalized));
            }
        }

        if !hops.is_empty() {
            if let (Some(first), Some(start)) = (found.first_mut(), info.world) {
                let path: Vec<String> = std::iter::once(start)
                    .chain(hops)
                    .map(|w| w.to_string())
                    .collect();
                first.description = format!("Path: {}", path.join(" -> "));
            }
        }
        found
    }

    /// One suggestion per world connected to `from`, appended to `base`.
    fn hops(&self, base: &str, from: WorldId) -> Vec<Suggestion> {
        let Some(world) = self.state.world(from) else {
            return Vec::new();
        };
        world
            .connections
            .iter()
            .map(|&next| {
                let description = match self.state.world(next) {
                    Some(w) => self.world_description(w),
                    None => "Unexplored world".to_string(),
                };
                Suggestion::new(format!("{base}{next}"), description, SuggestionKind::World)
            })
            .collect()
    }

    fn transfer_targets(&self, fleet: FleetId, base: &str) -> Vec<Suggestion> {
        let Some(info) = self.state.fleet(fleet) else {
            return Vec::new();
        };
        let Some(here) = info.world else {
            return Vec::new();
        };
        let mut found = vec![
            target(format!("{base}I"), format!("Industry garrison at {here}")),
            target(format!("{base}P"), format!("Population garrison at {here}")),
        ];
        found.extend(
            self.co_located(info)
                .filter(|f| self.state.is_mine(f.owner.as_deref()))
                .map(|f| {
                    let description = format!("Your {}", fleet_description(f));
                    target(format!("{base}{}", f.id), description)
                }),
        );
        found
    }

    fn attack_targets(&self, fleet: FleetId, base: &str) -> Vec<Suggestion> {
        let mut found = vec![
            target(base.to_string(), "Ambush fleets arriving here"),
            target(format!("{base}P"), "Fire at the world's population"),
            target(format!("{base}I"), "Fire at the world's industry"),
        ];
        if let Some(info) = self.state.fleet(fleet) {
            found.extend(
                self.co_located(info)
                    .filter(|f| !self.state.is_mine(f.owner.as_deref()))
                    .map(|f| {
                        let owner = f.owner.as_deref().unwrap_or("neutral");
                        let description = format!("Fire at {} ({owner}, {} ships)", f.id, f.ships);
                        target(format!("{base}{}", f.id), description).dangerous()
                    }),
            );
        }
        found
    }

    /// Other fleets at the same world as `fleet`.
    fn co_located<'a>(&'a self, fleet: &'a FleetInfo) -> impl Iterator<Item = &'s FleetInfo> + 'a {
        fleet
            .world
            .into_iter()
            .flat_map(move |here| self.state.fleets_at(here))
            .filter(move |f| f.id != fleet.id)
    }

    // =========================================================================
    // World stages
    // =========================================================================

    fn world_stage(&self, stage: WorldStage, typed: &Typed<'_>) -> Vec<Suggestion> {
        if stage == WorldStage::WorldId {
            let mut found: Vec<Suggestion> = self
                .state
                .owned_worlds()
                .map(|w| self.world_suggestion(w))
                .collect();
            if let Some(world) = typed.number(1).map(WorldId) {
                let owner = self.state.world(world).and_then(|w| w.owner.as_deref());
                if self.state.is_mine(owner) {
                    found.push(build_action(&world.to_string()));
                }
            }
            return typed.keep_extending(found);
        }
        let Some(world) = typed.number(1).map(WorldId) else {
            return Vec::new();
        };

        let found = match stage {
            WorldStage::WorldId => Vec::new(),
            WorldStage::Action => vec![build_action(&typed.prefix(2))],
            WorldStage::BuildAmount if typed.len() < 4 => self
                .state
                .world(world)
                .map(|info| amounts(&typed.normalized(), info.industry, "ships"))
                .unwrap_or_default(),
            WorldStage::BuildAmount => {
                let mut found = self.build_targets(world, &typed.normalized());
                if let Some(info) = self.state.world(world) {
                    found.extend(longer_amounts(typed, info.industry));
                }
                found
            }
            WorldStage::BuildTarget => self.build_targets(world, &typed.prefix(4)),
        };
        typed.keep_extending(found)
    }

    fn build_targets(&self, world: WorldId, base: &str) -> Vec<Suggestion> {
        let mut found = vec![
            target(format!("{base}I"), format!("Industry defences at {world}")),
            target(
                format!("{base}P"),
                format!("Population defences at {world}"),
            ),
        ];
        found.extend(
            self.state
                .fleets_at(world)
                .filter(|f| self.state.is_mine(f.owner.as_deref()))
                .map(|f| {
                    let description = format!("Reinforce {}", fleet_description(f));
                    target(format!("{base}{}", f.id), description)
                }),
        );
        found
    }

    fn world_suggestion(&self, world: &WorldInfo) -> Suggestion {
        Suggestion::new(
            world.id.to_string(),
            self.world_description(world),
            SuggestionKind::World,
        )
    }

    fn world_description(&self, world: &WorldInfo) -> String {
        let WorldInfo {
            industry,
            population,
            ..
        } = world;
        let stats = format!("industry {industry}, population {population}");
        match world.owner.as_deref() {
            Some(owner) if !self.state.is_mine(Some(owner)) => format!("{stats} ({owner})"),
            Some(_) => stats,
            None => format!("{stats} (unowned)"),
        }
    }
}

// =============================================================================
// Typed input
// =============================================================================

/// The tokens typed so far, without the end-of-input marker.
struct Typed<'t> {
    tokens: &'t [Token],
}

impl<'t> Typed<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        let end = tokens
            .iter()
            .position(Token::is_eof)
            .unwrap_or(tokens.len());
        Self {
            tokens: &tokens[..end],
        }
    }

    fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Canonical text of the first `count` tokens.
    fn prefix(&self, count: usize) -> String {
        let mut out = String::new();
        for token in self.tokens.iter().take(count) {
            if token.kind == TokenKind::JoinArgs {
                out.push(' ');
            }
            out.push_str(&token.value);
        }
        out
    }

    fn normalized(&self) -> String {
        self.prefix(self.tokens.len())
    }

    fn number(&self, index: usize) -> Option<u32> {
        self.tokens
            .get(index)
            .filter(|t| t.kind == TokenKind::Number)
            .and_then(|t| t.value.parse().ok())
    }

    /// True if the last token is a `W` still waiting for its digits.
    fn ends_with_bare_world(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|t| t.kind == TokenKind::Unknown && t.value == "W")
    }

    /// World ids typed after `F<n>`, stopping at the first malformed hop.
    fn hops(&self) -> Vec<WorldId> {
        self.tokens
            .get(2..)
            .unwrap_or_default()
            .chunks(2)
            .map_while(|pair| match pair {
                [w, n] if w.kind == TokenKind::WorldPrefix && n.kind == TokenKind::Number => {
                    n.value.parse().ok().map(WorldId)
                }
                _ => None,
            })
            .collect()
    }

    /// Keeps suggestions that extend what was typed.
    fn keep_extending(&self, suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
        let typed = self.normalized();
        suggestions
            .into_iter()
            .filter(|s| s.text.starts_with(&typed))
            .collect()
    }
}

// =============================================================================
// Fixed suggestions
// =============================================================================

fn submit_suggestion(outcome: &ParseOutcome, verdict: &Verdict) -> Option<Suggestion> {
    if !outcome.is_ok() || !outcome.consumed_all || !verdict.is_valid() {
        return None;
    }
    let command = outcome.command.as_ref()?;
    let wire = command.to_wire()?;
    let suggestion = Suggestion::new(wire, command.to_string(), SuggestionKind::Submit);
    Some(match verdict.warnings().first() {
        Some(warning) => suggestion
            .with_description(format!("{command} ({warning})"))
            .dangerous(),
        None => suggestion,
    })
}

fn submittable(text: &str) -> bool {
    let outcome = parse_final(text);
    outcome.errors.is_empty() && outcome.command.is_some_and(|c| c.is_complete())
}

fn action(text: String, description: &str) -> Suggestion {
    Suggestion::new(text, description, SuggestionKind::Action)
}

fn target(text: String, description: impl Into<String>) -> Suggestion {
    Suggestion::new(text, description, SuggestionKind::Target)
}

fn action_letters(base: &str) -> Vec<Suggestion> {
    vec![
        action(format!("{base}W"), "Move along connected worlds"),
        action(format!("{base}T"), "Transfer ships"),
        action(format!("{base}A"), "Attack or ambush"),
    ]
}

fn build_action(base: &str) -> Suggestion {
    action(format!("{base}B"), "Build ships")
}

fn amounts(base: &str, available: u32, noun: &str) -> Vec<Suggestion> {
    let mut found = Vec::new();
    if available > 0 {
        found.push(Suggestion::new(
            format!("{base}{available}"),
            format!("All {available} {noun}"),
            SuggestionKind::Amount,
        ));
    }
    let half = available / 2;
    if half > 0 && half != available {
        found.push(Suggestion::new(
            format!("{base}{half}"),
            format!("Half ({half} {noun})"),
            SuggestionKind::Amount,
        ));
    }
    found
}

/// Amounts that lengthen the number typed as the fourth token.
fn longer_amounts(typed: &Typed<'_>, available: u32) -> Vec<Suggestion> {
    let current = typed.normalized();
    longer_than(amounts(&typed.prefix(3), available, "ships"), &current).collect()
}

/// Suggestions whose text strictly extends `typed`.
fn longer_than(suggestions: Vec<Suggestion>, typed: &str) -> impl Iterator<Item = Suggestion> {
    suggestions
        .into_iter()
        .filter(move |s| s.text.len() > typed.len() && s.text.starts_with(typed))
}

fn join_keyword() -> Suggestion {
    Suggestion::new("JOIN ", "Join the game", SuggestionKind::Keyword)
}

fn turn_keyword() -> Suggestion {
    Suggestion::new("TURN", "Finish this turn", SuggestionKind::Keyword)
}

fn join_suggestions(typed: &Typed<'_>) -> Vec<Suggestion> {
    let args = typed
        .tokens
        .get(1)
        .filter(|t| t.kind == TokenKind::JoinArgs)
        .map_or("", |t| t.value.as_str());

    let character = |name: &&str| {
        Suggestion::new(
            format!("JOIN {name}"),
            format!("Join as {name}"),
            SuggestionKind::Character,
        )
    };
    if args.is_empty() {
        return CHARACTER_TYPES.iter().map(character).collect();
    }
    fuzzy::rank(args, CHARACTER_TYPES, |name| *name)
        .into_iter()
        .map(|(_, name)| character(name))
        .collect()
}

fn fleet_suggestion(fleet: &FleetInfo) -> Suggestion {
    Suggestion::new(
        fleet.id.to_string(),
        fleet_description(fleet),
        SuggestionKind::Fleet,
    )
}

fn fleet_description(fleet: &FleetInfo) -> String {
    match fleet.world {
        Some(world) => format!("{} ships at {world}", fleet.ships),
        None => format!("{} ships in transit", fleet.ships),
    }
}
