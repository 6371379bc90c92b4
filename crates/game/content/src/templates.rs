//! Species templates that spawn actors.

use angler_core::{ActorState, BehaviorState, Color, DamageRange, EntityId, FighterStats, Position};

/// Behavior an actor starts with.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorSpec {
    #[default]
    Idle,
    Hostile,
    Neutral,
    /// Neutral wanderer that turns on the angler while `rare_kin` is hooked.
    Goldfish { rare_kin: String },
}

impl BehaviorSpec {
    pub fn build(&self) -> BehaviorState {
        match self {
            BehaviorSpec::Idle => BehaviorState::Idle,
            BehaviorSpec::Hostile => BehaviorState::hostile(),
            BehaviorSpec::Neutral => BehaviorState::Neutral,
            BehaviorSpec::Goldfish { rare_kin } => BehaviorState::goldfish(rare_kin.clone()),
        }
    }
}

fn default_blocks() -> bool {
    true
}

/// Everything needed to spawn one species.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Color,
    #[cfg_attr(feature = "serde", serde(default = "default_blocks"))]
    pub blocks_movement: bool,
    pub stats: FighterStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<DamageRange>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior: BehaviorSpec,
}

impl ActorTemplate {
    /// Creates a live actor of species `kind` at `position`.
    pub fn spawn(&self, id: EntityId, kind: &str, position: Position) -> ActorState {
        let mut actor = ActorState::new(
            id,
            kind,
            self.name.clone(),
            position,
            self.stats.clone(),
            self.behavior.build(),
        )
        .with_color(self.color);
        actor.blocks_movement = self.blocks_movement;
        actor.weapon = self.weapon;
        actor
    }
}
