//! Closed set of behavior variants driving non-player actors.
//!
//! Exactly one variant is active per living actor. `Hooked` and `Scared` own
//! the variant they interrupted and hand it back on exit, minus any cached
//! pursuit path. Nesting
//! never goes deeper than one level: wrapping an already interrupted state
//! unwraps it first (see [`BehaviorState::into_resting`]).

use super::common::{Color, Position};

/// Behavior of an actor that chases and attacks the player.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileState {
    /// Cached steps toward the last seen target position, origin excluded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: Vec<Position>,
}

/// Neutral wanderer that turns hostile while a rare kin is on the line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldfishState {
    /// Actor kind whose capture enrages this fish.
    pub rare_kin: String,
    /// Pursuit cache used while enraged.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pursuit: HostileState,
}

impl GoldfishState {
    pub fn new(rare_kin: impl Into<String>) -> Self {
        Self {
            rare_kin: rare_kin.into(),
            pursuit: HostileState::default(),
        }
    }
}

/// Actor currently on the line of a hooking actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HookedState {
    pub previous: Box<BehaviorState>,
}

/// Actor fleeing after slipping the hook.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaredState {
    pub previous: Box<BehaviorState>,
    pub saved_difficulty: i32,
    pub saved_color: Color,
    pub flee_target: Position,
}

/// The active behavior of a living actor.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorState {
    /// Does nothing. Used by the player and non-combat actors.
    Idle,
    Hostile(HostileState),
    Neutral,
    Goldfish(GoldfishState),
    Hooked(HookedState),
    Scared(ScaredState),
}

impl BehaviorState {
    pub fn hostile() -> Self {
        Self::Hostile(HostileState::default())
    }

    pub fn goldfish(rare_kin: impl Into<String>) -> Self {
        Self::Goldfish(GoldfishState::new(rare_kin))
    }

    /// Wraps `previous` in a `Hooked` state.
    ///
    /// Cached pursuit paths are dropped: the actor will be dragged away
    /// from them while it is on the line.
    pub fn hooked(previous: BehaviorState) -> Self {
        Self::Hooked(HookedState {
            previous: Box::new(previous.into_resting().without_pursuit()),
        })
    }

    fn without_pursuit(mut self) -> Self {
        match &mut self {
            Self::Hostile(hostile) => hostile.path.clear(),
            Self::Goldfish(goldfish) => goldfish.pursuit.path.clear(),
            _ => {}
        }
        self
    }

    /// Variant name, for logs and events.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn is_hooked(&self) -> bool {
        matches!(self, Self::Hooked(_))
    }

    pub fn is_scared(&self) -> bool {
        matches!(self, Self::Scared(_))
    }

    /// Strips one level of interruption, returning the stored resting behavior.
    ///
    /// `Scared` state is discarded as-is: callers that need the saved
    /// difficulty and color back must restore them before unwrapping.
    pub fn into_resting(self) -> BehaviorState {
        match self {
            Self::Hooked(hooked) => *hooked.previous,
            Self::Scared(scared) => *scared.previous,
            other => other,
        }
    }
}
