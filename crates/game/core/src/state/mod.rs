//! Authoritative game state representation.
//!
//! This module owns the actor store, the capture link and the caught
//! collection. Rules mutate it in place through the engine; nothing here
//! performs I/O.
mod actor;
mod behavior;
mod capture;
mod common;
mod entities;
mod error;
mod gear;
mod turn;

pub use actor::{ActorState, DamageRange, FighterStats, METER_MAX};
pub use behavior::{BehaviorState, GoldfishState, HookedState, HostileState, ScaredState};
pub use capture::CaptureLink;
pub use common::{Color, Direction, EntityId, Position};
pub use entities::EntitiesState;
pub use error::StateError;
pub use gear::{Gear, GearSlot, Loadout, SkillKind};
pub use turn::TurnState;

/// Canonical snapshot of the simulation state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Turn bookkeeping.
    pub turn: TurnState,
    /// Every actor in play, player included.
    pub entities: EntitiesState,
    /// The single active line, if any.
    pub capture: Option<CaptureLink>,
    /// Actors landed by the player, in catch order.
    pub caught: Vec<ActorState>,
}

impl GameState {
    /// Creates a fresh state around the given player.
    pub fn new(player: ActorState) -> Self {
        Self {
            turn: TurnState::new(),
            entities: EntitiesState::new(player),
            capture: None,
            caught: Vec::new(),
        }
    }

    /// Returns the id on the end of the line, if any.
    pub fn hooked_actor(&self) -> Option<EntityId> {
        self.capture.map(|link| link.hooked)
    }

    /// Checks the capture invariant: exactly the linked actor is `Hooked`.
    pub fn capture_consistent(&self) -> bool {
        let hooked = self.hooked_actor();
        self.entities.iter().all(|actor| {
            let is_hooked = actor
                .behavior
                .as_ref()
                .is_some_and(BehaviorState::is_hooked);
            is_hooked == (hooked == Some(actor.id))
        })
    }
}
