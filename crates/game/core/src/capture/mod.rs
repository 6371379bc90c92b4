//! Capture protocol: cast, reel, exhaust, unhook, escape.
//!
//! A successful cast creates the world's single [`CaptureLink`] and wraps
//! the target's behavior in `Hooked`. The link ends in one of three ways:
//! the catch lands (the actor leaves play for the caught collection), the
//! actor slips the hook (its `hooked` meter hits 0 and it turns `Scared`),
//! or the angler lets go (`unhook`, or moving away).
//!
//! Effective skill levels come from the angler's [`Loadout`](crate::state::Loadout).

mod cast;
mod error;
mod reel;

pub use cast::{CastOutcome, cast_line, line_path, nearest_visible_actor};
pub use error::CaptureError;
pub use reel::{ExhaustOutcome, ReelOutcome, exhaust, reel, unhook};

use crate::engine::TurnContext;
use crate::env::GameEvent;
use crate::state::{BehaviorState, CaptureLink, EntityId, GameState, ScaredState};

/// Readout of the current line for frontends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureStatus {
    pub actor: EntityId,
    pub name: String,
    /// Fight left in the actor: `100 - fatigue`.
    pub strength: i32,
    pub hooked: i32,
}

/// Describes what is on the line, if anything.
pub fn status(state: &GameState) -> Option<CaptureStatus> {
    let link = state.capture?;
    let actor = state.entities.actor(link.hooked)?;
    Some(CaptureStatus {
        actor: actor.id,
        name: actor.name.clone(),
        strength: crate::state::METER_MAX - actor.stats.fatigue(),
        hooked: actor.stats.hooked(),
    })
}

/// Drops the line and hands the hooked actor its resting behavior back.
///
/// Returns the released link, or `None` if nothing was hooked.
pub fn release_line(state: &mut GameState) -> Option<CaptureLink> {
    let link = state.capture.take()?;
    if let Some(actor) = state.entities.actor_mut(link.hooked)
        && let Some(behavior) = actor.behavior.take()
    {
        actor.behavior = Some(behavior.into_resting());
    }
    Some(link)
}

/// The hooked actor `id` tore free: clears the line and scares it away from
/// the angler. `previous` is the resting behavior `Hooked` was holding.
///
/// Returns the behavior the actor should carry from now on.
pub(crate) fn slip_hook(
    id: EntityId,
    previous: BehaviorState,
    ctx: &mut TurnContext<'_>,
) -> BehaviorState {
    let threat = ctx
        .state
        .capture
        .take()
        .and_then(|link| ctx.state.entities.actor(link.hooker))
        .map(|hooker| hooker.position);

    let Some(actor) = ctx.state.entities.actor_mut(id) else {
        return previous;
    };
    ctx.events.emit(GameEvent::SlippedHook {
        actor: id,
        name: actor.name.clone(),
    });
    let threat = threat.unwrap_or(actor.position);
    let scared = ScaredState::enter(actor, previous, threat, ctx.env, ctx.rng, ctx.events);
    BehaviorState::Scared(scared)
}

/// The hooked actor pulls against the line, losing `strength * k` hooked.
///
/// Returns true when this tore it free. The actor's behavior must still be
/// in place (not taken by the dispatcher).
pub(crate) fn strain(id: EntityId, ctx: &mut TurnContext<'_>) -> bool {
    let (low, high) = ctx.config().struggle_strength_factor;
    let factor = ctx.rng.range(low, high);
    let Some(actor) = ctx.state.entities.actor_mut(id) else {
        return false;
    };
    let pull = actor.stats.strength.max(0).saturating_mul(factor);
    if actor.stats.adjust_hooked(-pull) > 0 {
        return false;
    }

    let previous = actor
        .behavior
        .take()
        .map(BehaviorState::into_resting)
        .unwrap_or(BehaviorState::Idle);
    let next = slip_hook(id, previous, ctx);
    if let Some(actor) = ctx.state.entities.actor_mut(id) {
        actor.behavior = Some(next);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;

    #[test]
    fn release_restores_the_resting_behavior() {
        let mut harness = Harness::new(20, 20);
        let fish = harness.spawn_fish(3, 3, 60);
        harness.hook(fish, 40);

        let link = release_line(&mut harness.state).unwrap();
        assert_eq!(link.hooked, fish);
        assert!(harness.state.capture.is_none());
        assert_eq!(
            harness.state.entities.actor(fish).unwrap().behavior,
            Some(BehaviorState::Neutral)
        );
        assert!(harness.state.capture_consistent());
        assert_eq!(release_line(&mut harness.state), None);
    }

    #[test]
    fn status_reports_remaining_strength() {
        let mut harness = Harness::new(20, 20);
        let fish = harness.spawn_fish(3, 3, 60);
        harness.hook(fish, 40);
        harness
            .state
            .entities
            .actor_mut(fish)
            .unwrap()
            .stats
            .set_fatigue(35);

        let status = status(&harness.state).unwrap();
        assert_eq!(status.strength, 65);
        assert_eq!(status.hooked, 40);
        assert_eq!(status.name, "Goldfish");
    }
}
