//! Behavior dispatch for non-player actors.
//!
//! [`act`] takes the actor's [`BehaviorState`] out, runs the variant's turn,
//! and stores whatever state comes back. A variant transitions by returning
//! a different state; it never writes the actor's behavior itself.

mod hooked;
mod hostile;
mod neutral;
mod scared;

pub use hooked::reel_toward;

use crate::action::ActionError;
use crate::engine::TurnContext;
use crate::state::{BehaviorState, EntityId};

/// Runs one turn for `id`.
///
/// The returned behavior is put back even when the turn failed, so a
/// rejected move never loses state.
///
/// # Errors
///
/// Missing or dead actors, and any move the world rejected.
pub fn act(id: EntityId, ctx: &mut TurnContext<'_>) -> Result<(), ActionError> {
    let behavior = ctx
        .state
        .entities
        .actor_mut(id)
        .ok_or(ActionError::ActorNotFound(id))?
        .behavior
        .take()
        .ok_or(ActionError::ActorDead(id))?;

    let (next, result) = dispatch(id, behavior, ctx);

    if let Some(actor) = ctx.state.entities.actor_mut(id) {
        actor.behavior = Some(next);
    }
    result
}

fn dispatch(
    id: EntityId,
    behavior: BehaviorState,
    ctx: &mut TurnContext<'_>,
) -> (BehaviorState, Result<(), ActionError>) {
    match behavior {
        BehaviorState::Idle => (BehaviorState::Idle, Ok(())),
        BehaviorState::Hostile(mut state) => {
            let result = hostile::act(id, &mut state, ctx);
            (BehaviorState::Hostile(state), result)
        }
        BehaviorState::Neutral => (BehaviorState::Neutral, neutral::act(id, ctx)),
        BehaviorState::Goldfish(mut state) => {
            let result = neutral::act_goldfish(id, &mut state, ctx);
            (BehaviorState::Goldfish(state), result)
        }
        BehaviorState::Hooked(state) => hooked::act(id, state, ctx),
        BehaviorState::Scared(state) => scared::act(id, state, ctx),
    }
}
