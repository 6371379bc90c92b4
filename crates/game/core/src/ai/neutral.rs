use super::hostile;
use crate::action::{ActionError, step};
use crate::engine::TurnContext;
use crate::state::{Color, Direction, EntityId, GoldfishState};

/// Wanders, keeping its distance from the player.
///
/// Flees along the axis signs when the player is within 2 tiles, or with
/// probability `avoidance`% when `distance * 10 < avoidance`. Otherwise it
/// steps in a random compass direction. A step onto a living actor is
/// cancelled rather than turned into an attack.
pub(super) fn act(id: EntityId, ctx: &mut TurnContext<'_>) -> Result<(), ActionError> {
    let actor = ctx
        .state
        .entities
        .actor(id)
        .ok_or(ActionError::ActorNotFound(id))?;
    let position = actor.position;
    let avoidance = actor.stats.avoidance;
    let threat = ctx.state.entities.player().position;
    let distance = position.chebyshev(threat) as i32;

    let flee = distance <= 2
        || (distance.saturating_mul(10) < avoidance && ctx.rng.percent() >= 100 - avoidance);
    let (dx, dy) = if flee {
        position.step_away_from(threat)
    } else {
        Direction::ALL[ctx.rng.index(Direction::ALL.len())].delta()
    };
    if (dx, dy) == (0, 0) {
        return Ok(());
    }

    if ctx
        .state
        .entities
        .actor_at(position.offset(dx, dy))
        .is_some()
    {
        return Ok(());
    }
    step(id, dx, dy, ctx).map(|_| ())
}

/// Neutral goldfish that turns on the player while its rare kin is hooked.
pub(super) fn act_goldfish(
    id: EntityId,
    state: &mut GoldfishState,
    ctx: &mut TurnContext<'_>,
) -> Result<(), ActionError> {
    let kin_hooked = ctx
        .state
        .capture
        .and_then(|link| ctx.state.entities.actor(link.hooked))
        .is_some_and(|hooked| hooked.kind == state.rare_kin);

    let color = if kin_hooked {
        if ctx.rng.range(1, 2) == 1 {
            Color::ORANGE_RED
        } else {
            Color::GOLD
        }
    } else {
        Color::GOLD
    };
    if let Some(actor) = ctx.state.entities.actor_mut(id) {
        actor.color = color;
    }

    if kin_hooked {
        hostile::act(id, &mut state.pursuit, ctx)
    } else {
        state.pursuit.path.clear();
        act(id, ctx)
    }
}
