use crate::action::{ActionError, move_to};
use crate::engine::TurnContext;
use crate::env::{Env, EventSink, GameEvent, MapOracle, RngOracle};
use crate::nav::{CostField, find_path};
use crate::state::{ActorState, BehaviorState, Color, EntityId, Position, ScaredState};

impl ScaredState {
    /// Frightens `actor` away from `threat`.
    ///
    /// Multiplies its difficulty, recolors it and picks a flee target. The
    /// saved difficulty and color are restored when the actor calms down.
    pub fn enter(
        actor: &mut ActorState,
        previous: BehaviorState,
        threat: Position,
        env: Env<'_>,
        rng: &mut dyn RngOracle,
        events: &mut dyn EventSink,
    ) -> Self {
        let config = env.config();
        let saved_difficulty = actor.stats.difficulty;
        let saved_color = actor.color;
        actor.stats.difficulty =
            saved_difficulty.saturating_mul(config.scared_difficulty_multiplier);
        actor.color = Color::ORANGE_RED;

        let flee_target = flee_target(
            env.map(),
            threat,
            actor.position,
            config.flee_min_distance,
            config.flee_search_attempts,
            rng,
        );
        events.emit(GameEvent::Frightened {
            actor: actor.id,
            name: actor.name.clone(),
        });

        Self {
            previous: Box::new(previous.into_resting()),
            saved_difficulty,
            saved_color,
            flee_target,
        }
    }
}

/// Random walkable cell at least `min_distance` from `threat`.
///
/// Gives up sampling after `attempts` draws and takes the walkable cell
/// farthest from the threat (first in row-major order on ties), or `fallback`
/// on a map with no walkable cell.
fn flee_target(
    map: &dyn MapOracle,
    threat: Position,
    fallback: Position,
    min_distance: u32,
    attempts: u32,
    rng: &mut dyn RngOracle,
) -> Position {
    let dimensions = map.dimensions();
    if dimensions.area() == 0 {
        return fallback;
    }
    let max_x = dimensions.width as i32 - 1;
    let max_y = dimensions.height as i32 - 1;

    for _ in 0..attempts {
        let candidate = Position::new(rng.range(0, max_x), rng.range(0, max_y));
        if map.is_walkable(candidate) && candidate.chebyshev(threat) >= min_distance {
            return candidate;
        }
    }

    (0..dimensions.area())
        .map(|index| dimensions.position(index))
        .filter(|&cell| map.is_walkable(cell))
        .fold(None, |best: Option<Position>, cell| match best {
            Some(current) if current.chebyshev(threat) >= cell.chebyshev(threat) => Some(current),
            _ => Some(cell),
        })
        .unwrap_or(fallback)
}

/// Runs toward the flee target; within one tile of it, calms down.
pub(super) fn act(
    id: EntityId,
    state: ScaredState,
    ctx: &mut TurnContext<'_>,
) -> (BehaviorState, Result<(), ActionError>) {
    let Some(actor) = ctx.state.entities.actor_mut(id) else {
        return (*state.previous, Err(ActionError::ActorNotFound(id)));
    };
    let position = actor.position;

    if position.chebyshev(state.flee_target) <= 1 {
        actor.stats.difficulty = state.saved_difficulty;
        actor.color = state.saved_color;
        ctx.events.emit(GameEvent::CalmedDown {
            actor: id,
            name: actor.name.clone(),
        });
        return (*state.previous, Ok(()));
    }

    let field = CostField::build(ctx.map(), &ctx.state.entities, position, ctx.config());
    let result = match find_path(position, state.flee_target, &field, ctx.config()).first() {
        Some(&next) => move_to(id, next, ctx).map(|_| ()),
        None => Ok(()),
    };
    (BehaviorState::Scared(state), result)
}
