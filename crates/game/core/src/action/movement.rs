//! Single-tile movement through the world's mutation API.

use super::error::ActionError;
use crate::engine::TurnContext;
use crate::state::{EntityId, Position};

/// Accepts only deltas with each axis in `-1..=1`, excluding `(0, 0)`.
pub fn validate_step(dx: i32, dy: i32) -> Result<(), ActionError> {
    let unit = |d: i32| (-1..=1).contains(&d);
    if unit(dx) && unit(dy) && (dx, dy) != (0, 0) {
        Ok(())
    } else {
        Err(ActionError::InvalidStep { dx, dy })
    }
}

/// Moves `actor` one step by `(dx, dy)`.
pub fn step(
    actor: EntityId,
    dx: i32,
    dy: i32,
    ctx: &mut TurnContext<'_>,
) -> Result<Position, ActionError> {
    validate_step(dx, dy)?;
    let origin = ctx
        .state
        .entities
        .actor(actor)
        .ok_or(ActionError::ActorNotFound(actor))?
        .position;
    move_to(actor, origin.offset(dx, dy), ctx)
}

/// Moves `actor` onto `destination`.
///
/// The destination must be one king step away, in bounds, walkable and
/// free of other blocking actors.
pub fn move_to(
    actor: EntityId,
    destination: Position,
    ctx: &mut TurnContext<'_>,
) -> Result<Position, ActionError> {
    let origin = ctx
        .state
        .entities
        .actor(actor)
        .ok_or(ActionError::ActorNotFound(actor))?
        .position;
    if origin.chebyshev(destination) != 1 {
        return Err(ActionError::NotAdjacent {
            from: origin,
            to: destination,
        });
    }
    let map = ctx.map();
    if !map.contains(destination) {
        return Err(ActionError::OutOfBounds(destination));
    }
    if !map.is_walkable(destination) {
        return Err(ActionError::Blocked(destination));
    }
    if ctx
        .state
        .entities
        .blocking_at(destination)
        .is_some_and(|other| other.id != actor)
    {
        return Err(ActionError::Occupied(destination));
    }

    ctx.state
        .entities
        .place(actor, destination)
        .map_err(|_| ActionError::ActorNotFound(actor))?;
    Ok(destination)
}
