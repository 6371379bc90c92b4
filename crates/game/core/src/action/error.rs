//! Action execution errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors raised when the world rejects an actor's action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Actor not found in game state.
    #[error("Actor {0} not found")]
    ActorNotFound(EntityId),

    /// Actor has no behavior left.
    #[error("Actor {0} is dead")]
    ActorDead(EntityId),

    /// Nothing alive to attack.
    #[error("Target not found")]
    TargetNotFound,

    /// Move delta is not a single king step.
    #[error("Cannot step by ({dx}, {dy})")]
    InvalidStep { dx: i32, dy: i32 },

    /// Destination is not next to the actor.
    #[error("{to} is not adjacent to {from}")]
    NotAdjacent { from: Position, to: Position },

    /// Destination lies outside the map.
    #[error("Destination {0} is out of bounds")]
    OutOfBounds(Position),

    /// Destination is not walkable terrain.
    #[error("Destination {0} is blocked by terrain")]
    Blocked(Position),

    /// Destination holds a blocking actor.
    #[error("Destination {0} is occupied")]
    Occupied(Position),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            ActorNotFound(_) => ErrorSeverity::Validation,
            ActorDead(_) | TargetNotFound => ErrorSeverity::Recoverable,
            InvalidStep { .. } | NotAdjacent { .. } => ErrorSeverity::Recoverable,
            OutOfBounds(_) | Blocked(_) | Occupied(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            ActorNotFound(_) => "ACTION_ACTOR_NOT_FOUND",
            ActorDead(_) => "ACTION_ACTOR_DEAD",
            TargetNotFound => "ACTION_TARGET_NOT_FOUND",
            InvalidStep { .. } => "ACTION_INVALID_STEP",
            NotAdjacent { .. } => "ACTION_NOT_ADJACENT",
            OutOfBounds(_) => "ACTION_OUT_OF_BOUNDS",
            Blocked(_) => "ACTION_BLOCKED",
            Occupied(_) => "ACTION_OCCUPIED",
        }
    }
}
