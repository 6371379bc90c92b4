//! State management errors.
//!
//! Errors related to entity bookkeeping on [`GameState`](super::GameState).

use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Errors that occur during game state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// No actor with this id is in play.
    #[error("Entity {0} not found")]
    EntityNotFound(EntityId),

    /// An actor with this id already exists.
    #[error("Entity {0} already exists")]
    DuplicateEntity(EntityId),

    /// The player is never removed from play.
    #[error("The player cannot be removed from play")]
    CannotRemovePlayer,
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            EntityNotFound(_) | DuplicateEntity(_) => ErrorSeverity::Validation,
            CannotRemovePlayer => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            EntityNotFound(_) => "STATE_ENTITY_NOT_FOUND",
            DuplicateEntity(_) => "STATE_DUPLICATE_ENTITY",
            CannotRemovePlayer => "STATE_CANNOT_REMOVE_PLAYER",
        }
    }
}
