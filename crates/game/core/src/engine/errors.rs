//! Error types for player action execution.

use crate::action::ActionError;
use crate::capture::CaptureError;
use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced while executing a player action through the game engine.
///
/// A rejected action leaves the turn unconsumed: no NPC pass runs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("action failed: {0}")]
    Action(#[from] ActionError),

    #[error("capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("the player is dead")]
    PlayerDead,
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action(error) => error.severity(),
            Self::Capture(error) => error.severity(),
            Self::PlayerDead => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Action(error) => error.error_code(),
            Self::Capture(error) => error.error_code(),
            Self::PlayerDead => "EXECUTE_PLAYER_DEAD",
        }
    }
}
