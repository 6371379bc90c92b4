//! Unified error type surfaced by the runtime API.
use thiserror::Error;

use angler_core::{ExecuteError, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session requires a scenario before building")]
    MissingScenario,

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl RuntimeError {
    /// True when the player simply has to pick another action.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RuntimeError::Execute(error) => error.severity().is_recoverable(),
            _ => false,
        }
    }
}
