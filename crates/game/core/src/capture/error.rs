//! Capture protocol errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors raised by the cast/reel/exhaust/unhook protocol.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaptureError {
    /// Reel, exhaust or unhook without anything on the line.
    #[error("You have nothing on the line")]
    NoLine,

    /// A line is already out.
    #[error("Your line is already on {0}")]
    AlreadyHooked(EntityId),

    /// The cast aimed at a cell outside the field of view.
    #[error("You cannot see {0}")]
    NotVisible(Position),

    /// The cast crossed no actor.
    #[error("There is nothing there to hook")]
    NothingToHook,

    /// The acting angler is not in play.
    #[error("Angler {0} not found")]
    AnglerNotFound(EntityId),

    /// The line belongs to another angler.
    #[error("The line belongs to {0}")]
    NotYourLine(EntityId),

    /// The link points at an actor that is no longer in play.
    #[error("Capture link references missing actor {0}")]
    LinkBroken(EntityId),
}

impl GameError for CaptureError {
    fn severity(&self) -> ErrorSeverity {
        use CaptureError::*;
        match self {
            NoLine | AlreadyHooked(_) | NotVisible(_) | NothingToHook => {
                ErrorSeverity::Recoverable
            }
            AnglerNotFound(_) | NotYourLine(_) => ErrorSeverity::Validation,
            LinkBroken(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CaptureError::*;
        match self {
            NoLine => "CAPTURE_NO_LINE",
            AlreadyHooked(_) => "CAPTURE_ALREADY_HOOKED",
            NotVisible(_) => "CAPTURE_NOT_VISIBLE",
            NothingToHook => "CAPTURE_NOTHING_TO_HOOK",
            AnglerNotFound(_) => "CAPTURE_ANGLER_NOT_FOUND",
            NotYourLine(_) => "CAPTURE_NOT_YOUR_LINE",
            LinkBroken(_) => "CAPTURE_LINK_BROKEN",
        }
    }
}
