//! Player-facing actions and the movement primitives shared with AI.
//!
//! # Module Structure
//!
//! - `error`: [`ActionError`], the recoverable rejections raised by the world
//! - `movement`: single-step moves through the world's mutation API

pub mod error;
pub mod movement;

pub use error::ActionError;
pub use movement::{move_to, step, validate_step};

use crate::state::Position;

/// One input from the player. Each accepted action is followed by exactly
/// one pass over the non-player actors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    /// Step by `(dx, dy)`; bumping into a living actor attacks it.
    Move { dx: i32, dy: i32 },
    Wait,
    /// Cast toward a target cell; the first actor along the line is tried.
    CastLine { target: Position },
    Reel,
    Exhaust,
    Unhook,
}

impl PlayerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::Move { .. } => "move",
            PlayerAction::Wait => "wait",
            PlayerAction::CastLine { .. } => "cast_line",
            PlayerAction::Reel => "reel",
            PlayerAction::Exhaust => "exhaust",
            PlayerAction::Unhook => "unhook",
        }
    }
}
