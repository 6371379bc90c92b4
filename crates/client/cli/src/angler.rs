//! A simple angler that fishes whatever it can see.

use anyhow::Result;

use angler_core::{CaptureStatus, Direction, PlayerAction};
use angler_runtime::Session;

/// Below this strength the fish is reeled instead of worn down.
const REEL_BELOW_STRENGTH: i32 = 50;

/// Picks player actions: fight the line when something is hooked, cast at
/// the nearest visible actor otherwise, and wander when nothing is in view.
#[derive(Debug, Default)]
pub struct ScriptedAngler {
    wander: usize,
}

impl ScriptedAngler {
    pub fn choose(&mut self, session: &Session) -> PlayerAction {
        if let Some(status) = session.capture_status() {
            return fight(&status);
        }
        if let Some(target) = session.nearest_target()
            && let Some(actor) = session.state().entities.actor(target)
        {
            return PlayerAction::CastLine {
                target: actor.position,
            };
        }
        let (dx, dy) = Direction::ALL[self.wander % Direction::ALL.len()].delta();
        PlayerAction::Move { dx, dy }
    }

    /// Plays one turn, waiting instead when the world rejects the choice.
    pub fn play_turn(&mut self, session: &mut Session) -> Result<()> {
        let action = self.choose(session);
        match session.step(action) {
            Ok(_) => Ok(()),
            Err(error) if error.is_recoverable() => {
                tracing::debug!(action = action.as_str(), %error, "falling back to wait");
                self.wander += 1;
                session.step(PlayerAction::Wait)?;
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }
}

fn fight(status: &CaptureStatus) -> PlayerAction {
    if status.strength < REEL_BELOW_STRENGTH {
        PlayerAction::Reel
    } else {
        PlayerAction::Exhaust
    }
}
