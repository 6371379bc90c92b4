//! Turn pipeline: one player action, then one pass over the NPCs.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. A
//! player action either fails without touching the turn counter, or
//! succeeds and is followed by exactly one [`TurnScheduler`] pass.

mod context;
mod errors;
mod turns;

pub use context::TurnContext;
pub use errors::ExecuteError;
pub use turns::{PassReport, SkippedTurn, TurnScheduler};

use crate::action::{PlayerAction, step, validate_step};
use crate::capture::{
    self, CastOutcome, ExhaustOutcome, ReelOutcome, cast_line, exhaust, reel, unhook,
};
use crate::combat::{MeleeOutcome, resolve_melee};
use crate::env::{Env, EventSink, GameEvent, RngOracle};
use crate::state::{EntityId, GameState, Position};

/// What the player's own action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Moved(Position),
    Attacked(MeleeOutcome),
    Waited,
    Cast(CastOutcome),
    Reeled(ReelOutcome),
    Exhausted(ExhaustOutcome),
    Unhooked(EntityId),
}

/// Complete outcome of one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Number of the turn that just completed.
    pub turn: u64,
    pub outcome: ActionOutcome,
    pub pass: PassReport,
    /// Actors landed during this turn.
    pub caught: Vec<EntityId>,
}

/// Game engine that executes player actions against a [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes one player action and, if it was accepted, the NPC pass.
    ///
    /// # Errors
    ///
    /// A dead player cannot act. Rejected actions are returned as-is and
    /// do not consume the turn.
    pub fn execute(
        &mut self,
        env: Env<'_>,
        rng: &mut dyn RngOracle,
        events: &mut dyn EventSink,
        action: PlayerAction,
    ) -> Result<TurnReport, ExecuteError> {
        if !self.state.entities.player().is_alive() {
            return Err(ExecuteError::PlayerDead);
        }
        let caught_before = self.state.caught.len();
        let mut ctx = TurnContext::new(self.state, env, rng, events);

        let outcome = apply(action, &mut ctx)?;
        let pass = TurnScheduler::run_pass(&mut ctx);

        self.state.turn.number += 1;
        Ok(TurnReport {
            turn: self.state.turn.number,
            outcome,
            pass,
            caught: self.state.caught[caught_before..]
                .iter()
                .map(|actor| actor.id)
                .collect(),
        })
    }
}

fn apply(action: PlayerAction, ctx: &mut TurnContext<'_>) -> Result<ActionOutcome, ExecuteError> {
    let player = EntityId::PLAYER;
    let outcome = match action {
        PlayerAction::Move { dx, dy } => {
            validate_step(dx, dy)?;
            let destination = ctx.state.entities.player().position.offset(dx, dy);
            let target = ctx
                .state
                .entities
                .actor_at(destination)
                .filter(|actor| actor.id != player)
                .map(|actor| actor.id);
            match target {
                Some(target) => ActionOutcome::Attacked(resolve_melee(player, target, ctx)?),
                None => {
                    let moved = step(player, dx, dy, ctx)?;
                    if ctx.state.capture.is_some_and(|link| link.hooker == player) {
                        capture::release_line(ctx.state);
                        ctx.emit(GameEvent::LostHook);
                    }
                    ActionOutcome::Moved(moved)
                }
            }
        }
        PlayerAction::Wait => ActionOutcome::Waited,
        PlayerAction::CastLine { target } => ActionOutcome::Cast(cast_line(player, target, ctx)?),
        PlayerAction::Reel => ActionOutcome::Reeled(reel(player, ctx)?),
        PlayerAction::Exhaust => ActionOutcome::Exhausted(exhaust(player, ctx)?),
        PlayerAction::Unhook => ActionOutcome::Unhooked(unhook(player, ctx)?),
    };
    Ok(outcome)
}
