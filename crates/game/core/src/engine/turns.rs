use super::TurnContext;
use crate::action::ActionError;
use crate::ai;
use crate::error::GameError;
use crate::state::EntityId;

/// An actor whose turn the world rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedTurn {
    pub actor: EntityId,
    pub error: ActionError,
}

impl SkippedTurn {
    /// True when the rejection points at a bug rather than the world.
    pub fn is_internal(&self) -> bool {
        self.error.severity().is_internal()
    }
}

/// Summary of one pass over the non-player actors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassReport {
    /// Actors that completed their turn, in scheduling order.
    pub acted: Vec<EntityId>,
    /// Actors whose action was rejected. Their turn is simply lost.
    pub skipped: Vec<SkippedTurn>,
    /// The player died during the pass; remaining actors did not act.
    pub player_died: bool,
}

/// Runs every living non-player actor once per player action.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnScheduler;

impl TurnScheduler {
    /// Runs one pass.
    ///
    /// The actor set is snapshotted (sorted by id) before anyone acts, so
    /// captures or deaths mid-pass never disturb the iteration. Snapshotted
    /// actors that are gone or dead by their slot are skipped silently.
    pub fn run_pass(ctx: &mut TurnContext<'_>) -> PassReport {
        let mut report = PassReport::default();

        for id in ctx.state.entities.living_npc_ids() {
            if !ctx.state.entities.player().is_alive() {
                break;
            }
            let alive = ctx
                .state
                .entities
                .actor(id)
                .is_some_and(|actor| actor.is_alive());
            if !alive {
                continue;
            }

            match ai::act(id, ctx) {
                Ok(()) => report.acted.push(id),
                Err(error) => report.skipped.push(SkippedTurn { actor: id, error }),
            }
        }

        report.player_died = !ctx.state.entities.player().is_alive();
        report
    }
}
