use crate::config::GameConfig;
use crate::env::{Env, EventSink, GameEvent, MapOracle, RngOracle};
use crate::state::GameState;

/// Everything a rule needs while resolving one action.
///
/// Fields are public so rules can borrow them disjointly, e.g. an actor out
/// of `state` alongside `rng` and `events`.
pub struct TurnContext<'a> {
    pub state: &'a mut GameState,
    pub env: Env<'a>,
    pub rng: &'a mut dyn RngOracle,
    pub events: &'a mut dyn EventSink,
}

impl<'a> TurnContext<'a> {
    pub fn new(
        state: &'a mut GameState,
        env: Env<'a>,
        rng: &'a mut dyn RngOracle,
        events: &'a mut dyn EventSink,
    ) -> Self {
        Self {
            state,
            env,
            rng,
            events,
        }
    }

    pub fn map(&self) -> &'a dyn MapOracle {
        self.env.map()
    }

    pub fn config(&self) -> &'a GameConfig {
        self.env.config()
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.emit(event);
    }
}
