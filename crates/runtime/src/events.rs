//! Event sink that narrates through `tracing` and keeps the message log.
use angler_core::{EventSink, GameEvent};

/// Forwards every event to `tracing` at info level and appends it to `log`.
pub struct TracingSink<'a> {
    log: &'a mut Vec<GameEvent>,
}

impl<'a> TracingSink<'a> {
    pub fn new(log: &'a mut Vec<GameEvent>) -> Self {
        Self { log }
    }
}

impl EventSink for TracingSink<'_> {
    fn emit(&mut self, event: GameEvent) {
        tracing::info!(target: "angler::events", "{}", event);
        self.log.push(event);
    }
}
