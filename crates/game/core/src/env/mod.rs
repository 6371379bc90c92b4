//! Collaborators the rules consume but do not own.
//!
//! The map oracle exposes static geometry and visibility, the RNG oracle
//! supplies every random draw, and the event sink receives narration. [`Env`]
//! bundles the read-only parts so the engine can reach them without coupling
//! to concrete implementations.
mod events;
mod map;
mod rng;

pub use events::{EventSink, GameEvent, NullSink};
pub use map::{MapDimensions, MapOracle, StaticTile, TerrainKind};
pub use rng::{PcgRng, RngOracle, ScriptedRng};

use crate::config::GameConfig;

/// Aggregates the read-only collaborators required by the rules.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    map: &'a dyn MapOracle,
    config: &'a GameConfig,
}

impl<'a> Env<'a> {
    pub fn new(map: &'a dyn MapOracle, config: &'a GameConfig) -> Self {
        Self { map, config }
    }

    pub fn map(&self) -> &'a dyn MapOracle {
        self.map
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

impl core::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("dimensions", &self.map.dimensions())
            .field("config", self.config)
            .finish()
    }
}
