//! Content loaders for reading game data from files.
//!
//! RON files describe actors, gear, maps and scenarios; TOML holds the
//! tunable [`angler_core::GameConfig`].

pub mod actors;
pub mod config;
pub mod factory;
pub mod gear;
pub mod map;
pub mod scenario;

pub use actors::ActorLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, Scenario};
pub use gear::GearLoader;
pub use map::{MapLayout, MapLoader};
pub use scenario::{ScenarioLoader, ScenarioSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
