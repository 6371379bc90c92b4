//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Actor templates (data-driven via RON)
//! - Gear catalogs (data-driven via RON)
//! - Map layouts and scenarios (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Templates are turned into `angler-core` actors at spawn time; the loaders
//! themselves never appear in game state.

pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use templates::{ActorTemplate, BehaviorSpec};

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, ConfigLoader, ContentFactory, GearLoader, MapLayout, MapLoader, Scenario,
    ScenarioLoader, ScenarioSpec,
};

/// Directory of the data files bundled with this crate.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
