//! Scenario loader: which map, who stands where, what the angler carries.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

fn default_player_kind() -> String {
    "player".to_string()
}

/// Entity placement for one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// Map name under `maps/`, without extension.
    pub map: String,
    /// Species id of the angler.
    #[serde(default = "default_player_kind")]
    pub player_kind: String,
    pub player: (i32, i32),
    /// Gear ids equipped on the angler.
    #[serde(default)]
    pub gear: Vec<String>,
    /// `(species id, x, y)` for every other actor.
    #[serde(default)]
    pub spawns: Vec<(String, i32, i32)>,
}

/// Loader for scenario files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
