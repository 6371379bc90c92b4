//! Content factory for building scenarios from data files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use angler_core::{EntityId, GameConfig, GameState, Gear, MapOracle, Position};

use crate::loaders::{
    ActorLoader, ConfigLoader, GearLoader, LoadResult, MapLayout, MapLoader, ScenarioLoader,
};
use crate::templates::ActorTemplate;

/// A ready-to-play world: static terrain plus the initial state.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub layout: MapLayout,
    pub state: GameState,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actors.ron
/// ├── gear.ron
/// ├── maps/
/// │   └── pond.ron
/// └── scenarios/
///     └── pond.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled_data_dir())
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load actor templates from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let path = self.data_dir.join("actors.ron");
        ActorLoader::load(&path)
    }

    /// Load the gear catalog from `gear.ron`.
    pub fn load_gear(&self) -> LoadResult<Vec<(String, Gear)>> {
        let path = self.data_dir.join("gear.ron");
        GearLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.ron`.
    ///
    /// Returns terrain data only (no entities).
    /// For entity placement, use `spawn_scenario()`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapLayout> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Builds the scenario in `scenarios/{name}.ron`.
    ///
    /// The angler gets [`EntityId::PLAYER`]; other actors are numbered in
    /// file order. Every actor must stand on a distinct walkable tile.
    pub fn spawn_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        let spec = ScenarioLoader::load(&path)?;
        let layout = self.load_map(&spec.map)?;
        let templates: HashMap<String, ActorTemplate> = self.load_actors()?.into_iter().collect();
        let gear: HashMap<String, Gear> = self.load_gear()?.into_iter().collect();

        let template = |kind: &str| {
            templates
                .get(kind)
                .ok_or_else(|| anyhow::anyhow!("Scenario '{}' uses unknown actor '{}'", name, kind))
        };
        let check_tile = |kind: &str, position: Position, state: Option<&GameState>| -> LoadResult<()> {
            if !layout.is_walkable(position) {
                anyhow::bail!("Actor '{}' placed on unwalkable tile {}", kind, position);
            }
            if state.is_some_and(|state| state.entities.actor_at(position).is_some()) {
                anyhow::bail!("Actor '{}' placed on occupied tile {}", kind, position);
            }
            Ok(())
        };

        let start = Position::new(spec.player.0, spec.player.1);
        check_tile(&spec.player_kind, start, None)?;
        let mut player = template(&spec.player_kind)?.spawn(EntityId::PLAYER, &spec.player_kind, start);
        for id in &spec.gear {
            let item = gear
                .get(id)
                .ok_or_else(|| anyhow::anyhow!("Scenario '{}' uses unknown gear '{}'", name, id))?;
            player.loadout.equip(item.clone());
        }

        let mut state = GameState::new(player);
        for (kind, x, y) in &spec.spawns {
            let position = Position::new(*x, *y);
            check_tile(kind, position, Some(&state))?;
            let id = state.entities.next_id();
            let actor = template(kind)?.spawn(id, kind, position);
            state
                .entities
                .spawn(actor)
                .map_err(|e| anyhow::anyhow!("Failed to spawn '{}': {}", kind, e))?;
        }

        Ok(Scenario { layout, state })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
