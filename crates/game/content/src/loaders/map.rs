//! Map data loader.
//!
//! Loads pure terrain/tile data from map RON files.
//! Entity placement is handled separately via scenario files.

use std::collections::HashMap;
use std::path::Path;

use angler_core::{MapDimensions, MapOracle, Position, StaticTile, TerrainKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files (terrain only).
///
/// Tiles start as `fill`, then `rects` and finally `tiles` override them in
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    #[serde(default)]
    fill: TerrainKind,
    #[serde(default)]
    rects: Vec<(i32, i32, u32, u32, TerrainKind)>, // (x, y, width, height, terrain)
    #[serde(default)]
    tiles: Vec<(i32, i32, TerrainKind)>, // (x, y, terrain)
}

/// Static terrain of one map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLayout {
    pub dimensions: MapDimensions,
    pub tiles: HashMap<Position, StaticTile>,
}

/// Visibility is a runtime concern; a bare layout sees everything.
impl MapOracle for MapLayout {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.tiles.get(&position).copied()
    }

    fn is_visible(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load map data from a RON file.
    ///
    /// # Errors
    ///
    /// Fails on unreadable files, malformed RON, or overrides outside the
    /// map bounds.
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        let data: MapDataRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);

        // Fill entire map with the base terrain first
        let mut tiles = HashMap::with_capacity(dimensions.area());
        for y in 0..dimensions.height {
            for x in 0..dimensions.width {
                let pos = Position::new(x as i32, y as i32);
                tiles.insert(pos, StaticTile::new(data.fill));
            }
        }

        for (x, y, width, height, terrain) in data.rects {
            for dy in 0..height as i32 {
                for dx in 0..width as i32 {
                    set_tile(&mut tiles, dimensions, Position::new(x + dx, y + dy), terrain)?;
                }
            }
        }

        // Then override with explicitly defined tiles
        for (x, y, terrain) in data.tiles {
            set_tile(&mut tiles, dimensions, Position::new(x, y), terrain)?;
        }

        Ok(MapLayout { dimensions, tiles })
    }
}

fn set_tile(
    tiles: &mut HashMap<Position, StaticTile>,
    dimensions: MapDimensions,
    position: Position,
    terrain: TerrainKind,
) -> LoadResult<()> {
    if !dimensions.contains(position) {
        anyhow::bail!(
            "Tile {} lies outside the {}x{} map",
            position,
            dimensions.width,
            dimensions.height
        );
    }
    tiles.insert(position, StaticTile::new(terrain));
    Ok(())
}
