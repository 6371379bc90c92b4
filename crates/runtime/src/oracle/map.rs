//! Grid map served through [`angler_core::MapOracle`].
use angler_content::MapLayout;
use angler_core::{MapDimensions, MapOracle, Position, StaticTile, TerrainKind};

/// Static tiles plus the player's current field of view.
///
/// Tiles are stored row-major; positions the layout leaves undefined are
/// `Void`.
#[derive(Clone, Debug)]
pub struct GridMap {
    dimensions: MapDimensions,
    tiles: Vec<StaticTile>,
    visible: Vec<bool>,
}

impl GridMap {
    pub fn new(layout: &MapLayout) -> Self {
        let dimensions = layout.dimensions;
        let tiles = (0..dimensions.area())
            .map(|index| {
                layout
                    .tiles
                    .get(&dimensions.position(index))
                    .copied()
                    .unwrap_or(StaticTile::new(TerrainKind::Void))
            })
            .collect();
        Self {
            dimensions,
            tiles,
            visible: vec![false; dimensions.area()],
        }
    }

    /// Creates an all-floor map with nothing visible.
    pub fn open(width: u32, height: u32) -> Self {
        let dimensions = MapDimensions::new(width, height);
        Self {
            dimensions,
            tiles: vec![StaticTile::new(TerrainKind::Floor); dimensions.area()],
            visible: vec![false; dimensions.area()],
        }
    }

    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(index) = self.dimensions.index(position) {
            self.tiles[index] = StaticTile::new(terrain);
        }
    }

    fn is_transparent(&self, position: Position) -> bool {
        self.tile(position).is_some_and(StaticTile::is_transparent)
    }

    /// True when no opaque tile lies strictly between `from` and `to`.
    pub fn has_line_of_sight(&self, from: Position, to: Position) -> bool {
        let line = bresenham(from, to);
        line.iter()
            .skip(1)
            .take(line.len().saturating_sub(2))
            .all(|position| self.is_transparent(*position))
    }

    /// Recomputes visibility from `origin` within a circular `radius`.
    ///
    /// Returns the number of visible tiles.
    pub fn compute_fov(&mut self, origin: Position, radius: u32) -> usize {
        self.visible.fill(false);
        if !self.dimensions.contains(origin) {
            return 0;
        }

        let r = radius as i32;
        let mut count = 0;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let target = origin.offset(dx, dy);
                let Some(index) = self.dimensions.index(target) else {
                    continue;
                };
                if self.has_line_of_sight(origin, target) {
                    self.visible[index] = true;
                    count += 1;
                }
            }
        }
        count
    }

    /// Marks every tile visible.
    pub fn reveal_all(&mut self) {
        self.visible.fill(true);
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.dimensions
            .index(position)
            .map(|index| self.tiles[index])
    }

    fn is_visible(&self, position: Position) -> bool {
        self.dimensions
            .index(position)
            .is_some_and(|index| self.visible[index])
    }
}

/// Cells on the Bresenham line from `from` to `to`, both ends included.
fn bresenham(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut current = from;
    let mut error = dx + dy;
    loop {
        cells.push(current);
        if current == to {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            current.x += sx;
        }
        if doubled <= dx {
            error += dx;
            current.y += sy;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_includes_both_ends() {
        let line = bresenham(Position::new(0, 0), Position::new(4, 2));
        assert_eq!(line.first(), Some(&Position::new(0, 0)));
        assert_eq!(line.last(), Some(&Position::new(4, 2)));
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn walls_block_sight_but_are_seen() {
        let mut map = GridMap::open(10, 3);
        map.set_terrain(Position::new(3, 1), TerrainKind::Wall);

        map.compute_fov(Position::new(1, 1), 8);
        assert!(map.is_visible(Position::new(3, 1)));
        assert!(!map.is_visible(Position::new(6, 1)));
        assert!(map.is_visible(Position::new(1, 1)));
    }

    #[test]
    fn deep_water_is_transparent() {
        let mut map = GridMap::open(10, 1);
        map.set_terrain(Position::new(2, 0), TerrainKind::Deep);

        map.compute_fov(Position::new(0, 0), 5);
        assert!(map.is_visible(Position::new(5, 0)));
        assert!(!map.is_visible(Position::new(6, 0)));
        assert!(!map.is_walkable(Position::new(2, 0)));
    }

    #[test]
    fn undefined_layout_tiles_are_void() {
        let layout = MapLayout {
            dimensions: MapDimensions::new(2, 1),
            tiles: [(Position::new(0, 0), StaticTile::new(TerrainKind::Floor))]
                .into_iter()
                .collect(),
        };
        let map = GridMap::new(&layout);
        assert!(map.is_walkable(Position::new(0, 0)));
        assert_eq!(
            map.tile(Position::new(1, 0)).map(StaticTile::terrain),
            Some(TerrainKind::Void)
        );
        assert!(!map.is_visible(Position::new(0, 0)));
    }
}
