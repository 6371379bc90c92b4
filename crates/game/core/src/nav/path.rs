use std::cmp::Ordering;
use std::collections::BinaryHeap;

use arrayvec::ArrayVec;

use super::cost::CostField;
use crate::config::GameConfig;
use crate::env::MapDimensions;
use crate::state::{Direction, Position};

/// Node in the Dijkstra open set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Frontier {
    cost: u64,
    /// Push order; breaks cost ties so equal inputs give equal paths.
    seq: u64,
    index: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds the cheapest 8-connected path from `origin` to `destination`.
///
/// Entering a tile costs its field cost times `cardinal_cost` or
/// `diagonal_cost`. The result excludes `origin` and ends at `destination`.
/// It is empty when the two are equal or when no path exists.
pub fn find_path(
    origin: Position,
    destination: Position,
    field: &CostField,
    config: &GameConfig,
) -> Vec<Position> {
    let dimensions = field.dimensions();
    let (Some(start), Some(goal)) = (dimensions.index(origin), dimensions.index(destination))
    else {
        return Vec::new();
    };
    if start == goal || !field.is_passable(destination) {
        return Vec::new();
    }

    let mut best = vec![u64::MAX; dimensions.area()];
    let mut came_from: Vec<Option<usize>> = vec![None; dimensions.area()];
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    best[start] = 0;
    open.push(Frontier {
        cost: 0,
        seq,
        index: start,
    });

    while let Some(current) = open.pop() {
        if current.index == goal {
            return reconstruct(&came_from, dimensions, start, goal);
        }
        if current.cost > best[current.index] {
            continue;
        }

        let position = dimensions.position(current.index);
        for (neighbor, step) in neighbors(position, field, config) {
            let Some(index) = dimensions.index(neighbor) else {
                continue;
            };
            let tentative = current.cost + u64::from(step);
            if tentative < best[index] {
                best[index] = tentative;
                came_from[index] = Some(current.index);
                seq += 1;
                open.push(Frontier {
                    cost: tentative,
                    seq,
                    index,
                });
            }
        }
    }

    Vec::new()
}

/// Passable neighbors of `position` with their edge weights, in
/// [`Direction::ALL`] order.
fn neighbors(
    position: Position,
    field: &CostField,
    config: &GameConfig,
) -> ArrayVec<(Position, u32), 8> {
    let mut out = ArrayVec::new();
    for direction in Direction::ALL {
        let (dx, dy) = direction.delta();
        let neighbor = position.offset(dx, dy);
        let Some(cost) = field.cost(neighbor) else {
            continue;
        };
        let weight = if direction.is_diagonal() {
            config.diagonal_cost
        } else {
            config.cardinal_cost
        };
        out.push((neighbor, cost.saturating_mul(weight)));
    }
    out
}

fn reconstruct(
    came_from: &[Option<usize>],
    dimensions: MapDimensions,
    start: usize,
    goal: usize,
) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(dimensions.position(current));
        match came_from[current] {
            Some(previous) => current = previous,
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapOracle, StaticTile, TerrainKind};
    use crate::state::{ActorState, BehaviorState, EntitiesState, EntityId, FighterStats};
    use proptest::prelude::*;

    /// Open room with an optional wall column.
    struct Room {
        width: u32,
        height: u32,
        wall_x: Option<i32>,
        gap_y: Option<i32>,
    }

    impl Room {
        fn open(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                wall_x: None,
                gap_y: None,
            }
        }
    }

    impl MapOracle for Room {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(self.width, self.height)
        }

        fn tile(&self, position: Position) -> Option<StaticTile> {
            if !self.contains(position) {
                return None;
            }
            let wall = self.wall_x == Some(position.x) && self.gap_y != Some(position.y);
            Some(StaticTile::new(if wall {
                TerrainKind::Wall
            } else {
                TerrainKind::Floor
            }))
        }

        fn is_visible(&self, _position: Position) -> bool {
            true
        }
    }

    fn npc(id: u32, x: i32, y: i32) -> ActorState {
        ActorState::new(
            EntityId(id),
            "goldfish",
            "Goldfish",
            Position::new(x, y),
            FighterStats::default(),
            BehaviorState::Neutral,
        )
    }

    #[test]
    fn straight_line_prefers_cardinal_steps() {
        let field = CostField::static_walkability(&Room::open(6, 3));
        let path = find_path(
            Position::new(0, 1),
            Position::new(4, 1),
            &field,
            &GameConfig::new(),
        );
        assert_eq!(
            path,
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(3, 1),
                Position::new(4, 1)
            ]
        );
    }

    #[test]
    fn routes_through_the_only_gap() {
        let room = Room {
            width: 5,
            height: 5,
            wall_x: Some(2),
            gap_y: Some(4),
        };
        let field = CostField::static_walkability(&room);
        let path = find_path(
            Position::new(0, 0),
            Position::new(4, 0),
            &field,
            &GameConfig::new(),
        );
        assert!(path.contains(&Position::new(2, 4)));
        assert_eq!(path.last(), Some(&Position::new(4, 0)));
    }

    #[test]
    fn unreachable_destination_is_empty() {
        let room = Room {
            width: 5,
            height: 5,
            wall_x: Some(2),
            gap_y: None,
        };
        let field = CostField::static_walkability(&room);
        let config = GameConfig::new();
        assert!(find_path(Position::new(0, 0), Position::new(4, 4), &field, &config).is_empty());
        assert!(find_path(Position::new(0, 0), Position::new(2, 2), &field, &config).is_empty());
    }

    #[test]
    fn crowded_corridor_is_routed_around() {
        let room = Room::open(5, 3);
        let mut entities = EntitiesState::new(npc(0, 0, 1));
        entities.spawn(npc(1, 2, 1)).unwrap();
        let config = GameConfig::new();

        let field = CostField::build(&room, &entities, Position::new(0, 1), &config);
        let path = find_path(Position::new(0, 1), Position::new(4, 1), &field, &config);
        assert!(!path.contains(&Position::new(2, 1)));

        // With no penalty the crowd is ignored and the straight line wins.
        let lenient = GameConfig::new().with_occupancy_penalty(0);
        let field = CostField::build(&room, &entities, Position::new(0, 1), &lenient);
        let path = find_path(Position::new(0, 1), Position::new(4, 1), &field, &lenient);
        assert!(path.contains(&Position::new(2, 1)));
    }

    #[test]
    fn identical_inputs_give_identical_paths() {
        let field = CostField::static_walkability(&Room::open(8, 8));
        let config = GameConfig::new();
        let a = find_path(Position::new(0, 0), Position::new(5, 7), &field, &config);
        let b = find_path(Position::new(0, 0), Position::new(5, 7), &field, &config);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn origin_is_never_part_of_the_path(
            ox in 0i32..8, oy in 0i32..8, dx in 0i32..8, dy in 0i32..8,
        ) {
            let field = CostField::static_walkability(&Room::open(8, 8));
            let origin = Position::new(ox, oy);
            let destination = Position::new(dx, dy);
            let path = find_path(origin, destination, &field, &GameConfig::new());

            prop_assert!(!path.contains(&origin));
            if origin == destination {
                prop_assert!(path.is_empty());
            } else {
                prop_assert_eq!(path.last().copied(), Some(destination));
                prop_assert_eq!(path.len() as u32, origin.chebyshev(destination));
            }
        }
    }
}
