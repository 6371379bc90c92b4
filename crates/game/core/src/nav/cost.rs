use crate::config::GameConfig;
use crate::env::{MapDimensions, MapOracle};
use crate::state::{EntitiesState, Position};

/// Per-tile traversal costs for one path query.
///
/// `None` marks an impassable tile. Walkable tiles cost `1` plus
/// `occupancy_penalty` for each blocking occupant, so an occupied tile stays
/// finite and distinguishable from a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostField {
    dimensions: MapDimensions,
    costs: Vec<Option<u32>>,
}

impl CostField {
    /// Base cost of a free walkable tile.
    pub const BASE_COST: u32 = 1;

    /// Walkability-only field, without occupancy penalties.
    pub fn static_walkability(map: &dyn MapOracle) -> Self {
        let dimensions = map.dimensions();
        let costs = (0..dimensions.area())
            .map(|index| {
                map.is_walkable(dimensions.position(index))
                    .then_some(Self::BASE_COST)
            })
            .collect();
        Self { dimensions, costs }
    }

    /// Builds the field for a query starting at `origin`.
    ///
    /// Every blocking actor adds `config.occupancy_penalty` to its tile,
    /// except an actor standing on `origin` (the one asking for the path).
    pub fn build(
        map: &dyn MapOracle,
        entities: &EntitiesState,
        origin: Position,
        config: &GameConfig,
    ) -> Self {
        let mut field = Self::static_walkability(map);
        for actor in entities.iter() {
            if !actor.blocks_movement || actor.position == origin {
                continue;
            }
            field.add_penalty(actor.position, config.occupancy_penalty);
        }
        field
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    /// Cost of entering `position`; `None` if impassable or out of bounds.
    pub fn cost(&self, position: Position) -> Option<u32> {
        self.dimensions
            .index(position)
            .and_then(|index| self.costs[index])
    }

    pub fn is_passable(&self, position: Position) -> bool {
        self.cost(position).is_some()
    }

    fn add_penalty(&mut self, position: Position, penalty: u32) {
        if let Some(index) = self.dimensions.index(position)
            && let Some(cost) = self.costs[index].as_mut()
        {
            *cost = cost.saturating_add(penalty).min(u32::MAX - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{StaticTile, TerrainKind};
    use crate::state::{ActorState, BehaviorState, EntityId, FighterStats};

    struct Strip;

    impl MapOracle for Strip {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(4, 1)
        }

        fn tile(&self, position: Position) -> Option<StaticTile> {
            self.contains(position).then(|| {
                StaticTile::new(if position.x == 3 {
                    TerrainKind::Wall
                } else {
                    TerrainKind::Floor
                })
            })
        }

        fn is_visible(&self, _position: Position) -> bool {
            true
        }
    }

    fn actor(id: u32, x: i32) -> ActorState {
        ActorState::new(
            EntityId(id),
            "goldfish",
            "Goldfish",
            Position::new(x, 0),
            FighterStats::default(),
            BehaviorState::Neutral,
        )
    }

    #[test]
    fn occupants_add_penalty_except_origin() {
        let mut entities = EntitiesState::new(actor(0, 0));
        entities.spawn(actor(1, 1)).unwrap();
        entities.spawn(actor(2, 1)).unwrap();

        let field = CostField::build(&Strip, &entities, Position::new(0, 0), &GameConfig::new());

        assert_eq!(field.cost(Position::new(0, 0)), Some(1));
        assert_eq!(field.cost(Position::new(1, 0)), Some(21));
        assert_eq!(field.cost(Position::new(2, 0)), Some(1));
        assert_eq!(field.cost(Position::new(3, 0)), None);
        assert_eq!(field.cost(Position::new(9, 0)), None);
    }

    #[test]
    fn dead_actors_add_nothing() {
        let mut entities = EntitiesState::new(actor(0, 0));
        let mut corpse = actor(1, 2);
        corpse.die();
        entities.spawn(corpse).unwrap();

        let field = CostField::build(&Strip, &entities, Position::new(0, 0), &GameConfig::new());
        assert_eq!(field.cost(Position::new(2, 0)), Some(1));
    }
}
