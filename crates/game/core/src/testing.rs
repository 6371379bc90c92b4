//! Shared fixtures for unit tests.

use std::collections::BTreeSet;

use crate::config::GameConfig;
use crate::engine::TurnContext;
use crate::env::{Env, GameEvent, MapDimensions, MapOracle, ScriptedRng, StaticTile, TerrainKind};
use crate::state::{
    ActorState, BehaviorState, CaptureLink, Color, EntityId, FighterStats, GameState, Gear,
    Position,
};

/// Floor-only map with optional walls and hidden tiles.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestMap {
    dimensions: MapDimensions,
    walls: BTreeSet<Position>,
    hidden: BTreeSet<Position>,
}

impl TestMap {
    pub(crate) fn open(width: u32, height: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            ..Self::default()
        }
    }

    pub(crate) fn wall(&mut self, position: Position) {
        self.walls.insert(position);
    }

    pub(crate) fn hide(&mut self, position: Position) {
        self.hidden.insert(position);
    }

    pub(crate) fn reveal_all(&mut self) {
        self.hidden.clear();
    }
}

impl MapOracle for TestMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        if !self.contains(position) {
            return None;
        }
        Some(StaticTile::new(if self.walls.contains(&position) {
            TerrainKind::Wall
        } else {
            TerrainKind::Floor
        }))
    }

    fn is_visible(&self, position: Position) -> bool {
        self.contains(position) && !self.hidden.contains(&position)
    }
}

/// A world with the player at (2, 2), scripted rolls and a recording sink.
pub(crate) struct Harness {
    pub(crate) state: GameState,
    pub(crate) map: TestMap,
    pub(crate) config: GameConfig,
    pub(crate) rng: ScriptedRng,
    pub(crate) events: Vec<GameEvent>,
}

impl Harness {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        let player = ActorState::new(
            EntityId::PLAYER,
            "player",
            "Player",
            Position::new(2, 2),
            FighterStats::new()
                .with_hp(30)
                .with_defense(2)
                .with_damage(1, 2)
                .with_strength(5),
            BehaviorState::Idle,
        );
        Self {
            state: GameState::new(player),
            map: TestMap::open(width, height),
            config: GameConfig::new(),
            rng: ScriptedRng::default(),
            events: Vec::new(),
        }
    }

    /// Spawns a neutral goldfish and returns its id.
    pub(crate) fn spawn_fish(&mut self, x: i32, y: i32, difficulty: i32) -> EntityId {
        let id = self.state.entities.next_id();
        let fish = ActorState::new(
            id,
            "goldfish",
            "Goldfish",
            Position::new(x, y),
            FighterStats::new()
                .with_hp(8)
                .with_damage(1, 8)
                .with_strength(5)
                .with_difficulty(difficulty)
                .with_avoidance(60),
            BehaviorState::Neutral,
        )
        .with_color(Color::GOLD);
        self.state
            .entities
            .spawn(fish)
            .expect("fresh id is never taken");
        id
    }

    pub(crate) fn equip(&mut self, gear: Gear) {
        self.state.entities.player_mut().loadout.equip(gear);
    }

    /// Puts `id` on the player's line with the given hooked value.
    pub(crate) fn hook(&mut self, id: EntityId, hooked: i32) {
        let actor = self.state.entities.actor_mut(id).expect("actor exists");
        let previous = actor.behavior.take().unwrap_or(BehaviorState::Idle);
        actor.behavior = Some(BehaviorState::hooked(previous));
        actor.stats.set_hooked(hooked);
        self.state.capture = Some(CaptureLink::new(EntityId::PLAYER, id));
    }

    pub(crate) fn ctx(&mut self) -> TurnContext<'_> {
        TurnContext::new(
            &mut self.state,
            Env::new(&self.map, &self.config),
            &mut self.rng,
            &mut self.events,
        )
    }
}
