//! Single-player session: owns the world and advances it one turn at a time.
//!
//! A turn is one player action followed by one pass over the NPCs. The
//! field of view is refreshed around the player before the action (hostile
//! actors only pursue what is visible) and again afterwards for frontends.

use angler_content::{ContentFactory, Scenario};
use angler_core::capture::{self, CaptureStatus};
use angler_core::{
    ActorState, EntityId, Env, GameConfig, GameEngine, GameError, GameEvent, GameState, PcgRng,
    PlayerAction, TurnReport,
};

use crate::error::{Result, RuntimeError};
use crate::events::TracingSink;
use crate::oracle::{GridMap, seeded_rng};

/// Running game: state, map, randomness and the narrated log.
pub struct Session {
    map: GridMap,
    config: GameConfig,
    state: GameState,
    rng: PcgRng,
    seed: u64,
    log: Vec<GameEvent>,
}

impl Session {
    /// Starts a session from a spawned scenario with a fresh random seed.
    pub fn new(scenario: Scenario, config: GameConfig) -> Self {
        let (rng, seed) = seeded_rng(None);
        Self::assemble(scenario, config, rng, seed)
    }

    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    fn assemble(scenario: Scenario, config: GameConfig, rng: PcgRng, seed: u64) -> Self {
        let mut session = Self {
            map: GridMap::new(&scenario.layout),
            config,
            state: scenario.state,
            rng,
            seed,
            log: Vec::new(),
        };
        session.refresh_fov();
        session
    }

    /// Executes one player action and the NPC pass that follows it.
    ///
    /// # Errors
    ///
    /// Rejected actions come back as [`RuntimeError::Execute`] and leave the
    /// turn counter untouched.
    pub fn step(&mut self, action: PlayerAction) -> Result<TurnReport> {
        let span = tracing::info_span!("turn", number = self.state.turn.number + 1);
        let _guard = span.enter();

        self.refresh_fov();
        let env = Env::new(&self.map, &self.config);
        let mut sink = TracingSink::new(&mut self.log);
        let result =
            GameEngine::new(&mut self.state).execute(env, &mut self.rng, &mut sink, action);

        let report = match result {
            Ok(report) => report,
            Err(error) => {
                tracing::debug!(
                    action = action.as_str(),
                    severity = error.severity().as_str(),
                    code = error.error_code(),
                    "player action rejected: {}",
                    error
                );
                return Err(RuntimeError::Execute(error));
            }
        };

        tracing::debug!(action = action.as_str(), outcome = ?report.outcome, "player acted");
        for actor in &report.pass.acted {
            tracing::debug!(%actor, "actor acted");
        }
        for skipped in &report.pass.skipped {
            if skipped.is_internal() {
                tracing::warn!(
                    actor = %skipped.actor,
                    severity = skipped.error.severity().as_str(),
                    code = skipped.error.error_code(),
                    "actor turn failed: {}",
                    skipped.error
                );
            } else {
                tracing::debug!(
                    actor = %skipped.actor,
                    severity = skipped.error.severity().as_str(),
                    code = skipped.error.error_code(),
                    "actor turn skipped: {}",
                    skipped.error
                );
            }
        }
        for actor in &report.caught {
            tracing::info!(%actor, total = self.state.caught.len(), "actor caught");
        }
        if report.pass.player_died {
            tracing::info!(turn = report.turn, "player died");
        }

        self.refresh_fov();
        Ok(report)
    }

    fn refresh_fov(&mut self) {
        let origin = self.state.entities.player().position;
        self.map.compute_fov(origin, self.config.fov_radius);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the session's generator started from, for replays.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Actors landed so far, in catch order.
    pub fn caught(&self) -> &[ActorState] {
        &self.state.caught
    }

    /// Every event narrated so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.log
    }

    /// The narrated log as plain text.
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.log.iter().map(ToString::to_string)
    }

    /// What is on the line right now.
    pub fn capture_status(&self) -> Option<CaptureStatus> {
        capture::status(&self.state)
    }

    /// Closest living actor the player can see.
    pub fn nearest_target(&self) -> Option<EntityId> {
        let origin = self.state.entities.player().position;
        capture::nearest_visible_actor(&self.state, &self.map, origin)
    }

    pub fn is_over(&self) -> bool {
        !self.state.entities.player().is_alive()
    }
}

/// Builder for [`Session`] with flexible configuration.
pub struct SessionBuilder {
    config: GameConfig,
    scenario: Option<Scenario>,
    seed: Option<u64>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            scenario: None,
            seed: None,
        }
    }

    /// Override game configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the world to play in
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Fix the RNG seed for a reproducible run
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Loads config and the named scenario from a content directory.
    pub fn content(mut self, factory: &ContentFactory, scenario: &str) -> Result<Self> {
        self.config = factory.load_config()?;
        self.scenario = Some(factory.spawn_scenario(scenario)?);
        Ok(self)
    }

    pub fn build(self) -> Result<Session> {
        let scenario = self.scenario.ok_or(RuntimeError::MissingScenario)?;
        let (rng, seed) = seeded_rng(self.seed);
        tracing::debug!(seed, "session started");
        Ok(Session::assemble(scenario, self.config, rng, seed))
    }
}
