//! Deterministic rules for a turn-based angling roguelike.
//!
//! `angler-core` decides what every non-player actor does each turn,
//! resolves melee, and runs the capture mini-game (hook, struggle, reel,
//! land or escape). It never renders, generates terrain or touches the
//! filesystem: the map, randomness and message log are injected through the
//! oracle traits in [`env`]. All turn processing flows through
//! [`engine::GameEngine`].
pub mod action;
pub mod ai;
pub mod capture;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod nav;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{ActionError, PlayerAction};
pub use capture::{CaptureError, CaptureStatus, CastOutcome, ExhaustOutcome, ReelOutcome};
pub use combat::{MeleeOutcome, resolve_melee};
pub use config::GameConfig;
pub use engine::{
    ActionOutcome, ExecuteError, GameEngine, PassReport, SkippedTurn, TurnContext, TurnReport,
    TurnScheduler,
};
pub use env::{
    Env, EventSink, GameEvent, MapDimensions, MapOracle, NullSink, PcgRng, RngOracle,
    ScriptedRng, StaticTile, TerrainKind,
};
pub use error::{ErrorSeverity, GameError};
pub use nav::{CostField, find_path};
pub use state::{
    ActorState, BehaviorState, CaptureLink, Color, DamageRange, Direction, EntitiesState,
    EntityId, FighterStats, GameState, Gear, GearSlot, Loadout, Position, SkillKind, TurnState,
};
