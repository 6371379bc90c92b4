//! Applying a melee exchange to the world.

use super::damage::roll_melee;
use crate::action::ActionError;
use crate::capture;
use crate::engine::TurnContext;
use crate::env::GameEvent;
use crate::state::EntityId;

/// What a melee exchange did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeOutcome {
    pub attacker: EntityId,
    pub defender: EntityId,
    pub damage: i32,
    pub empowered: bool,
    /// The defender dropped to 0 hp or below and is now dead.
    pub killed: bool,
}

/// Resolves one melee attack of `attacker` on `defender`.
///
/// Only the defender's hp and the attacker's empowered charges change. A
/// defender dropping to 0 hp dies; if it was on a line, the line is cleared
/// first.
///
/// # Errors
///
/// Fails if either actor is missing, or the defender is already dead.
pub fn resolve_melee(
    attacker: EntityId,
    defender: EntityId,
    ctx: &mut TurnContext<'_>,
) -> Result<MeleeOutcome, ActionError> {
    let target = ctx
        .state
        .entities
        .actor(defender)
        .ok_or(ActionError::TargetNotFound)?;
    if !target.is_alive() {
        return Err(ActionError::TargetNotFound);
    }
    let defense = target.stats.defense();
    let target_name = target.name.clone();

    let source = ctx
        .state
        .entities
        .actor_mut(attacker)
        .ok_or(ActionError::ActorNotFound(attacker))?;
    let empowered = source.stats.empowered_charges > 0;
    if empowered {
        source.stats.empowered_charges -= 1;
    }
    let range = source.attack_range();
    let attacker_name = source.name.clone();

    let roll = roll_melee(range, empowered, defense, ctx.rng);

    let mut killed = false;
    if roll.damage > 0
        && let Some(target) = ctx.state.entities.actor_mut(defender)
    {
        target.stats.hp -= roll.damage;
        killed = target.stats.hp <= 0;
    }

    ctx.emit(GameEvent::Attacked {
        attacker,
        attacker_name,
        target: defender,
        target_name: target_name.clone(),
        damage: roll.damage,
        empowered,
    });

    if killed {
        kill(defender, ctx);
        ctx.emit(GameEvent::Died {
            actor: defender,
            name: target_name,
        });
    }

    Ok(MeleeOutcome {
        attacker,
        defender,
        damage: roll.damage,
        empowered,
        killed,
    })
}

/// Removes `id` from the living, detaching any line it was part of.
fn kill(id: EntityId, ctx: &mut TurnContext<'_>) {
    if let Some(link) = ctx.state.capture {
        if link.hooked == id {
            ctx.state.capture = None;
        } else if link.hooker == id {
            capture::release_line(ctx.state);
        }
    }
    if let Some(actor) = ctx.state.entities.actor_mut(id) {
        actor.die();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{Env, MapDimensions, MapOracle, ScriptedRng, StaticTile, TerrainKind};
    use crate::state::{
        ActorState, BehaviorState, CaptureLink, DamageRange, FighterStats, GameState, Position,
    };

    struct Open;

    impl MapOracle for Open {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(10, 10)
        }

        fn tile(&self, position: Position) -> Option<StaticTile> {
            self.contains(position)
                .then_some(StaticTile::new(TerrainKind::Floor))
        }

        fn is_visible(&self, _position: Position) -> bool {
            true
        }
    }

    fn state() -> GameState {
        let player = ActorState::new(
            EntityId::PLAYER,
            "player",
            "Player",
            Position::new(1, 1),
            FighterStats::new().with_hp(30).with_defense(2),
            BehaviorState::Idle,
        )
        .with_weapon(DamageRange::new(1, 8));
        let mut state = GameState::new(player);
        let fish = ActorState::new(
            EntityId(1),
            "goldfish",
            "Goldfish",
            Position::new(2, 1),
            FighterStats::new().with_hp(5),
            BehaviorState::Neutral,
        );
        state.entities.spawn(fish).unwrap();
        state
    }

    #[test]
    fn damage_is_subtracted_and_narrated() {
        let mut state = state();
        let config = GameConfig::new();
        let mut rng = ScriptedRng::new([3, 0]);
        let mut events = Vec::new();
        let mut ctx = TurnContext::new(&mut state, Env::new(&Open, &config), &mut rng, &mut events);

        let outcome = resolve_melee(EntityId::PLAYER, EntityId(1), &mut ctx).unwrap();
        assert_eq!(outcome.damage, 3);
        assert!(!outcome.killed);
        assert_eq!(state.entities.actor(EntityId(1)).unwrap().stats.hp, 2);
        assert_eq!(
            events[0].to_string(),
            "Player attacks Goldfish for 3 hit points."
        );
    }

    #[test]
    fn empowered_charge_is_spent_once() {
        let mut state = state();
        state.entities.player_mut().stats.empowered_charges = 1;
        let config = GameConfig::new();
        let mut rng = ScriptedRng::new([1, 0, 1, 0]);
        let mut events = Vec::new();
        let mut ctx = TurnContext::new(&mut state, Env::new(&Open, &config), &mut rng, &mut events);

        let first = resolve_melee(EntityId::PLAYER, EntityId(1), &mut ctx).unwrap();
        let second = resolve_melee(EntityId::PLAYER, EntityId(1), &mut ctx).unwrap();
        assert_eq!((first.damage, first.empowered), (2, true));
        assert_eq!((second.damage, second.empowered), (1, false));
        assert_eq!(state.entities.player().stats.empowered_charges, 0);
    }

    #[test]
    fn killing_a_hooked_actor_clears_the_line() {
        let mut state = state();
        state.capture = Some(CaptureLink::new(EntityId::PLAYER, EntityId(1)));
        state.entities.actor_mut(EntityId(1)).unwrap().behavior =
            Some(BehaviorState::hooked(BehaviorState::Neutral));
        let config = GameConfig::new();
        let mut rng = ScriptedRng::new([8, 0]);
        let mut events = Vec::new();
        let mut ctx = TurnContext::new(&mut state, Env::new(&Open, &config), &mut rng, &mut events);

        let outcome = resolve_melee(EntityId::PLAYER, EntityId(1), &mut ctx).unwrap();
        assert!(outcome.killed);
        assert!(state.capture.is_none());
        let fish = state.entities.actor(EntityId(1)).unwrap();
        assert!(!fish.is_alive());
        assert!(!fish.blocks_movement);
        assert_eq!(events.last().unwrap().to_string(), "Goldfish is dead!");
        assert!(state.capture_consistent());
    }

    #[test]
    fn zero_damage_reports_no_damage() {
        let mut state = state();
        let config = GameConfig::new();
        let mut rng = ScriptedRng::new([1, 2]);
        let mut events = Vec::new();
        let mut ctx = TurnContext::new(&mut state, Env::new(&Open, &config), &mut rng, &mut events);

        let outcome = resolve_melee(EntityId(1), EntityId::PLAYER, &mut ctx).unwrap();
        assert_eq!(outcome.damage, 0);
        assert_eq!(state.entities.player().stats.hp, 30);
        assert_eq!(
            events[0].to_string(),
            "Goldfish attacks Player but does no damage."
        );
    }
}
