use super::error::CaptureError;
use crate::config::GameConfig;
use crate::engine::TurnContext;
use crate::env::{GameEvent, MapOracle};
use crate::nav::{CostField, find_path};
use crate::state::{
    BehaviorState, CaptureLink, EntityId, GameState, METER_MAX, Position, SkillKind,
};

/// Result of a cast that reached an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastOutcome {
    Hooked { actor: EntityId, hooked: i32 },
    GotAway { actor: EntityId },
}

/// Cells the line crosses from `origin` to `target`, origin excluded.
///
/// The line follows the static shortest path, ignoring occupants.
pub fn line_path(
    origin: Position,
    target: Position,
    map: &dyn MapOracle,
    config: &GameConfig,
) -> Vec<Position> {
    find_path(origin, target, &CostField::static_walkability(map), config)
}

/// Closest living non-player actor inside the field of view.
///
/// Ties go to the lower id.
pub fn nearest_visible_actor(
    state: &GameState,
    map: &dyn MapOracle,
    from: Position,
) -> Option<EntityId> {
    state
        .entities
        .npcs
        .iter()
        .filter(|actor| actor.is_alive() && map.is_visible(actor.position))
        .min_by_key(|actor| (from.chebyshev(actor.position), actor.id))
        .map(|actor| actor.id)
}

/// Casts `angler`'s line toward `target` and tries to hook the first actor
/// along it.
///
/// ```text
/// level     = CastLine skill level
/// threshold = difficulty - level - fatigue
/// success   = roll(0..=100) >= threshold and roll != 0
/// hooked    = clamp(roll - threshold + level * 1.7, 0, 100)
/// ```
///
/// # Errors
///
/// A line already out, a target outside the field of view, or a cast that
/// crosses nobody is rejected before any roll.
pub fn cast_line(
    angler: EntityId,
    target: Position,
    ctx: &mut TurnContext<'_>,
) -> Result<CastOutcome, CaptureError> {
    if let Some(link) = ctx.state.capture {
        return Err(CaptureError::AlreadyHooked(link.hooked));
    }
    if !ctx.map().is_visible(target) {
        return Err(CaptureError::NotVisible(target));
    }
    let caster = ctx
        .state
        .entities
        .actor(angler)
        .ok_or(CaptureError::AnglerNotFound(angler))?;
    let level = caster.loadout.skill_level(SkillKind::CastLine) as i32;

    let victim = line_path(caster.position, target, ctx.map(), ctx.config())
        .into_iter()
        .find_map(|cell| {
            ctx.state
                .entities
                .actor_at(cell)
                .filter(|actor| actor.id != angler)
                .map(|actor| actor.id)
        })
        .ok_or(CaptureError::NothingToHook)?;

    let roll = ctx.rng.percent();
    let bonus = ctx.config().hook_bonus_per_level;
    let actor = ctx
        .state
        .entities
        .actor_mut(victim)
        .ok_or(CaptureError::LinkBroken(victim))?;
    let threshold = actor.stats.difficulty - level - actor.stats.fatigue();

    if roll < threshold || roll == 0 {
        ctx.events.emit(GameEvent::GotAway {
            actor: victim,
            name: actor.name.clone(),
        });
        return Ok(CastOutcome::GotAway { actor: victim });
    }

    let value = ((roll - threshold) as f32 + level as f32 * bonus) as i32;
    actor.stats.set_hooked(value.min(METER_MAX));

    let resting = match actor.behavior.take() {
        Some(BehaviorState::Scared(scared)) => {
            actor.stats.difficulty = scared.saved_difficulty;
            actor.color = scared.saved_color;
            *scared.previous
        }
        Some(other) => other,
        None => BehaviorState::Idle,
    };
    actor.behavior = Some(BehaviorState::hooked(resting));
    let hooked = actor.stats.hooked();
    ctx.events.emit(GameEvent::Hooked {
        actor: victim,
        name: actor.name.clone(),
    });
    ctx.state.capture = Some(CaptureLink::new(angler, victim));

    Ok(CastOutcome::Hooked {
        actor: victim,
        hooked,
    })
}
