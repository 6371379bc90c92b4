use super::error::CaptureError;
use super::{release_line, strain};
use crate::ai::reel_toward;
use crate::engine::TurnContext;
use crate::env::GameEvent;
use crate::state::{CaptureLink, EntityId, Position, SkillKind};

/// Result of one reel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReelOutcome {
    /// The actor was landed and left play.
    Caught { actor: EntityId },
    /// The line came in; `moved` is false when the pull step was blocked.
    Reeled { actor: EntityId, moved: bool },
    /// The actor held. `escaped` when the pull tore it free.
    Resisted { actor: EntityId, escaped: bool },
}

/// Result of one exhaust.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExhaustOutcome {
    Tired { actor: EntityId, fatigue: i32 },
    FoughtBack { actor: EntityId, escaped: bool },
    HookSetDeeper { actor: EntityId, hooked: i32 },
}

/// Validates that `angler` holds the line and returns it with the hooked
/// actor's position.
fn held_line(
    angler: EntityId,
    ctx: &TurnContext<'_>,
) -> Result<(CaptureLink, Position, Position), CaptureError> {
    let link = ctx.state.capture.ok_or(CaptureError::NoLine)?;
    if link.hooker != angler {
        return Err(CaptureError::NotYourLine(link.hooker));
    }
    let hooker = ctx
        .state
        .entities
        .actor(angler)
        .ok_or(CaptureError::AnglerNotFound(angler))?;
    let hooked = ctx
        .state
        .entities
        .actor(link.hooked)
        .ok_or(CaptureError::LinkBroken(link.hooked))?;
    Ok((link, hooker.position, hooked.position))
}

fn skill_level(angler: EntityId, skill: SkillKind, ctx: &TurnContext<'_>) -> i32 {
    ctx.state
        .entities
        .actor(angler)
        .map_or(SkillKind::BASE_LEVEL, |actor| actor.loadout.skill_level(skill)) as i32
}

/// Reels the line in.
///
/// ```text
/// success = roll(0..=100) < difficulty + 2 * level and roll != 0
/// ```
///
/// On success an adjacent actor is landed, a distant one is pulled one
/// step closer. Otherwise it resists and strains against the hook.
pub fn reel(angler: EntityId, ctx: &mut TurnContext<'_>) -> Result<ReelOutcome, CaptureError> {
    let (link, angler_at, fish_at) = held_line(angler, ctx)?;
    let level = skill_level(angler, SkillKind::Reel, ctx);
    let difficulty = ctx
        .state
        .entities
        .actor(link.hooked)
        .map_or(0, |actor| actor.stats.difficulty);

    let roll = ctx.rng.percent();
    if roll == 0 || roll >= difficulty + 2 * level {
        ctx.emit(GameEvent::Resisted { actor: link.hooked });
        let escaped = strain(link.hooked, ctx);
        return Ok(ReelOutcome::Resisted {
            actor: link.hooked,
            escaped,
        });
    }

    if angler_at.chebyshev(fish_at) == 1 {
        land(link, ctx)?;
        return Ok(ReelOutcome::Caught { actor: link.hooked });
    }

    ctx.emit(GameEvent::LineReeled);
    let moved = reel_toward(link.hooked, ctx).is_ok();
    Ok(ReelOutcome::Reeled {
        actor: link.hooked,
        moved,
    })
}

/// Removes the hooked actor from play into the caught collection.
fn land(link: CaptureLink, ctx: &mut TurnContext<'_>) -> Result<(), CaptureError> {
    let mut actor = ctx
        .state
        .entities
        .remove(link.hooked)
        .map_err(|_| CaptureError::LinkBroken(link.hooked))?;
    actor.behavior = None;
    ctx.state.capture = None;
    ctx.emit(GameEvent::Caught {
        actor: actor.id,
        name: actor.name.clone(),
    });
    ctx.state.caught.push(actor);
    Ok(())
}

/// Plays the line to tire the hooked actor out.
///
/// Fatigue rises by `roll(1, 5) * level`. Then a percentile roll may make
/// the actor fight back (strain) or set the hook deeper
/// (`hooked += roll(1, 5) * level`).
pub fn exhaust(
    angler: EntityId,
    ctx: &mut TurnContext<'_>,
) -> Result<ExhaustOutcome, CaptureError> {
    let (link, _, _) = held_line(angler, ctx)?;
    let level = skill_level(angler, SkillKind::Exhaust, ctx);
    let config = ctx.config();
    let (low, high) = config.exhaust_fatigue_per_level;

    let gain = ctx.rng.range(low, high).saturating_mul(level);
    let fatigue = match ctx.state.entities.actor_mut(link.hooked) {
        Some(actor) => {
            actor.stats.add_fatigue(gain);
            actor.stats.fatigue()
        }
        None => return Err(CaptureError::LinkBroken(link.hooked)),
    };
    ctx.emit(GameEvent::Exhausted {
        actor: link.hooked,
        fatigue,
    });

    let roll = ctx.rng.percent();
    if roll < config.exhaust_fight_back_percent {
        ctx.emit(GameEvent::FoughtBack { actor: link.hooked });
        let escaped = strain(link.hooked, ctx);
        return Ok(ExhaustOutcome::FoughtBack {
            actor: link.hooked,
            escaped,
        });
    }
    if roll < config.exhaust_fight_back_percent + config.exhaust_improve_percent {
        let boost = ctx.rng.range(low, high).saturating_mul(level);
        let hooked = ctx
            .state
            .entities
            .actor_mut(link.hooked)
            .map_or(0, |actor| actor.stats.adjust_hooked(boost));
        ctx.emit(GameEvent::HookSetDeeper { actor: link.hooked });
        return Ok(ExhaustOutcome::HookSetDeeper {
            actor: link.hooked,
            hooked,
        });
    }

    Ok(ExhaustOutcome::Tired {
        actor: link.hooked,
        fatigue,
    })
}

/// Lets go of the line; the actor returns to its resting behavior.
pub fn unhook(angler: EntityId, ctx: &mut TurnContext<'_>) -> Result<EntityId, CaptureError> {
    let link = ctx.state.capture.ok_or(CaptureError::NoLine)?;
    if link.hooker != angler {
        return Err(CaptureError::NotYourLine(link.hooker));
    }
    release_line(ctx.state);
    ctx.emit(GameEvent::Released { actor: link.hooked });
    Ok(link.hooked)
}
