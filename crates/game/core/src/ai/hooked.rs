use crate::action::{ActionError, move_to, step};
use crate::capture::slip_hook;
use crate::engine::TurnContext;
use crate::nav::{CostField, find_path};
use crate::state::{BehaviorState, EntityId, HookedState, METER_MAX};

/// One turn on the line.
///
/// ```text
/// target  = 100 - (difficulty - fatigue)
/// struggle = roll(0..=100) >= target or roll == 100
/// ```
///
/// Fatigue rises every turn. A struggling actor also loses
/// `strength * roll(1, 2)` hooked and tries to swim straight away from the
/// angler; at 0 hooked it slips free and turns `Scared`.
pub(super) fn act(
    id: EntityId,
    state: HookedState,
    ctx: &mut TurnContext<'_>,
) -> (BehaviorState, Result<(), ActionError>) {
    let Some(threat) = ctx
        .state
        .capture
        .filter(|link| link.hooked == id)
        .and_then(|link| ctx.state.entities.actor(link.hooker))
        .map(|hooker| hooker.position)
    else {
        return (*state.previous, Ok(()));
    };

    let roll = ctx.rng.percent();
    let (low, high) = ctx.config().struggle_fatigue;
    let gain = ctx.rng.range(low, high);
    let Some(actor) = ctx.state.entities.actor_mut(id) else {
        return (*state.previous, Err(ActionError::ActorNotFound(id)));
    };
    let target = METER_MAX - (actor.stats.difficulty - actor.stats.fatigue());
    actor.stats.add_fatigue(gain);
    if roll < target && roll != METER_MAX {
        return (BehaviorState::Hooked(state), Ok(()));
    }

    let strength = actor.stats.strength.max(0);
    let (dx, dy) = actor.position.step_away_from(threat);
    let (low, high) = ctx.config().struggle_strength_factor;
    let pull = strength.saturating_mul(ctx.rng.range(low, high));
    let left = ctx
        .state
        .entities
        .actor_mut(id)
        .map_or(0, |actor| actor.stats.adjust_hooked(-pull));

    let next = if left == 0 {
        slip_hook(id, *state.previous, ctx)
    } else {
        BehaviorState::Hooked(state)
    };
    let moved = if (dx, dy) == (0, 0) {
        Ok(())
    } else {
        step(id, dx, dy, ctx).map(|_| ())
    };
    (next, moved)
}

/// Pulls the hooked actor `id` one step toward its angler.
///
/// Does nothing without a line or a path.
pub fn reel_toward(id: EntityId, ctx: &mut TurnContext<'_>) -> Result<(), ActionError> {
    let Some(link) = ctx.state.capture.filter(|link| link.hooked == id) else {
        return Ok(());
    };
    let from = ctx
        .state
        .entities
        .actor(id)
        .ok_or(ActionError::ActorNotFound(id))?
        .position;
    let to = ctx
        .state
        .entities
        .actor(link.hooker)
        .ok_or(ActionError::ActorNotFound(link.hooker))?
        .position;

    let field = CostField::build(ctx.map(), &ctx.state.entities, from, ctx.config());
    match find_path(from, to, &field, ctx.config()).first() {
        Some(&next) if next != to => move_to(id, next, ctx).map(|_| ()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::ai;
    use crate::state::{BehaviorState, Color, METER_MAX, Position};
    use crate::testing::Harness;
    use proptest::prelude::*;

    #[test]
    fn holding_line_only_tires_the_fish() {
        let mut harness = Harness::new(20, 20);
        let fish = harness.spawn_fish(6, 2, 60);
        harness.hook(fish, 50);
        // target = 100 - 60 = 40: roll 39 holds, fatigue +7.
        harness.rng.push(39);
        harness.rng.push(7);

        ai::act(fish, &mut harness.ctx()).unwrap();

        let actor = harness.state.entities.actor(fish).unwrap();
        assert_eq!(actor.stats.fatigue(), 7);
        assert_eq!(actor.stats.hooked(), 50);
        assert_eq!(actor.position, Position::new(6, 2));
        assert!(actor.behavior.as_ref().unwrap().is_hooked());
    }

    #[test]
    fn struggling_fish_pulls_away() {
        let mut harness = Harness::new(20, 20);
        let fish = harness.spawn_fish(6, 4, 60);
        harness.state.entities.actor_mut(fish).unwrap().stats.strength = 5;
        harness.hook(fish, 50);
        harness.rng.push(40);
        harness.rng.push(5);
        harness.rng.push(2);

        ai::act(fish, &mut harness.ctx()).unwrap();

        let actor = harness.state.entities.actor(fish).unwrap();
        assert_eq!(actor.stats.hooked(), 40);
        assert_eq!(actor.stats.fatigue(), 5);
        assert_eq!(actor.position, Position::new(7, 5));
        assert!(harness.state.capture_consistent());
    }

    #[test]
    fn struggling_free_turns_scared_without_stacking() {
        let mut harness = Harness::new(60, 10);
        let fish = harness.spawn_fish(6, 4, 60);
        harness.state.entities.actor_mut(fish).unwrap().stats.strength = 5;
        harness.state.entities.actor_mut(fish).unwrap().behavior =
            Some(BehaviorState::goldfish("great_goldfish"));
        harness.hook(fish, 5);
        harness.rng.push(100);
        harness.rng.push(5);
        harness.rng.push(1);
        harness.rng.push(55);
        harness.rng.push(4);

        ai::act(fish, &mut harness.ctx()).unwrap();

        assert!(harness.state.capture.is_none());
        let actor = harness.state.entities.actor(fish).unwrap();
        assert_eq!(actor.color, Color::ORANGE_RED);
        match actor.behavior.as_ref() {
            Some(BehaviorState::Scared(scared)) => {
                assert_eq!(*scared.previous, BehaviorState::goldfish("great_goldfish"));
                assert_eq!(scared.flee_target, Position::new(55, 4));
            }
            other => panic!("expected scared, got {other:?}"),
        }
        assert!(harness.state.capture_consistent());
        let text: Vec<String> = harness.events.iter().map(ToString::to_string).collect();
        assert!(text.contains(&"The Goldfish slips the hook!".to_string()));
        assert!(text.contains(&"You've frightened the Goldfish!".to_string()));
    }

    #[test]
    fn stale_hook_without_link_falls_back() {
        let mut harness = Harness::new(20, 20);
        let fish = harness.spawn_fish(6, 4, 60);
        harness.state.entities.actor_mut(fish).unwrap().behavior =
            Some(BehaviorState::hooked(BehaviorState::Neutral));

        ai::act(fish, &mut harness.ctx()).unwrap();
        assert_eq!(
            harness.state.entities.actor(fish).unwrap().behavior,
            Some(BehaviorState::Neutral)
        );
    }

    proptest! {
        #[test]
        fn hooked_turns_keep_meters_bounded(
            rolls in proptest::collection::vec(-20i32..150, 0..80),
            turns in 1usize..30,
        ) {
            let mut harness = Harness::new(40, 40);
            let fish = harness.spawn_fish(20, 20, 60);
            harness.state.entities.actor_mut(fish).unwrap().stats.strength = 7;
            harness.hook(fish, 60);
            for roll in rolls {
                harness.rng.push(roll);
            }
            for _ in 0..turns {
                let _ = ai::act(fish, &mut harness.ctx());
            }
            let actor = harness.state.entities.actor(fish).unwrap();
            prop_assert!((0..=METER_MAX).contains(&actor.stats.hooked()));
            prop_assert!((0..=METER_MAX).contains(&actor.stats.fatigue()));
            prop_assert!(harness.state.capture_consistent());
        }
    }
}
