use crate::action::{ActionError, move_to};
use crate::combat::resolve_melee;
use crate::engine::TurnContext;
use crate::nav::{CostField, find_path};
use crate::state::{EntityId, HostileState};

/// Chases and attacks the player.
///
/// While the actor stands in view it attacks when adjacent, otherwise it
/// replans toward the player. Out of view it keeps following the cached
/// path, and waits once that runs out or no longer starts next to it.
pub(super) fn act(
    id: EntityId,
    state: &mut HostileState,
    ctx: &mut TurnContext<'_>,
) -> Result<(), ActionError> {
    let position = ctx
        .state
        .entities
        .actor(id)
        .ok_or(ActionError::ActorNotFound(id))?
        .position;
    let player = ctx.state.entities.player();
    if !player.is_alive() {
        return Ok(());
    }
    let target = player.position;

    if ctx.map().is_visible(position) {
        if position.chebyshev(target) <= 1 {
            state.path.clear();
            return resolve_melee(id, EntityId::PLAYER, ctx).map(|_| ());
        }
        let field = CostField::build(ctx.map(), &ctx.state.entities, position, ctx.config());
        state.path = find_path(position, target, &field, ctx.config());
    }

    if state
        .path
        .first()
        .is_none_or(|next| position.chebyshev(*next) != 1)
    {
        state.path.clear();
        return Ok(());
    }
    let next = state.path.remove(0);
    move_to(id, next, ctx).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai;
    use crate::state::{BehaviorState, Position};
    use crate::testing::Harness;

    fn spawn_hostile(harness: &mut Harness, x: i32, y: i32) -> EntityId {
        let id = harness.spawn_fish(x, y, 50);
        harness.state.entities.actor_mut(id).unwrap().behavior = Some(BehaviorState::hostile());
        id
    }

    #[test]
    fn adjacent_hostile_attacks() {
        let mut harness = Harness::new(10, 10);
        let id = spawn_hostile(&mut harness, 3, 2);
        harness
            .state
            .entities
            .actor_mut(id)
            .unwrap()
            .stats
            .max_damage = 4;
        harness.rng.push(4);
        harness.rng.push(0);

        ai::act(id, &mut harness.ctx()).unwrap();

        assert_eq!(harness.state.entities.player().stats.hp, 26);
        assert_eq!(
            harness.events[0].to_string(),
            "Goldfish attacks Player for 4 hit points."
        );
    }

    #[test]
    fn visible_hostile_closes_in_and_caches_the_path() {
        let mut harness = Harness::new(10, 10);
        let id = spawn_hostile(&mut harness, 6, 2);

        ai::act(id, &mut harness.ctx()).unwrap();

        let actor = harness.state.entities.actor(id).unwrap();
        assert_eq!(actor.position, Position::new(5, 2));
        match actor.behavior.as_ref() {
            Some(BehaviorState::Hostile(state)) => {
                assert_eq!(state.path.first(), Some(&Position::new(4, 2)))
            }
            other => panic!("expected hostile, got {other:?}"),
        }
    }

    #[test]
    fn unseen_hostile_follows_cache_then_waits() {
        let mut harness = Harness::new(10, 10);
        let id = spawn_hostile(&mut harness, 6, 2);
        harness.map.hide(Position::new(6, 2));
        harness.state.entities.actor_mut(id).unwrap().behavior =
            Some(BehaviorState::Hostile(HostileState {
                path: vec![Position::new(6, 3)],
            }));

        ai::act(id, &mut harness.ctx()).unwrap();
        assert_eq!(
            harness.state.entities.actor(id).unwrap().position,
            Position::new(6, 3)
        );

        harness.map.hide(Position::new(6, 3));
        ai::act(id, &mut harness.ctx()).unwrap();
        assert_eq!(
            harness.state.entities.actor(id).unwrap().position,
            Position::new(6, 3)
        );
    }

    #[test]
    fn unseen_hostile_drops_a_detached_path() {
        let mut harness = Harness::new(10, 10);
        let id = spawn_hostile(&mut harness, 6, 2);
        harness.map.hide(Position::new(6, 2));
        harness.state.entities.actor_mut(id).unwrap().behavior =
            Some(BehaviorState::Hostile(HostileState {
                path: vec![Position::new(9, 9), Position::new(8, 8)],
            }));

        ai::act(id, &mut harness.ctx()).unwrap();

        let actor = harness.state.entities.actor(id).unwrap();
        assert_eq!(actor.position, Position::new(6, 2));
        assert_eq!(actor.behavior, Some(BehaviorState::hostile()));
    }
}
