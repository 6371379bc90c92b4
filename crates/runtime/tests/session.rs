use angler_content::{ContentFactory, MapLayout, Scenario};
use angler_core::{
    ActionOutcome, ActorState, BehaviorState, EntityId, FighterStats, GameConfig, GameState,
    MapDimensions, MapOracle, PlayerAction, Position, StaticTile, TerrainKind,
};
use angler_runtime::{RuntimeError, Session};

fn pond_session(seed: u64) -> Session {
    Session::builder()
        .content(&ContentFactory::bundled(), "pond")
        .unwrap()
        .seed(seed)
        .build()
        .unwrap()
}

/// A 10x10 floor with a wall column at x = 4 and the player at (1, 1).
fn walled_scenario() -> Scenario {
    let dimensions = MapDimensions::new(10, 10);
    let tiles = (0..dimensions.area())
        .map(|index| {
            let position = dimensions.position(index);
            let terrain = if position.x == 4 {
                TerrainKind::Wall
            } else {
                TerrainKind::Floor
            };
            (position, StaticTile::new(terrain))
        })
        .collect();

    let stats = FighterStats::new().with_hp(30);
    let player = ActorState::new(
        EntityId::PLAYER,
        "player",
        "Player",
        Position::new(1, 1),
        stats,
        BehaviorState::Idle,
    );
    Scenario {
        layout: MapLayout { dimensions, tiles },
        state: GameState::new(player),
    }
}

#[test]
fn same_seed_replays_identically() {
    let actions = [
        PlayerAction::Wait,
        PlayerAction::Move { dx: 1, dy: 0 },
        PlayerAction::Wait,
        PlayerAction::Move { dx: 0, dy: -1 },
        PlayerAction::Wait,
    ];

    let mut first = pond_session(42);
    let mut second = pond_session(42);
    for action in actions {
        let a = first.step(action).map_err(|e| e.to_string());
        let b = second.step(action).map_err(|e| e.to_string());
        assert_eq!(a, b);
    }

    assert_eq!(first.state(), second.state());
    assert_eq!(first.events(), second.events());
    assert_eq!(first.seed(), 42);
}

#[test]
fn turns_advance_and_capture_stays_consistent() {
    let mut session = pond_session(7);
    for turn in 1..=25 {
        let report = session.step(PlayerAction::Wait).unwrap();
        assert_eq!(report.turn, turn);
        assert!(session.state().capture_consistent());
        if session.is_over() {
            break;
        }
    }
}

#[test]
fn casting_at_nearest_target_resolves() {
    let mut session = pond_session(3);
    let target = session.nearest_target().expect("a fish is in view");
    let position = session.state().entities.actor(target).unwrap().position;

    match session.step(PlayerAction::CastLine { target: position }) {
        Ok(report) => {
            assert!(matches!(report.outcome, ActionOutcome::Cast(_)));
            assert!(session.state().capture_consistent());
            if let Some(status) = session.capture_status() {
                assert!(status.strength <= 100);
                assert!(session.messages().any(|m| m.starts_with("You hook a")));
            }
        }
        Err(error) => assert!(error.is_recoverable()),
    }
}

#[test]
fn rejected_action_keeps_the_turn() {
    let mut session = Session::builder()
        .scenario(walled_scenario())
        .seed(1)
        .build()
        .unwrap();

    session.step(PlayerAction::Move { dx: 1, dy: 0 }).unwrap();
    session.step(PlayerAction::Move { dx: 1, dy: 0 }).unwrap();
    let error = session.step(PlayerAction::Move { dx: 1, dy: 0 }).unwrap_err();

    assert!(error.is_recoverable());
    assert_eq!(session.state().turn.number, 2);
    assert_eq!(
        session.state().entities.player().position,
        Position::new(3, 1)
    );
}

#[test]
fn field_of_view_follows_the_player() {
    let session = Session::new(walled_scenario(), GameConfig::default());
    let map = session.map();
    assert!(map.is_visible(Position::new(3, 1)));
    assert!(map.is_visible(Position::new(4, 1)));
    assert!(!map.is_visible(Position::new(6, 1)));
}

#[test]
fn builder_requires_a_scenario() {
    let result = Session::builder().seed(9).build();
    assert!(matches!(result, Err(RuntimeError::MissingScenario)));
}
