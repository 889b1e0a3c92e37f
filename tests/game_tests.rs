use std::collections::{HashSet, VecDeque};

use glam::Vec2;

use star_collector::config::GameConfig;
use star_collector::engine::input::{Action, GameLogic, TouchSample, TouchSession};
use star_collector::engine::graphics::{AtlasLayout, SpriteKey};
use star_collector::engine::SoundEffect;
use star_collector::game::world::{levels, GridPos, Level};
use star_collector::game::{FrameOrchestrator, GameState, Phase};
use star_collector::game::state::STAR_SCORE;

const MOVES: [Action; 4] = [Action::Left, Action::Right, Action::Up, Action::Down];

/// Play one move to its end with the game's own stepping.
fn play_move(game: &GameState, action: Action) -> Option<GameState> {
    if !game.allows(action) {
        return None;
    }
    let mut next = game.clone();
    next.input(action);
    let step = next.config().step_interval;
    while next.phase() == Phase::Playing && !next.is_stopped() {
        next.update(step);
    }
    Some(next)
}

/// Breadth-first search over (position, stars left) driving a real game.
fn solvable(level: Level) -> bool {
    let mut start = GameState::with_level(config(), level);
    start.input(Action::Tap);
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start]);

    while let Some(game) = queue.pop_front() {
        let key: (GridPos, Vec<GridPos>) = (game.player().position, game.level().star_positions().collect());
        if !seen.insert(key) {
            continue;
        }
        for action in MOVES {
            let Some(next) = play_move(&game, action) else {
                continue;
            };
            match next.phase() {
                Phase::Complete => return true,
                Phase::Playing => queue.push_back(next),
                _ => {}
            }
        }
    }
    false
}

fn config() -> GameConfig {
    GameConfig {
        step_interval: 0.1,
        input_delay: 0.5,
        ..GameConfig::default()
    }
}

fn playing(text: &str) -> GameState {
    let mut game = GameState::with_level(config(), Level::parse(text).unwrap());
    game.input(Action::Tap);
    assert_eq!(game.phase(), Phase::Playing);
    game
}

#[test]
fn built_in_levels_are_solvable() {
    for i in 0..levels::count() {
        let level = levels::load(i).unwrap();
        assert!(solvable(level), "level {} cannot be finished", i + 1);
    }
}

#[test]
fn slide_stops_in_front_of_wall() {
    let mut game = playing("#P..#\n#*###");
    game.input(Action::Right);
    game.update(5.0);
    assert_eq!(game.player().position, (3, 0));
    assert!(game.is_stopped());
    assert!(!game.allows(Action::Right));
    assert!(game.allows(Action::Left));
}

#[test]
fn walking_into_void_kills() {
    let mut game = playing("#P. *#");
    game.input(Action::Right);
    game.update(1.0);
    assert_eq!(game.phase(), Phase::Dead);
    assert_eq!(game.player().position, (3, 0));
    assert_eq!(game.drain_sounds(), vec![SoundEffect::Step, SoundEffect::Die]);
    assert!(!game.is_alive());
    assert!(!game.accepts_input());
}

#[test]
fn collecting_every_star_completes_then_advances() {
    let mut game = playing("#P.*#\n#####");
    game.input(Action::Right);
    game.update(1.0);
    assert_eq!(game.phase(), Phase::Complete);
    assert_eq!(game.score(), STAR_SCORE);
    assert_eq!(game.level().stars_left(), 0);

    game.update_timers(0.5);
    assert!(game.accepts_input());
    game.input(Action::Tap);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.level_index(), 1);
    assert_eq!(game.player().position, game.level().start());
    assert_eq!(game.score(), STAR_SCORE);
}

#[test]
fn restart_restores_level_and_score() {
    let mut game = playing("#*P. *#\n#######");
    game.input(Action::Left);
    game.update(1.0);
    assert_eq!(game.score(), STAR_SCORE);
    assert_eq!(game.player().position, (1, 0));

    game.input(Action::Right);
    game.update(1.0);
    assert_eq!(game.phase(), Phase::Dead);

    game.update_timers(1.0);
    game.input(Action::Tap);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level().stars_left(), 2);
    assert_eq!(game.player().position, (2, 0));
}

#[test]
fn touches_are_ignored_during_input_delay() {
    let mut game = playing("#P. *#");
    game.input(Action::Right);
    game.update(1.0);
    assert_eq!(game.phase(), Phase::Dead);

    let mut session = TouchSession::new(config().gesture);
    let out = session.sample(TouchSample::down(Vec2::ZERO), &mut game);
    assert_eq!(out.icon, None);
    let out = session.sample(TouchSample::up(Vec2::ZERO), &mut game);
    assert_eq!(out.action, None);
    assert_eq!(game.phase(), Phase::Dead);

    game.update_timers(0.3);
    assert!(!game.accepts_input());
    game.update_timers(0.3);
    session.sample(TouchSample::down(Vec2::ZERO), &mut game);
    let out = session.sample(TouchSample::up(Vec2::ZERO), &mut game);
    assert_eq!(out.action, Some(Action::Tap));
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn finger_held_through_death_does_not_restart() {
    let config = config();
    let atlas = AtlasLayout::new(SpriteKey::catalog(config.player_frames, config.world_variants), 8);
    let mut frames = FrameOrchestrator::new(&config, atlas, 600, 600);
    let mut game = playing("#P. *#");
    game.input(Action::Right);
    let center = Vec2::new(300.0, 300.0);

    frames.frame(&mut game, 0.01, TouchSample::down(center));
    assert!(frames.session().is_tracking());

    frames.frame(&mut game, 0.2, TouchSample::down(center));
    assert_eq!(game.phase(), Phase::Dead);
    assert!(!frames.session().is_tracking());

    let frame = frames.frame(&mut game, 0.1, TouchSample::up(center));
    assert_eq!(frame.action, None);
    let frame = frames.frame(&mut game, 0.3, TouchSample::up(center));
    assert!(game.accepts_input());
    assert_eq!(frame.action, None);
    assert_eq!(game.phase(), Phase::Dead);

    frames.frame(&mut game, 0.01, TouchSample::down(center));
    let frame = frames.frame(&mut game, 0.01, TouchSample::up(center));
    assert_eq!(frame.action, Some(Action::Tap));
    assert_eq!(game.phase(), Phase::Playing);
}
