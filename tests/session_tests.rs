use glam::Vec2;

use star_collector::config::GestureConfig;
use star_collector::engine::input::{
    classify, Action, GameLogic, Icon, SessionState, TouchSample, TouchSession,
};

#[derive(Default)]
struct Game {
    accepting: bool,
    inputs: Vec<Action>,
}

impl GameLogic for Game {
    fn input(&mut self, action: Action) {
        self.inputs.push(action);
    }

    fn is_alive(&self) -> bool {
        true
    }

    fn is_stopped(&self) -> bool {
        true
    }

    fn accepts_input(&self) -> bool {
        self.accepting
    }
}

fn accepting() -> Game {
    Game {
        accepting: true,
        ..Game::default()
    }
}

#[test]
fn gesture_lifecycle_emits_one_action_on_release() {
    let config = GestureConfig::default();
    let mut session = TouchSession::new(config);
    let mut game = accepting();
    let a = Vec2::new(0.1, 0.2);
    let b = Vec2::new(0.1, -0.1);

    let out = session.sample(TouchSample::down(a), &mut game);
    assert_eq!(out.action, None);
    assert_eq!(out.icon.map(|i| i.icon), Some(Icon::All));

    let out = session.sample(TouchSample::down(b), &mut game);
    assert_eq!(out.action, None);
    assert_eq!(out.icon.map(|i| (i.icon, i.center)), Some((Icon::Down, a)));
    assert!(game.inputs.is_empty());

    let out = session.sample(TouchSample::up(Vec2::new(5.0, 5.0)), &mut game);
    let expected = classify(a, b, &config).action();
    assert_eq!(expected, Action::Down);
    assert_eq!(out.action, Some(expected));
    assert_eq!(out.icon, None);
    assert_eq!(game.inputs, vec![expected]);
    assert_eq!(session.state(), SessionState::Idle);

    let out = session.sample(TouchSample::up(b), &mut game);
    assert_eq!(out.action, None);
    assert_eq!(game.inputs.len(), 1);
}

#[test]
fn gated_session_keeps_its_state() {
    let mut session = TouchSession::new(GestureConfig::default());
    let mut game = accepting();
    session.sample(TouchSample::down(Vec2::ZERO), &mut game);
    let before = session.state();

    game.accepting = false;
    let out = session.sample(TouchSample::down(Vec2::new(1.0, 0.0)), &mut game);
    assert_eq!(out.icon, None);
    assert_eq!(session.state(), before);
    let out = session.sample(TouchSample::up(Vec2::ZERO), &mut game);
    assert_eq!(out.action, None);
    assert_eq!(session.state(), before);
    assert!(game.inputs.is_empty());
}

#[test]
fn cancel_drops_the_gesture() {
    let mut session = TouchSession::new(GestureConfig::default());
    let mut game = accepting();
    session.sample(TouchSample::down(Vec2::ZERO), &mut game);
    session.cancel();
    let out = session.sample(TouchSample::up(Vec2::ZERO), &mut game);
    assert_eq!(out.action, None);
    assert!(game.inputs.is_empty());
}
