//! Single-touch gesture tracking.
//!
//! `TouchSession` turns per-frame touch samples into at most one committed
//! [`Action`] per gesture, plus an icon hint while the finger is down.

use glam::Vec2;
use log::debug;

use super::gesture::{classify, Action, Direction};
use crate::config::GestureConfig;

/// Per-frame touch state, in whatever space the caller works in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchSample {
    pub touching: bool,
    pub position: Vec2,
}

impl TouchSample {
    pub fn down(position: Vec2) -> Self {
        Self {
            touching: true,
            position,
        }
    }

    pub fn up(position: Vec2) -> Self {
        Self {
            touching: false,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchGesture {
    pub origin: Vec2,
    pub current: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Tracking(TouchGesture),
}

/// Input feedback drawn under the finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    All,
    Left,
    Up,
    Right,
    Down,
    Not,
}

impl Icon {
    pub const ALL: [Icon; 6] = [
        Icon::All,
        Icon::Left,
        Icon::Up,
        Icon::Right,
        Icon::Down,
        Icon::Not,
    ];

    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Center => Icon::All,
            Direction::Left => Icon::Left,
            Direction::Up => Icon::Up,
            Direction::Right => Icon::Right,
            Direction::Down => Icon::Down,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPlacement {
    pub icon: Icon,
    pub center: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionOutput {
    pub action: Option<Action>,
    pub icon: Option<IconPlacement>,
}

/// What the session needs from the game it drives.
pub trait GameLogic {
    fn input(&mut self, action: Action);

    fn is_alive(&self) -> bool;

    /// Nothing is moving and the game waits for the next command.
    fn is_stopped(&self) -> bool;

    /// False while the game ignores touches entirely.
    fn accepts_input(&self) -> bool;

    /// Whether `action` would do anything right now.
    fn allows(&self, _action: Action) -> bool {
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct TouchSession {
    state: SessionState,
    config: GestureConfig,
}

impl TouchSession {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            state: SessionState::Idle,
            config,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, SessionState::Tracking(_))
    }

    /// Advance one frame. `sample.position` must be in world space.
    pub fn sample<G: GameLogic + ?Sized>(&mut self, sample: TouchSample, game: &mut G) -> SessionOutput {
        if !game.accepts_input() {
            return SessionOutput::default();
        }

        match (self.state, sample.touching) {
            (SessionState::Idle, true) => {
                let gesture = TouchGesture {
                    origin: sample.position,
                    current: sample.position,
                };
                self.state = SessionState::Tracking(gesture);
                SessionOutput {
                    action: None,
                    icon: self.icon_for(&gesture, game),
                }
            }
            (SessionState::Tracking(mut gesture), true) => {
                gesture.current = sample.position;
                self.state = SessionState::Tracking(gesture);
                SessionOutput {
                    action: None,
                    icon: self.icon_for(&gesture, game),
                }
            }
            (SessionState::Tracking(gesture), false) => {
                self.state = SessionState::Idle;
                let direction = classify(gesture.origin, gesture.current, &self.config);
                let action = direction.action();
                debug!(
                    "Gesture released: {:?} -> {:?} = {:?}",
                    gesture.origin, gesture.current, action
                );
                game.input(action);
                SessionOutput {
                    action: Some(action),
                    icon: None,
                }
            }
            (SessionState::Idle, false) => SessionOutput::default(),
        }
    }

    /// Drop any gesture in progress without emitting an action.
    pub fn cancel(&mut self) {
        if self.is_tracking() {
            debug!("Gesture cancelled");
        }
        self.state = SessionState::Idle;
    }

    fn icon_for<G: GameLogic + ?Sized>(&self, gesture: &TouchGesture, game: &G) -> Option<IconPlacement> {
        if !(game.is_alive() && game.is_stopped()) {
            return None;
        }
        let direction = classify(gesture.origin, gesture.current, &self.config);
        let icon = if game.allows(direction.action()) {
            Icon::for_direction(direction)
        } else {
            Icon::Not
        };
        Some(IconPlacement {
            icon,
            center: gesture.origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        actions: Vec<Action>,
        closed: bool,
        moving: bool,
        dead: bool,
        blocked: Option<Action>,
    }

    impl GameLogic for Recorder {
        fn input(&mut self, action: Action) {
            self.actions.push(action);
        }
        fn is_alive(&self) -> bool {
            !self.dead
        }
        fn is_stopped(&self) -> bool {
            !self.moving
        }
        fn accepts_input(&self) -> bool {
            !self.closed
        }
        fn allows(&self, action: Action) -> bool {
            self.blocked != Some(action)
        }
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut session = TouchSession::default();
        let mut game = Recorder::default();
        let out = session.sample(TouchSample::up(Vec2::ZERO), &mut game);
        assert_eq!(out, SessionOutput::default());
        assert!(game.actions.is_empty());
    }

    #[test]
    fn press_shows_tap_icon_at_origin() {
        let mut session = TouchSession::default();
        let mut game = Recorder::default();
        let origin = Vec2::new(0.2, 0.1);
        let out = session.sample(TouchSample::down(origin), &mut game);
        assert_eq!(
            out.icon,
            Some(IconPlacement {
                icon: Icon::All,
                center: origin
            })
        );
        assert!(session.is_tracking());
    }

    #[test]
    fn blocked_direction_shows_not_icon() {
        let mut session = TouchSession::default();
        let mut game = Recorder {
            blocked: Some(Action::Right),
            ..Default::default()
        };
        session.sample(TouchSample::down(Vec2::ZERO), &mut game);
        let out = session.sample(TouchSample::down(Vec2::new(0.2, 0.0)), &mut game);
        assert_eq!(out.icon.map(|p| p.icon), Some(Icon::Not));
    }

    #[test]
    fn no_icon_while_moving_but_gesture_still_tracks() {
        let mut session = TouchSession::default();
        let mut game = Recorder {
            moving: true,
            ..Default::default()
        };
        let out = session.sample(TouchSample::down(Vec2::ZERO), &mut game);
        assert_eq!(out.icon, None);
        assert!(session.is_tracking());

        let out = session.sample(TouchSample::up(Vec2::ZERO), &mut game);
        assert_eq!(out.action, Some(Action::Tap));
    }

    #[test]
    fn release_uses_last_tracked_point() {
        let mut session = TouchSession::default();
        let mut game = Recorder::default();
        session.sample(TouchSample::down(Vec2::ZERO), &mut game);
        session.sample(TouchSample::down(Vec2::new(0.0, -0.5)), &mut game);
        // The release sample position is not part of the gesture.
        let out = session.sample(TouchSample::up(Vec2::new(0.5, 0.0)), &mut game);
        assert_eq!(out.action, Some(Action::Down));
        assert_eq!(game.actions, vec![Action::Down]);
    }

    #[test]
    fn closed_game_freezes_state() {
        let mut session = TouchSession::default();
        let mut game = Recorder {
            closed: true,
            ..Default::default()
        };
        let out = session.sample(TouchSample::down(Vec2::ONE), &mut game);
        assert_eq!(out, SessionOutput::default());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn cancel_drops_gesture() {
        let mut session = TouchSession::default();
        let mut game = Recorder::default();
        session.sample(TouchSample::down(Vec2::ZERO), &mut game);
        session.cancel();
        let out = session.sample(TouchSample::up(Vec2::ZERO), &mut game);
        assert_eq!(out.action, None);
        assert!(game.actions.is_empty());
    }
}
