//! Swipe classification.
//!
//! A swipe is reduced to one of five directions. The vertical axis is flipped
//! before classification, so in the normalized vector a negative y means the
//! finger moved up in world space.

use glam::Vec2;

use crate::config::{Axis, GestureConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Center,
    Left,
    Right,
    Up,
    Down,
}

/// Discrete command produced by a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Tap,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn action(self) -> Action {
        match self {
            Direction::Center => Action::Tap,
            Direction::Left => Action::Left,
            Direction::Right => Action::Right,
            Direction::Up => Action::Up,
            Direction::Down => Action::Down,
        }
    }
}

impl Action {
    /// Grid step for a directional action, rows growing downwards.
    pub fn grid_offset(self) -> Option<(i32, i32)> {
        match self {
            Action::Tap => None,
            Action::Left => Some((-1, 0)),
            Action::Right => Some((1, 0)),
            Action::Up => Some((0, -1)),
            Action::Down => Some((0, 1)),
        }
    }
}

/// Classify a swipe from `from` to `to`, both in world space.
pub fn classify(from: Vec2, to: Vec2, config: &GestureConfig) -> Direction {
    let mut delta = to - from;
    delta.y = -delta.y;
    classify_vector(delta / config.sensitivity, config)
}

/// Classify an already normalized swipe vector.
pub fn classify_vector(v: Vec2, config: &GestureConfig) -> Direction {
    let length = v.length();
    // NaN fails this comparison too and lands on Center.
    if !(length >= config.deadzone) || length == 0.0 {
        return Direction::Center;
    }

    let (ax, ay) = (v.x.abs(), v.y.abs());
    let horizontal = match config.tie_break {
        Axis::Horizontal => ax >= ay,
        Axis::Vertical => ax > ay,
    };

    if horizontal {
        if v.x < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if v.y < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}
