use glam::Vec2;

use star_collector::config::{Axis, GestureConfig};
use star_collector::engine::input::{classify, classify_vector, Action, Direction};

#[test]
fn zero_length_swipe_is_a_tap() {
    let config = GestureConfig::default();
    for p in [Vec2::ZERO, Vec2::new(0.3, -0.7), Vec2::new(-12.0, 5.5)] {
        assert_eq!(classify(p, p, &config), Direction::Center);
        assert_eq!(classify(p, p, &config).action(), Action::Tap);
    }
}

#[test]
fn short_swipe_stays_in_deadzone() {
    let config = GestureConfig::default();
    let from = Vec2::new(0.1, 0.1);
    assert_eq!(classify(from, from + Vec2::new(0.039, 0.0), &config), Direction::Center);
    assert_eq!(classify(from, from + Vec2::new(0.041, 0.0), &config), Direction::Right);
}

#[test]
fn cardinal_swipes_in_world_space() {
    let config = GestureConfig::default();
    let o = Vec2::ZERO;
    assert_eq!(classify(o, Vec2::new(0.2, 0.01), &config), Direction::Right);
    assert_eq!(classify(o, Vec2::new(-0.2, 0.01), &config), Direction::Left);
    assert_eq!(classify(o, Vec2::new(0.01, 0.2), &config), Direction::Up);
    assert_eq!(classify(o, Vec2::new(0.01, -0.2), &config), Direction::Down);
}

#[test]
fn classification_ignores_scale_above_deadzone() {
    let config = GestureConfig::default();
    let swipes = [
        Vec2::new(0.05, 0.02),
        Vec2::new(-0.07, 0.03),
        Vec2::new(0.01, 0.09),
        Vec2::new(-0.02, -0.06),
    ];
    for delta in swipes {
        let expected = classify(Vec2::ZERO, delta, &config);
        for k in [1.5, 3.0, 40.0] {
            assert_eq!(classify(Vec2::ZERO, delta * k, &config), expected, "{delta:?} * {k}");
        }
    }
}

#[test]
fn diagonal_follows_tie_break() {
    let mut config = GestureConfig::default();
    let v = Vec2::new(-2.0, 2.0);
    assert_eq!(classify_vector(v, &config), Direction::Left);
    config.tie_break = Axis::Vertical;
    assert_eq!(classify_vector(v, &config), Direction::Down);
}

#[test]
fn non_finite_vector_is_center() {
    let config = GestureConfig::default();
    assert_eq!(classify_vector(Vec2::new(f32::NAN, 3.0), &config), Direction::Center);
}
