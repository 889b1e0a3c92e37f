use glam::Vec2;

use crate::engine::graphics::sprite::{SpriteBatch, WHITE};
use crate::engine::graphics::SpriteKey;

/// Endlessly scrolling backdrop drawn in a 1x1 unit space.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    /// Scroll in background widths per second.
    pub speed: f32,
    offset: f32,
}

impl Background {
    pub fn new(speed: f32) -> Self {
        Self { speed, offset: 0.0 }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn update(&mut self, delta_time: f32) {
        self.offset = (self.offset + self.speed * delta_time).rem_euclid(1.0);
    }

    /// Two copies side by side so the seam never shows.
    pub fn draw(&self, batch: &mut SpriteBatch<'_>) {
        for x in [-self.offset, 1.0 - self.offset] {
            batch.draw_key(SpriteKey::Background, Vec2::new(x, 0.0), Vec2::ONE, WHITE);
        }
    }
}
