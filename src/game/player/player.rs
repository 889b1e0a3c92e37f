//! Player implementation.

use crate::game::world::level::GridPos;

/// Frames per second of the walk cycle.
const ANIMATION_FPS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub step: GridPos,
    /// Progress towards the next tile, 0 to 1.
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: GridPos,
    pub slide: Option<Slide>,
    animation_time: f32,
}

impl Player {
    pub fn new(position: GridPos) -> Self {
        Self {
            position,
            slide: None,
            animation_time: 0.0,
        }
    }

    pub fn is_sliding(&self) -> bool {
        self.slide.is_some()
    }

    pub fn start_slide(&mut self, step: GridPos) {
        self.slide = Some(Slide { step, progress: 0.0 });
        self.animation_time = 0.0;
    }

    pub fn stop(&mut self) {
        self.slide = None;
    }

    /// Tile the current slide is heading for.
    pub fn next_position(&self) -> Option<GridPos> {
        self.slide
            .map(|s| (self.position.0 + s.step.0, self.position.1 + s.step.1))
    }

    pub fn animate(&mut self, delta_time: f32) {
        if self.is_sliding() {
            self.animation_time += delta_time;
        }
    }

    /// Walk-cycle frame out of `frames`; standing still shows frame 0.
    pub fn frame(&self, frames: usize) -> usize {
        if frames == 0 || !self.is_sliding() {
            return 0;
        }
        (self.animation_time * ANIMATION_FPS) as usize % frames
    }
}
