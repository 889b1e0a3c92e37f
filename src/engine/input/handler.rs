use glam::Vec2;
use log::debug;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase};

use super::session::TouchSample;

/// Collects winit touch and mouse events into one pointer that is sampled
/// once per frame. Only the first finger down is tracked; the left mouse
/// button stands in for a finger on desktop.
#[derive(Debug, Default)]
pub struct InputHandler {
    finger: Option<u64>,
    mouse_down: bool,
    position: Vec2,
    /// Contact that began and ended between two samples.
    pending_release: bool,
    reported_down: bool,
    cancelled: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_touch(&mut self, touch: Touch) {
        let position = Vec2::new(touch.location.x as f32, touch.location.y as f32);
        match touch.phase {
            TouchPhase::Started => {
                if self.finger.is_none() && !self.mouse_down {
                    self.finger = Some(touch.id);
                    self.press(position);
                }
            }
            TouchPhase::Moved => {
                if self.finger == Some(touch.id) {
                    self.position = position;
                }
            }
            TouchPhase::Ended => {
                if self.finger == Some(touch.id) {
                    self.finger = None;
                    self.position = position;
                    self.release();
                }
            }
            TouchPhase::Cancelled => {
                if self.finger == Some(touch.id) {
                    self.finger = None;
                    self.cancel();
                }
            }
        }
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        if self.finger.is_none() {
            self.position = Vec2::new(x as f32, y as f32);
        }
    }

    pub fn handle_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left || self.finger.is_some() {
            return;
        }
        match state {
            ElementState::Pressed if !self.mouse_down => {
                self.mouse_down = true;
                let position = self.position;
                self.press(position);
            }
            ElementState::Released if self.mouse_down => {
                self.mouse_down = false;
                self.release();
            }
            _ => {}
        }
    }

    /// Losing focus abandons the gesture rather than committing it.
    pub fn handle_focus(&mut self, focused: bool) {
        if !focused && self.is_down() {
            self.finger = None;
            self.mouse_down = false;
            self.cancel();
        }
    }

    /// Current pointer state in window pixels.
    pub fn sample(&mut self) -> TouchSample {
        let touching = self.is_down() || self.pending_release;
        self.pending_release = false;
        self.reported_down = self.is_down();
        TouchSample {
            touching,
            position: self.position,
        }
    }

    /// True once after a touch was cancelled by the platform.
    pub fn take_cancelled(&mut self) -> bool {
        std::mem::take(&mut self.cancelled)
    }

    fn is_down(&self) -> bool {
        self.finger.is_some() || self.mouse_down
    }

    fn press(&mut self, position: Vec2) {
        self.position = position;
        self.reported_down = false;
        self.pending_release = false;
        self.cancelled = false;
    }

    fn release(&mut self) {
        if !self.reported_down {
            self.pending_release = true;
        }
    }

    fn cancel(&mut self) {
        debug!("Pointer contact cancelled");
        self.pending_release = false;
        self.reported_down = false;
        self.cancelled = true;
    }
}
