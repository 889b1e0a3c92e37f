//! Per-frame sequencing.
//!
//! One call to [`FrameOrchestrator::frame`] advances the game, samples the
//! touch input and produces the layered draw passes for the renderer:
//!
//! 1. game step, background scroll, game timers
//! 2. touch sample through the gesture session, dropping any gesture held
//!    when the game stops accepting input
//! 3. background (unit square), world (camera), gesture icon (camera),
//!    text (600 units wide)
//!
//! Each pass carries its own projection and they are never interleaved.

use glam::Vec2;

use crate::config::GameConfig;
use crate::engine::audio::SoundEffect;
use crate::engine::graphics::camera::{aspect, Camera2d};
use crate::engine::graphics::sprite::{DrawPass, Layer, Sprite, SpriteBatch};
use crate::engine::graphics::{AtlasLayout, SpriteKey};
use crate::engine::input::{Action, GameLogic, Icon, IconPlacement, TouchSample, TouchSession};
use crate::game::background::Background;
use crate::game::state::GameState;

/// Width of the text pass in its own units.
pub const TEXT_SPACE_WIDTH: f32 = 600.0;

/// Game side of the frame loop.
pub trait Scene: GameLogic {
    fn update(&mut self, delta_time: f32);
    fn update_timers(&mut self, delta_time: f32);
    fn draw_world(&self, batch: &mut SpriteBatch<'_>);
    fn draw_text(&self, batch: &mut SpriteBatch<'_>, width: f32, height: f32);
    fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        Vec::new()
    }
}

impl Scene for GameState {
    fn update(&mut self, delta_time: f32) {
        GameState::update(self, delta_time)
    }

    fn update_timers(&mut self, delta_time: f32) {
        GameState::update_timers(self, delta_time)
    }

    fn draw_world(&self, batch: &mut SpriteBatch<'_>) {
        GameState::draw_world(self, batch)
    }

    fn draw_text(&self, batch: &mut SpriteBatch<'_>, width: f32, height: f32) {
        GameState::draw_text(self, batch, width, height)
    }

    fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        GameState::drain_sounds(self)
    }
}

/// Everything one frame produced.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub passes: Vec<DrawPass>,
    pub action: Option<Action>,
    pub icon: Option<IconPlacement>,
    pub sounds: Vec<SoundEffect>,
}

impl Frame {
    pub fn layers(&self) -> Vec<Layer> {
        self.passes.iter().map(|p| p.layer).collect()
    }
}

pub struct FrameOrchestrator {
    camera: Camera2d,
    screen_size: Vec2,
    session: TouchSession,
    background: Background,
    atlas: AtlasLayout,
    button_size: f32,
    /// Whether the game accepted input on the previous frame.
    was_accepting: bool,
}

impl FrameOrchestrator {
    pub fn new(config: &GameConfig, atlas: AtlasLayout, width: u32, height: u32) -> Self {
        Self {
            camera: Camera2d::for_window(width, height),
            screen_size: Vec2::new(width as f32, height as f32),
            session: TouchSession::new(config.gesture),
            background: Background::new(config.scroll_speed),
            atlas,
            button_size: config.button_size,
            was_accepting: true,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera = Camera2d::for_window(width, height);
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn session(&self) -> &TouchSession {
        &self.session
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn cancel_gesture(&mut self) {
        self.session.cancel();
    }

    /// Run one frame. `sample` is in window pixels.
    pub fn frame<S: Scene>(&mut self, game: &mut S, delta_time: f32, sample: TouchSample) -> Frame {
        game.update(delta_time);
        self.background.update(delta_time);
        game.update_timers(delta_time);

        // Gestures do not survive the game going deaf.
        let accepting = game.accepts_input();
        if self.was_accepting && !accepting {
            self.session.cancel();
        }
        self.was_accepting = accepting;

        let world_sample = TouchSample {
            touching: sample.touching,
            position: self.camera.unproject(sample.position, self.screen_size),
        };
        let output = self.session.sample(world_sample, game);

        let mut passes = Vec::with_capacity(4);

        let mut batch = SpriteBatch::begin(
            Layer::Background,
            Camera2d::screen(1.0, 1.0).projection(),
            &self.atlas,
        );
        self.background.draw(&mut batch);
        passes.push(batch.end());

        let mut batch = SpriteBatch::begin(Layer::World, self.camera.projection(), &self.atlas);
        game.draw_world(&mut batch);
        passes.push(batch.end());

        if let Some(placement) = output.icon {
            let mut batch = SpriteBatch::begin(Layer::Icon, self.camera.projection(), &self.atlas);
            batch.draw(&self.icon_sprite(placement));
            passes.push(batch.end());
        }

        let text_height = TEXT_SPACE_WIDTH * aspect(self.screen_size.x as u32, self.screen_size.y as u32);
        let mut batch = SpriteBatch::begin(
            Layer::Text,
            Camera2d::screen(TEXT_SPACE_WIDTH, text_height).projection(),
            &self.atlas,
        );
        game.draw_text(&mut batch, TEXT_SPACE_WIDTH, text_height);
        passes.push(batch.end());

        Frame {
            passes,
            action: output.action,
            icon: output.icon,
            sounds: game.drain_sounds(),
        }
    }

    fn icon_sprite(&self, placement: IconPlacement) -> Sprite {
        let size = match placement.icon {
            Icon::All => self.button_size * 2.0,
            _ => self.button_size,
        };
        let mut sprite = Sprite::new(SpriteKey::Icon(placement.icon), size);
        sprite.set_center(placement.center);
        sprite
    }
}
