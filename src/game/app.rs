use std::sync::Arc;
use std::time::Instant;

use log::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use crate::config::GameConfig;
use crate::engine::audio::{Audio, SoundBank};
use crate::engine::graphics::atlas::{build_atlas_image, AtlasLayout, SpriteKey};
use crate::engine::graphics::Renderer;
use crate::engine::input::InputHandler;
use crate::game::frame::FrameOrchestrator;
use crate::game::state::GameState;
use crate::game::world::level::LevelError;

/// Atlas cell edge in pixels.
const ATLAS_CELL: u32 = 64;
/// Longest frame step fed to the game, so a stall does not teleport the player.
const MAX_FRAME_SECONDS: f32 = 0.1;

pub struct App {
    config: GameConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    orchestrator: Option<FrameOrchestrator>,
    game: GameState,
    input_handler: InputHandler,
    audio: Option<Audio>,
    last_frame: Instant,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self, LevelError> {
        let game = GameState::new(config.clone())?;
        Ok(Self {
            config,
            window: None,
            renderer: None,
            orchestrator: None,
            game,
            input_handler: InputHandler::new(),
            audio: None,
            last_frame: Instant::now(),
        })
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let attributes = Window::default_attributes().with_title("Star Collector");
        let window = Arc::new(event_loop.create_window(attributes)?);
        let size = window.inner_size();
        info!("Window created: {}x{}", size.width, size.height);

        let layout = AtlasLayout::new(
            SpriteKey::catalog(self.config.player_frames, self.config.world_variants),
            ATLAS_CELL,
        );
        let atlas_image = build_atlas_image(&layout, &self.config.asset_dir);
        let renderer = pollster::block_on(Renderer::new(window.clone(), &atlas_image))?;

        self.orchestrator = Some(FrameOrchestrator::new(&self.config, layout, size.width, size.height));
        self.renderer = Some(renderer);
        self.window = Some(window);

        if self.config.muted {
            info!("Audio muted by configuration");
        } else {
            let bank = SoundBank::load(&self.config.asset_dir);
            match Audio::new(bank, self.config.music_volume) {
                Ok(audio) => self.audio = Some(audio),
                Err(e) => warn!("Audio unavailable, continuing silently: {}", e),
            }
        }

        self.last_frame = Instant::now();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        debug!("Resized to {}x{}", width, height);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(width, height);
        }
        if let Some(orchestrator) = self.orchestrator.as_mut() {
            orchestrator.resize(width, height);
        }
    }

    fn toggle_fullscreen(&self) {
        if let Some(window) = &self.window {
            let next = next_fullscreen(window.fullscreen());
            debug!("Fullscreen: {}", next.is_some());
            window.set_fullscreen(next);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32().min(MAX_FRAME_SECONDS);
        self.last_frame = now;

        let Some(orchestrator) = self.orchestrator.as_mut() else {
            return;
        };
        if self.input_handler.take_cancelled() {
            orchestrator.cancel_gesture();
        }
        let sample = self.input_handler.sample();
        let frame = orchestrator.frame(&mut self.game, delta_time, sample);

        if let Some(action) = frame.action {
            debug!("Action {:?} in phase {:?}", action, self.game.phase());
        }
        if let Some(audio) = &self.audio {
            for sound in &frame.sounds {
                audio.play(*sound);
            }
        }

        if let Some(renderer) = self.renderer.as_mut() {
            match renderer.render(&frame.passes) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    error!("GPU out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => warn!("Render error: {:?}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            error!("Failed to initialize: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            WindowEvent::Resized(physical_size) => {
                self.resize(physical_size.width, physical_size.height);
            }
            WindowEvent::Touch(touch) => {
                self.input_handler.handle_touch(touch);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input_handler.handle_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input_handler.handle_mouse_button(state, button);
            }
            WindowEvent::Focused(focused) => {
                self.input_handler.handle_focus(focused);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::F11) => self.toggle_fullscreen(),
                    PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                    _ => {}
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Borderless fullscreen toggles with windowed mode.
fn next_fullscreen(current: Option<Fullscreen>) -> Option<Fullscreen> {
    match current {
        Some(_) => None,
        None => Some(Fullscreen::Borderless(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_toggles_both_ways() {
        let on = next_fullscreen(None);
        assert_eq!(on, Some(Fullscreen::Borderless(None)));
        assert_eq!(next_fullscreen(on), None);
    }
}
