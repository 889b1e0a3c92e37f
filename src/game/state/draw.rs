//! How the game state puts itself on screen.

use glam::Vec2;

use super::game_state::{GameState, Phase};
use crate::engine::graphics::font::{draw_text, draw_text_centered};
use crate::engine::graphics::sprite::{Sprite, SpriteBatch, BLACK, WHITE};
use crate::engine::graphics::SpriteKey;
use crate::engine::input::GameLogic;
use crate::game::world::level::{GridPos, Tile};

const WALL_COLOR: [f32; 4] = [0.22, 0.27, 0.35, 1.0];
const DEAD_COLOR: [f32; 4] = [1.0, 0.3, 0.3, 0.5];
/// Line height in text-pass units.
const TEXT_SIZE: f32 = 24.0;
const MARGIN: f32 = 10.0;

impl GameState {
    /// World-space centre of a tile; the grid is centred on the origin.
    pub fn tile_center(&self, (x, y): GridPos) -> Vec2 {
        let level = self.level();
        let size = self.config().tile_size();
        Vec2::new(
            (x as f32 - (level.width() - 1) as f32 / 2.0) * size,
            ((level.height() - 1) as f32 / 2.0 - y as f32) * size,
        )
    }

    /// Player centre, between two tiles while sliding.
    pub fn player_center(&self) -> Vec2 {
        let player = self.player();
        let here = self.tile_center(player.position);
        match (player.slide, player.next_position()) {
            (Some(slide), Some(next)) => here.lerp(self.tile_center(next), slide.progress.clamp(0.0, 1.0)),
            _ => here,
        }
    }

    pub fn draw_world(&self, batch: &mut SpriteBatch<'_>) {
        let config = self.config();
        let level = self.level();
        let tile_size = config.tile_size();
        let variant = (self.level_index() % config.world_variants.max(1)) as u8;

        for pos in level.positions() {
            let center = self.tile_center(pos);
            match level.tile(pos) {
                Tile::Void => {}
                Tile::Wall => {
                    let mut wall = Sprite::new(SpriteKey::White, tile_size);
                    wall.set_center(center);
                    wall.set_color(WALL_COLOR);
                    batch.draw(&wall);
                }
                Tile::Path => {
                    let mut ground = Sprite::new(SpriteKey::World(variant), tile_size);
                    ground.set_center(center);
                    batch.draw(&ground);
                }
            }
        }

        for pos in level.star_positions() {
            let mut star = Sprite::new(SpriteKey::Star, config.sprite_size);
            star.set_center(self.tile_center(pos));
            batch.draw(&star);
        }

        let frame = self.player().frame(config.player_frames) as u8;
        let mut player = Sprite::new(SpriteKey::Player(frame), tile_size);
        player.set_center(self.player_center());
        if self.phase() == Phase::Dead {
            player.set_color(DEAD_COLOR);
        }
        batch.draw(&player);
    }

    /// Score and banners in a `width` x `height` text space, origin bottom-left.
    pub fn draw_text(&self, batch: &mut SpriteBatch<'_>, width: f32, height: f32) {
        let line = TEXT_SIZE;
        let top = height - MARGIN - line;
        let middle = height / 2.0;
        let cx = width / 2.0;

        match self.phase() {
            Phase::Menu => {
                draw_text_centered(batch, "STAR COLLECTOR", cx, middle + line, TEXT_SIZE * 1.5, BLACK);
                draw_text_centered(batch, "TAP TO START", cx, middle - line, TEXT_SIZE, BLACK);
            }
            phase => {
                draw_text(
                    batch,
                    &format!("SCORE {}", self.score()),
                    Vec2::new(MARGIN, top),
                    TEXT_SIZE,
                    BLACK,
                );
                draw_text(
                    batch,
                    &format!("LEVEL {}  STARS {}", self.level_index() + 1, self.level().stars_left()),
                    Vec2::new(MARGIN, top - line * 1.5),
                    TEXT_SIZE,
                    BLACK,
                );

                let banner = match phase {
                    Phase::Dead => Some(("YOU DIED", "TAP TO RETRY")),
                    Phase::Complete => Some(("LEVEL COMPLETE!", "TAP TO CONTINUE")),
                    _ => None,
                };
                if let Some((title, hint)) = banner {
                    draw_text_centered(batch, title, cx, middle + line, TEXT_SIZE * 1.5, BLACK);
                    if self.accepts_input() {
                        draw_text_centered(batch, hint, cx, middle - line, TEXT_SIZE, WHITE);
                    }
                }
            }
        }
    }
}
