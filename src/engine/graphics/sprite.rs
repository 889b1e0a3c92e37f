//! CPU side of sprite drawing.
//!
//! A [`SpriteBatch`] collects instances for one projection and turns into a
//! [`DrawPass`] on `end`. The renderer draws passes strictly in order.

use glam::{Mat4, Vec2};
use log::debug;

use super::atlas::{AtlasLayout, SpriteKey};
use super::vertex::SpriteInstance;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Background,
    World,
    Icon,
    Text,
}

/// A positioned, sized view of an atlas image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub key: SpriteKey,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 4],
}

impl Sprite {
    pub fn new(key: SpriteKey, size: f32) -> Self {
        Self::with_size(key, size, size)
    }

    pub fn with_size(key: SpriteKey, width: f32, height: f32) -> Self {
        Self {
            key,
            x: 0.0,
            y: 0.0,
            width,
            height,
            color: WHITE,
        }
    }

    /// Place the bottom-left corner.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.width / 2.0;
        self.y = center.y - self.height / 2.0;
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawPass {
    pub layer: Layer,
    pub projection: Mat4,
    pub instances: Vec<SpriteInstance>,
}

pub struct SpriteBatch<'a> {
    layer: Layer,
    projection: Mat4,
    atlas: &'a AtlasLayout,
    instances: Vec<SpriteInstance>,
}

impl<'a> SpriteBatch<'a> {
    pub fn begin(layer: Layer, projection: Mat4, atlas: &'a AtlasLayout) -> Self {
        Self {
            layer,
            projection,
            atlas,
            instances: Vec::new(),
        }
    }

    pub fn draw(&mut self, sprite: &Sprite) {
        self.draw_key(
            sprite.key,
            Vec2::new(sprite.x, sprite.y),
            Vec2::new(sprite.width, sprite.height),
            sprite.color,
        );
    }

    /// Draw `key` with its bottom-left corner at `position`.
    pub fn draw_key(&mut self, key: SpriteKey, position: Vec2, size: Vec2, color: [f32; 4]) {
        let Some(uv) = self.atlas.uv(key) else {
            debug!("No atlas cell for {:?}", key);
            return;
        };
        self.instances.push(SpriteInstance {
            position: position.to_array(),
            size: size.to_array(),
            uv_min: uv.min.to_array(),
            uv_max: uv.max.to_array(),
            color,
        });
    }

    pub fn end(self) -> DrawPass {
        DrawPass {
            layer: self.layer,
            projection: self.projection,
            instances: self.instances,
        }
    }
}
