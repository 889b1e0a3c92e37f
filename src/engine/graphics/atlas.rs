//! Sprite atlas layout and image assembly.
//!
//! Every drawable lives in one square grid of equal cells. Images are read
//! from the asset directory when present; anything missing is replaced by a
//! generated placeholder so the game stays playable from a bare checkout.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec2;
use image::{imageops, Rgba, RgbaImage};
use log::{info, warn};

use super::font;
use crate::engine::input::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Star,
    Player(u8),
    World(u8),
    Icon(Icon),
    Background,
    White,
    Glyph(char),
}

impl SpriteKey {
    /// Every key the game draws.
    pub fn catalog(player_frames: usize, world_variants: usize) -> Vec<SpriteKey> {
        let mut keys = vec![SpriteKey::Star, SpriteKey::Background, SpriteKey::White];
        keys.extend((0..player_frames).map(|i| SpriteKey::Player(i as u8)));
        keys.extend((0..world_variants).map(|i| SpriteKey::World(i as u8)));
        keys.extend(Icon::ALL.iter().map(|icon| SpriteKey::Icon(*icon)));
        keys.extend(font::chars().map(SpriteKey::Glyph));
        keys
    }

    /// Image path relative to the asset directory, if the key is file-backed.
    pub fn asset_path(&self) -> Option<String> {
        match self {
            SpriteKey::Star => Some("data/star.png".to_string()),
            SpriteKey::Background => Some("data/backgrounds.png".to_string()),
            SpriteKey::Player(i) => Some(format!("player/{}.png", i + 1)),
            SpriteKey::World(i) => Some(format!("world/{}-mid.png", i + 1)),
            SpriteKey::Icon(icon) => Some(
                match icon {
                    Icon::All => "input/all.png",
                    Icon::Left => "input/left.png",
                    Icon::Up => "input/up.png",
                    Icon::Right => "input/right.png",
                    Icon::Down => "input/down.png",
                    Icon::Not => "input/not.png",
                }
                .to_string(),
            ),
            SpriteKey::White | SpriteKey::Glyph(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub min: Vec2,
    pub max: Vec2,
}

/// Where each key sits in the atlas grid.
#[derive(Debug, Clone)]
pub struct AtlasLayout {
    keys: Vec<SpriteKey>,
    index: HashMap<SpriteKey, u32>,
    columns: u32,
    cell: u32,
}

impl AtlasLayout {
    pub fn new(keys: Vec<SpriteKey>, cell: u32) -> Self {
        let columns = ((keys.len().max(1)) as f32).sqrt().ceil() as u32;
        let index = keys
            .iter()
            .enumerate()
            .map(|(i, key)| (*key, i as u32))
            .collect();
        Self {
            keys,
            index,
            columns,
            cell,
        }
    }

    pub fn keys(&self) -> &[SpriteKey] {
        &self.keys
    }

    pub fn cell_size(&self) -> u32 {
        self.cell
    }

    /// Atlas edge length in pixels.
    pub fn size(&self) -> u32 {
        self.columns * self.cell
    }

    /// Top-left pixel of the cell at `slot`.
    pub fn cell_origin(&self, slot: u32) -> (u32, u32) {
        ((slot % self.columns) * self.cell, (slot / self.columns) * self.cell)
    }

    pub fn uv(&self, key: SpriteKey) -> Option<UvRect> {
        let slot = *self.index.get(&key)?;
        let (x, y) = self.cell_origin(slot);
        let size = self.size() as f32;
        // Half-texel inset keeps linear filtering inside the cell.
        let min = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) / size;
        let max = Vec2::new((x + self.cell) as f32 - 0.5, (y + self.cell) as f32 - 0.5) / size;
        Some(UvRect { min, max })
    }
}

/// Build the atlas pixels for `layout`, reading images under `asset_dir`.
pub fn build_atlas_image(layout: &AtlasLayout, asset_dir: &Path) -> RgbaImage {
    let cell = layout.cell_size();
    let mut atlas = RgbaImage::new(layout.size(), layout.size());
    let mut loaded = 0usize;

    for (slot, key) in layout.keys().iter().enumerate() {
        let image = match key.asset_path() {
            Some(rel) => {
                let path = asset_dir.join(&rel);
                if path.exists() {
                    match image::open(&path) {
                        Ok(img) => {
                            loaded += 1;
                            imageops::resize(&img.to_rgba8(), cell, cell, imageops::FilterType::Triangle)
                        }
                        Err(e) => {
                            warn!("Failed to decode {}: {}, using placeholder", path.display(), e);
                            placeholder(*key, cell)
                        }
                    }
                } else {
                    placeholder(*key, cell)
                }
            }
            None => placeholder(*key, cell),
        };

        let (x, y) = layout.cell_origin(slot as u32);
        imageops::replace(&mut atlas, &image, x as i64, y as i64);
    }

    let file_backed = layout.keys().iter().filter(|k| k.asset_path().is_some()).count();
    if loaded < file_backed {
        warn!(
            "Loaded {} of {} sprite images from {}, the rest are placeholders",
            loaded,
            file_backed,
            asset_dir.display()
        );
    }
    info!(
        "Built sprite atlas: {}x{} with {} cells of {}px",
        layout.size(),
        layout.size(),
        layout.keys().len(),
        cell
    );
    atlas
}

/// Generated art for `key`; glyphs come from the bundled font.
pub fn placeholder(key: SpriteKey, cell: u32) -> RgbaImage {
    let c = cell as f32;
    let center = (c - 1.0) / 2.0;
    match key {
        SpriteKey::White => RgbaImage::from_pixel(cell, cell, Rgba([255, 255, 255, 255])),
        SpriteKey::Star => RgbaImage::from_fn(cell, cell, |x, y| {
            // Diamond.
            let d = (x as f32 - center).abs() + (y as f32 - center).abs();
            if d <= c * 0.45 {
                Rgba([255, 220, 40, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        }),
        SpriteKey::Player(i) => {
            let tint = palette(i as usize);
            let radius = c * (0.38 + 0.02 * (i % 3) as f32);
            RgbaImage::from_fn(cell, cell, |x, y| {
                let d = Vec2::new(x as f32 - center, y as f32 - center).length();
                if d <= radius {
                    Rgba([tint[0], tint[1], tint[2], 255])
                } else {
                    Rgba([0, 0, 0, 0])
                }
            })
        }
        SpriteKey::World(i) => {
            let tint = palette(i as usize + 3);
            RgbaImage::from_fn(cell, cell, |x, y| {
                let edge = x == 0 || y == 0 || x + 1 == cell || y + 1 == cell;
                if edge {
                    Rgba([tint[0] / 2, tint[1] / 2, tint[2] / 2, 255])
                } else {
                    Rgba([tint[0], tint[1], tint[2], 255])
                }
            })
        }
        SpriteKey::Background => RgbaImage::from_fn(cell, cell, |x, y| {
            let t = y as f32 / c;
            let wave = ((x as f32 / c) * std::f32::consts::TAU).sin() * 8.0;
            Rgba([
                (150.0 + 40.0 * t + wave) as u8,
                (190.0 + 30.0 * t) as u8,
                (220.0 + 20.0 * t - wave) as u8,
                255,
            ])
        }),
        SpriteKey::Icon(icon) => icon_placeholder(icon, cell),
        SpriteKey::Glyph(ch) => font::rasterize(ch, cell),
    }
}

fn icon_placeholder(icon: Icon, cell: u32) -> RgbaImage {
    let c = cell as f32;
    let center = (c - 1.0) / 2.0;
    RgbaImage::from_fn(cell, cell, |x, y| {
        let p = Vec2::new(x as f32 - center, center - y as f32);
        let ring = p.length();
        if ring > c * 0.48 {
            return Rgba([0, 0, 0, 0]);
        }
        let stroke = c * 0.08;
        let on = match icon {
            Icon::All => ring > c * 0.40,
            Icon::Not => (p.x - p.y).abs() < stroke || (p.x + p.y).abs() < stroke,
            Icon::Left => p.x < 0.0 && p.y.abs() < stroke - p.x * 0.5,
            Icon::Right => p.x > 0.0 && p.y.abs() < stroke + p.x * 0.5,
            Icon::Up => p.y > 0.0 && p.x.abs() < stroke + p.y * 0.5,
            Icon::Down => p.y < 0.0 && p.x.abs() < stroke - p.y * 0.5,
        };
        match (icon, on) {
            (Icon::Not, true) => Rgba([220, 40, 40, 230]),
            (_, true) => Rgba([255, 255, 255, 230]),
            (_, false) => Rgba([0, 0, 0, 90]),
        }
    })
}

fn palette(i: usize) -> [u8; 3] {
    const COLORS: [[u8; 3]; 8] = [
        [230, 90, 70],
        [80, 170, 90],
        [70, 120, 220],
        [200, 170, 110],
        [140, 200, 120],
        [170, 150, 200],
        [110, 180, 190],
        [210, 140, 80],
    ];
    COLORS[i % COLORS.len()]
}
