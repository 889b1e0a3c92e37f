//! Text from a bundled TrueType font.
//!
//! Every supported character is rasterized with rusttype into its own atlas
//! cell at startup, so text goes through the same batch as everything else.
//! The font's line (ascent to descent) fills the cell height, which makes a
//! glyph quad `size` x `size` for text `size` units tall. Lower-case input is
//! drawn upper-case.

use glam::Vec2;
use image::{Rgba, RgbaImage};
use log::warn;
use once_cell::sync::Lazy;
use rusttype::{point, Font, Scale};

use super::atlas::SpriteKey;
use super::sprite::SpriteBatch;

static FONT: Lazy<Option<Font<'static>>> = Lazy::new(|| {
    let font = Font::try_from_bytes(include_bytes!("../../../assets/fonts/DejaVuSansMono-Bold.ttf") as &[u8]);
    if font.is_none() {
        warn!("Bundled font failed to parse, text will not show");
    }
    font
});

/// Characters packed into the atlas.
pub const CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789:/!-.";

/// Advance over line height if the font cannot be read.
const FALLBACK_ADVANCE: f32 = 0.6;

fn font() -> Option<&'static Font<'static>> {
    FONT.as_ref()
}

/// Atlas character for `c`, if it has one.
pub fn glyph(c: char) -> Option<char> {
    let c = c.to_ascii_uppercase();
    CHARSET.contains(c).then_some(c)
}

pub fn chars() -> impl Iterator<Item = char> {
    CHARSET.chars()
}

/// Horizontal advance as a fraction of the line height. The font is monospaced.
pub fn advance() -> f32 {
    font()
        .map(|f| f.glyph('M').scaled(Scale::uniform(1.0)).h_metrics().advance_width)
        .unwrap_or(FALLBACK_ADVANCE)
}

/// White coverage mask of `c` in a `cell` x `cell` image, pen at the left edge.
pub fn rasterize(c: char, cell: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(cell, cell, Rgba([255, 255, 255, 0]));
    let Some(font) = font() else {
        return image;
    };

    let scale = Scale::uniform(cell as f32);
    let ascent = font.v_metrics(scale).ascent;
    let glyph = font.glyph(c).scaled(scale).positioned(point(0.0, ascent));
    if let Some(bb) = glyph.pixel_bounding_box() {
        glyph.draw(|gx, gy, coverage| {
            let x = bb.min.x + gx as i32;
            let y = bb.min.y + gy as i32;
            if x >= 0 && y >= 0 && (x as u32) < cell && (y as u32) < cell {
                let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                image.put_pixel(x as u32, y as u32, Rgba([255, 255, 255, alpha]));
            }
        });
    }
    image
}

pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * advance() * size
}

/// Draw `text` `size` units tall with the bottom of its line at `origin`.
/// Characters outside the atlas leave a gap.
pub fn draw_text(batch: &mut SpriteBatch<'_>, text: &str, origin: Vec2, size: f32, color: [f32; 4]) {
    let step = advance() * size;
    let mut x = origin.x;
    for c in text.chars() {
        if let Some(g) = glyph(c) {
            batch.draw_key(SpriteKey::Glyph(g), Vec2::new(x, origin.y), Vec2::splat(size), color);
        }
        x += step;
    }
}

/// Like [`draw_text`] but horizontally centred on `center_x`.
pub fn draw_text_centered(
    batch: &mut SpriteBatch<'_>,
    text: &str,
    center_x: f32,
    y: f32,
    size: f32,
    color: [f32; 4],
) {
    let x = center_x - text_width(text, size) / 2.0;
    draw_text(batch, text, Vec2::new(x, y), size, color);
}
