pub mod atlas;
pub mod camera;
pub mod font;
pub mod renderer;
pub mod sprite;
pub mod texture;
pub mod vertex;

pub use atlas::{AtlasLayout, SpriteKey};
pub use camera::Camera2d;
pub use renderer::Renderer;
pub use sprite::{DrawPass, Layer, Sprite, SpriteBatch};
pub use texture::Texture;
pub use vertex::{SpriteInstance, Vertex};
