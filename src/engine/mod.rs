//! Engine module containing graphics, input and audio plumbing.

pub mod audio;
pub mod graphics;
pub mod input;

// Re-export commonly used types
pub use audio::{Audio, SoundEffect};
pub use graphics::{renderer::Renderer, texture::Texture, vertex::Vertex};
pub use input::{InputHandler, TouchSession};
