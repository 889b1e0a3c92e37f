pub mod level;
pub mod levels;

pub use level::{GridPos, Level, LevelError, Tile};
