//! Game-specific logic and features.

pub mod app;
pub mod background;
pub mod frame;
pub mod player;
pub mod state;
pub mod world;

// Re-export commonly used types
pub use app::App;
pub use background::Background;
pub use frame::{Frame, FrameOrchestrator, Scene};
pub use state::{GameState, Phase};
pub use world::{Level, LevelError};
