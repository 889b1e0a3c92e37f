//! Touch-controlled star collecting game.

pub mod config;
pub mod engine;
pub mod game;

// Re-export main types for convenience
pub use config::GameConfig;
pub use game::App;
