pub mod draw;
pub mod game_state;

pub use game_state::{GameState, Phase, STAR_SCORE};
