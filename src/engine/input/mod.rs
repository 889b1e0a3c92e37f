//! Input handling module
//! Raw winit pointer events, swipe classification and the gesture session.

pub mod gesture;
pub mod handler;
pub mod session;

pub use gesture::{classify, classify_vector, Action, Direction};
pub use handler::InputHandler;
pub use session::{
    GameLogic, Icon, IconPlacement, SessionOutput, SessionState, TouchGesture, TouchSample,
    TouchSession,
};
