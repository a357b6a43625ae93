//! Serpent - terminal snake.
//!
//! The library holds the simulation engine and its I/O collaborators so both
//! the binary and the integration tests can drive them.

pub mod audio;
pub mod cli;
pub mod constants;
pub mod game;
pub mod high_score;
pub mod input;
pub mod session;
pub mod settings;
pub mod utils;

pub use game::{GameEvent, GameInput, GamePhase, SnakeGame};
pub use session::Session;
pub use settings::Settings;
