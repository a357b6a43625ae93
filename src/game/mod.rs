//! Snake simulation engine: grid, snake, direction buffering, tick engine,
//! speed controller and phase state machine.

pub mod logic;
pub mod speed;
pub mod types;

pub use logic::{GameEvent, GameInput};
pub use types::{Cell, Difficulty, Direction, GamePhase, Grid, SnakeGame, Snapshot};
