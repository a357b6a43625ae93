//! Terminal rendering.

pub mod game_common;
pub mod snake_scene;

use ratatui::Frame;
use serpent::game::SnakeGame;

/// Draw one frame from a settled game state.
pub fn draw(frame: &mut Frame, game: &SnakeGame) {
    let area = frame.size();
    snake_scene::render_snake_scene(frame, area, &game.snapshot());
}
