//! Keyboard mapping for the game screen.

use crate::game::{Difficulty, Direction, GameInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of translating one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(GameInput),
    Quit,
    Ignore,
}

/// Map a crossterm key event to an action. Key releases (reported on some
/// platforms) are ignored so one press is one input.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => GameInput::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            GameInput::Move(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            GameInput::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            GameInput::Move(Direction::Right)
        }
        KeyCode::Char(' ') => GameInput::StartPause,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Char('1') => GameInput::SetDifficulty(Difficulty::Easy),
        KeyCode::Char('2') => GameInput::SetDifficulty(Difficulty::Normal),
        KeyCode::Char('3') => GameInput::SetDifficulty(Difficulty::Hard),
        KeyCode::Char('x') | KeyCode::Char('X') => GameInput::ToggleWrap,
        KeyCode::Char('v') | KeyCode::Char('V') => GameInput::ToggleSpeedScaling,
        KeyCode::Char('m') | KeyCode::Char('M') => GameInput::ToggleAudio,
        KeyCode::Char('t') | KeyCode::Char('T') => GameInput::ToggleTheme,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return KeyAction::Quit,
        _ => return KeyAction::Ignore,
    };
    KeyAction::Game(input)
}
