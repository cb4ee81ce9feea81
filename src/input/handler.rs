use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// A discrete input event, already decoupled from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    DirectionPressed(Direction),
    ConfirmPressed,
    CancelPressed,
    NumberPressed(u8),
    QuitRequested,
}

/// Maps raw key events to game input events
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key event; unrecognized keys map to `None` and are ignored
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::QuitRequested);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(InputEvent::DirectionPressed(Direction::Up)),
            KeyCode::Down => Some(InputEvent::DirectionPressed(Direction::Down)),
            KeyCode::Left => Some(InputEvent::DirectionPressed(Direction::Left)),
            KeyCode::Right => Some(InputEvent::DirectionPressed(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(InputEvent::DirectionPressed(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(InputEvent::DirectionPressed(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(InputEvent::DirectionPressed(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(InputEvent::DirectionPressed(Direction::Right))
            }

            // Menu selection
            KeyCode::Char('1') => Some(InputEvent::NumberPressed(1)),
            KeyCode::Char('2') => Some(InputEvent::NumberPressed(2)),
            KeyCode::Char('3') => Some(InputEvent::NumberPressed(3)),

            // Controls
            KeyCode::Enter => Some(InputEvent::ConfirmPressed),
            KeyCode::Esc => Some(InputEvent::CancelPressed),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::QuitRequested),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
