use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions on the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Discrete intents delivered by the host input source.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Steer(Direction),
    Start,
    TogglePause,
    Quit,
}

/// Polls crossterm for at most one mapped key press per call.
///
/// The poll timeout doubles as the host frame pacing: the event loop blocks
/// here instead of sleeping between frames.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    poll_timeout: Duration,
}

impl InputHandler {
    /// Creates a handler that waits up to `poll_timeout` per poll.
    #[must_use]
    pub fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// Returns the next mapped input, or `None` when no relevant key arrived
    /// within the poll timeout.
    pub fn poll_input(&self) -> io::Result<Option<GameInput>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Maps a key press to a game input. Unbound keys map to `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(GameInput::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Steer(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameInput::Start),
        KeyCode::Esc | KeyCode::Char('p') => Some(GameInput::TogglePause),
        KeyCode::Char('q') => Some(GameInput::Quit),
        _ => None,
    }
}
