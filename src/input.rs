use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
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

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Keyboard input source backed by crossterm events.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for input, then drains everything pending.
    ///
    /// Returns the most recent meaningful event; a quit request wins over
    /// any direction seen in the same batch.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let mut latest = None;
        loop {
            if let Event::Key(key) = event::read()? {
                match map_key_event(key) {
                    Some(GameInput::Quit) => return Ok(Some(GameInput::Quit)),
                    Some(input) => latest = Some(input),
                    None => {}
                }
            }

            if !event::poll(Duration::ZERO)? {
                break;
            }
        }

        Ok(latest)
    }
}

/// Maps a raw key event onto a game input.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        _ => None,
    }
}
