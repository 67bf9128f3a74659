use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

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
    Confirm,
    Quit,
}

/// Polls the terminal for at most `timeout` and maps the next key press.
///
/// Returns `Ok(None)` on timeout and for events that carry no meaning here
/// (releases, repeats, resizes, unbound keys).
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        _ => Ok(None),
    }
}

/// Maps a key code to a game input; unbound keys are ignored.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::{map_key, Direction, GameInput};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(
            map_key(KeyCode::Up),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(KeyCode::Left),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(KeyCode::Char('d')),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn confirm_quit_and_unbound_keys() {
        assert_eq!(map_key(KeyCode::Enter), Some(GameInput::Confirm));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameInput::Confirm));
        assert_eq!(map_key(KeyCode::Char('q')), Some(GameInput::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(GameInput::Quit));
        assert_eq!(map_key(KeyCode::Tab), None);
    }
}
