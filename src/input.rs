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

/// High-level input events consumed by the run loop.
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

/// Maps one key event to a game input. Unmapped keys yield `None`.
///
/// Arrows and WASD steer; `q`, `Esc`, and `Ctrl+C` quit. The terminal runs
/// in raw mode, so `Ctrl+C` arrives as an ordinary key event.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Non-blocking keyboard source over the crossterm event stream.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Polls without blocking and returns the next mapped input, if any.
    ///
    /// Unmapped keys are drained and discarded so they cannot clog the queue.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(input) = map_key(key) {
                    return Ok(Some(input));
                }
            }
        }

        Ok(None)
    }

    /// Blocks until one key press arrives. Used for the final acknowledgment
    /// before the game exits.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Direction, GameInput, direction_change_is_valid, map_key};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reversals_only() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Left, Direction::Right));

        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Right, Direction::Down));
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
        ];

        for (code, direction) in cases {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(GameInput::Direction(direction)));
        }
    }

    #[test]
    fn wasd_maps_in_both_cases() {
        let cases = [
            ('w', Direction::Up),
            ('s', Direction::Down),
            ('a', Direction::Left),
            ('d', Direction::Right),
        ];

        for (letter, direction) in cases {
            let lower = KeyEvent::new(KeyCode::Char(letter), KeyModifiers::NONE);
            let upper = KeyEvent::new(
                KeyCode::Char(letter.to_ascii_uppercase()),
                KeyModifiers::SHIFT,
            );
            assert_eq!(map_key(lower), Some(GameInput::Direction(direction)));
            assert_eq!(map_key(upper), Some(GameInput::Direction(direction)));
        }
    }

    #[test]
    fn quit_keys_map_to_quit() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(map_key(q), Some(GameInput::Quit));
        assert_eq!(map_key(esc), Some(GameInput::Quit));
        assert_eq!(map_key(ctrl_c), Some(GameInput::Quit));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);

        assert_eq!(map_key(x), None);
        assert_eq!(map_key(tab), None);
    }
}
