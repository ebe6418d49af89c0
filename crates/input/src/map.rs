//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command. Unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if is_interrupt(key) {
        return Some(Command::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('e') | KeyCode::Char('E') => Some(Command::RotateCw),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::RotateCcw),

        // Actions
        KeyCode::Char(' ') | KeyCode::Char('z') | KeyCode::Char('Z') => Some(Command::HardDrop),
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => Some(Command::Quit),

        // Debug
        KeyCode::Char('o') | KeyCode::Char('O') => Some(Command::LevelDown),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::LevelUp),

        _ => None,
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<Command> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(Command::MoveRight));
        assert_eq!(key(KeyCode::Down), Some(Command::SoftDrop));

        assert_eq!(key(KeyCode::Char('a')), Some(Command::MoveLeft));
        assert_eq!(key(KeyCode::Char('D')), Some(Command::MoveRight));
        assert_eq!(key(KeyCode::Char('s')), Some(Command::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(key(KeyCode::Up), Some(Command::RotateCw));
        assert_eq!(key(KeyCode::Char('e')), Some(Command::RotateCw));
        assert_eq!(key(KeyCode::Char('q')), Some(Command::RotateCcw));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Char(' ')), Some(Command::HardDrop));
        assert_eq!(key(KeyCode::Char('z')), Some(Command::HardDrop));
        assert_eq!(key(KeyCode::Char('o')), Some(Command::LevelDown));
        assert_eq!(key(KeyCode::Char('p')), Some(Command::LevelUp));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key(KeyCode::Char('x')), Some(Command::Quit));
        assert_eq!(key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(key(KeyCode::Char('c')), None);
        assert_eq!(key(KeyCode::Enter), None);
        assert_eq!(key(KeyCode::F(1)), None);
    }
}
