//! Input module - keyboard handling for game controls.
//!
//! Commands are discrete: one key press, one action. There is no autorepeat
//! handling here; gravity comes from the runner's tick scheduler and lateral
//! movement repeats only as fast as the terminal delivers key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map keyboard input to a game action.
///
/// `paused` selects which way the pause key resolves, since pause and
/// resume are distinct engine commands.
pub fn handle_key_event(key: KeyEvent, paused: bool) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::MoveRight),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(GameAction::Rotate),

        // Lifecycle
        KeyCode::Char('p') | KeyCode::Char('P') => Some(if paused {
            GameAction::Resume
        } else {
            GameAction::Pause
        }),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left), false),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right), false),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a')), false),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d')), false),
            Some(GameAction::MoveRight)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up), false),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w')), false),
            Some(GameAction::Rotate)
        );
    }

    #[test]
    fn test_pause_key_toggles_by_state() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p')), false),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p')), true),
            Some(GameAction::Resume)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_unmapped_keys_do_nothing() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x')), false), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down), false), None);
    }
}
