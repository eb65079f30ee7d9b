//! Key mapping from terminal events to ship controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::ControlInput;

/// One control gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

/// Map keyboard input to a control.
pub fn map_key(key: KeyEvent) -> Option<Control> {
    match key.code {
        KeyCode::Up => Some(Control::Up),
        KeyCode::Down => Some(Control::Down),
        KeyCode::Left => Some(Control::Left),
        KeyCode::Right => Some(Control::Right),
        KeyCode::Char(' ') => Some(Control::Fire),
        _ => None,
    }
}

/// Check if key should quit the scene.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Collapse the gestures of one tick into a single input.
///
/// For each axis the latest gesture wins; fire is set if it was pressed at all.
pub fn fold_controls(controls: &[Control]) -> ControlInput {
    controls
        .iter()
        .fold(ControlInput::NEUTRAL, |mut input, control| {
            match control {
                Control::Up => input.d_row = -1,
                Control::Down => input.d_row = 1,
                Control::Left => input.d_col = -1,
                Control::Right => input.d_col = 1,
                Control::Fire => input.fire = true,
            }
            input
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Control::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Control::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Control::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Control::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Control::Fire));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn latest_gesture_wins_per_axis() {
        let input = fold_controls(&[Control::Left, Control::Up, Control::Right]);
        assert_eq!(input, ControlInput::new(-1, 1, false));
    }

    #[test]
    fn fire_survives_later_moves() {
        let input = fold_controls(&[Control::Fire, Control::Down]);
        assert_eq!(input, ControlInput::new(1, 0, true));
        assert!(fold_controls(&[]).is_neutral());
    }
}
