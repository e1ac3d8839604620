//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Key event kind and state are ignored so that terminals reporting
    /// press/release still resolve.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Quit
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        // Lifecycle
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            KeyAction::DismissOldest,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT),
            KeyAction::DismissAll,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::Restart,
        );

        // Motion
        bindings.insert(
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE),
            KeyAction::SpeedUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT),
            KeyAction::SpeedUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('='), KeyModifiers::NONE),
            KeyAction::SpeedUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE),
            KeyAction::SlowDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::TogglePause,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            KeyAction::TogglePause,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn quit_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn dismiss_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('d'), KeyModifiers::NONE)),
            Some(KeyAction::DismissOldest)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('D'), KeyModifiers::SHIFT)),
            Some(KeyAction::DismissAll)
        );
    }

    #[test]
    fn speed_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Some(KeyAction::SpeedUp)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('='), KeyModifiers::NONE)),
            Some(KeyAction::SpeedUp)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('-'), KeyModifiers::NONE)),
            Some(KeyAction::SlowDown)
        );
    }

    #[test]
    fn pause_and_restart_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(KeyAction::TogglePause)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('r'), KeyModifiers::NONE)),
            Some(KeyAction::Restart)
        );
    }

    #[test]
    fn unbound_key_returns_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn release_events_resolve_like_presses() {
        let bindings = KeyBindings::default();
        let mut release = key(KeyCode::Char('d'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(bindings.get(release), Some(KeyAction::DismissOldest));
    }
}
