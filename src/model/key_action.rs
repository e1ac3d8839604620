//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application. Default: q/Esc/Ctrl+c
    Quit,

    // Lifecycle
    /// Dismiss the oldest element that is still alive. Default: d
    DismissOldest,
    /// Dismiss every element. Default: D/Shift+d
    DismissAll,
    /// Drop all elements and spawn the items again. Default: r
    Restart,

    // Motion
    /// Increase scroll speed by one cell per frame. Default: +/=
    SpeedUp,
    /// Decrease scroll speed by one cell per frame. Default: -
    SlowDown,
    /// Freeze or resume motion. Default: Space/p
    TogglePause,
}
