// ── Portable event model ──────────────────────────────────────────────────────
//
// Everything the application sees is expressed in these types; no Win32 type
// crosses this boundary.  All types are plain `Copy` values.

use serde::{Deserialize, Serialize};

/// A keyboard key.
///
/// Native codes without a mapping arrive as [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    LeftShift,
    LeftControl,
    LeftAlt,
    /// Left Windows key.
    LeftSystem,
    RightShift,
    RightControl,
    RightAlt,
    /// Right Windows key.
    RightSystem,
    Unknown,
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// First extended ("back") button.
    X1,
    /// Second extended ("forward") button.
    X2,
    Unknown,
}

/// One translated window or input notification.
///
/// Coordinates are in client-area pixels; `MouseDelta` is only produced while
/// the cursor is captured (see [`CursorMode::CapturedHidden`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The user (or [`request_close`](crate::Window::request_close)) asked
    /// the window to close.  The window is already closed when this is seen.
    Close,
    /// The client area changed size.
    Resize { width: u32, height: u32 },
    /// An interactive move/resize drag started.
    ResizeBegin,
    /// An interactive move/resize drag ended.
    ResizeEnd,
    Key {
        key: Key,
        pressed: bool,
        /// `true` for auto-repeat presses generated while the key is held.
        repeated: bool,
    },
    MouseButton {
        button: MouseButton,
        pressed: bool,
        x: i32,
        y: i32,
    },
    /// Absolute cursor position.
    MouseMove { x: i32, y: i32 },
    /// Relative motion away from the client centre while captured.
    MouseDelta { dx: i32, dy: i32 },
}

/// How the system cursor behaves over the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorMode {
    /// Visible and free to leave the window.
    #[default]
    Normal,
    /// Hidden, clipped to the client area and re-centred after each move.
    CapturedHidden,
}

/// Client-area size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}
