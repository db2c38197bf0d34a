// ── Native code → portable key / button ──────────────────────────────────────
//
// Pure, total functions.  Anything without an entry maps to `Unknown`.

use crate::event::{Key, MouseButton};

use super::codes::*;

/// Map a Win32 virtual-key code (the WPARAM of a key message) to a [`Key`].
///
/// The side-less modifier codes (`VK_SHIFT`, `VK_CONTROL`, `VK_MENU`) are what
/// WM_KEYDOWN actually delivers for modifiers; they are reported as the
/// left-hand variant.
pub fn map_key(code: usize) -> Key {
    // Virtual-key codes occupy the low byte; anything wider is not a key.
    let Ok(code) = u16::try_from(code) else {
        return Key::Unknown;
    };

    match code {
        VK_ESCAPE => Key::Escape,
        VK_RETURN => Key::Enter,
        VK_TAB => Key::Tab,
        VK_BACK => Key::Backspace,
        VK_SPACE => Key::Space,
        VK_LEFT => Key::Left,
        VK_RIGHT => Key::Right,
        VK_UP => Key::Up,
        VK_DOWN => Key::Down,
        VK_PRIOR => Key::PageUp,
        VK_NEXT => Key::PageDown,
        VK_HOME => Key::Home,
        VK_END => Key::End,
        VK_INSERT => Key::Insert,
        VK_DELETE => Key::Delete,

        VK_SHIFT | VK_LSHIFT => Key::LeftShift,
        VK_RSHIFT => Key::RightShift,
        VK_CONTROL | VK_LCONTROL => Key::LeftControl,
        VK_RCONTROL => Key::RightControl,
        VK_MENU | VK_LMENU => Key::LeftAlt,
        VK_RMENU => Key::RightAlt,
        VK_LWIN => Key::LeftSystem,
        VK_RWIN => Key::RightSystem,

        0x41..=0x5A => letter(code - 0x41),
        0x30..=0x39 => digit(code - 0x30),
        VK_F1..=VK_F12 => function_key(code - VK_F1),

        _ => Key::Unknown,
    }
}

/// Map a mouse-button message (and its WPARAM, for the X buttons) to a
/// [`MouseButton`].
pub fn map_mouse_button(message: u32, wparam: usize) -> MouseButton {
    match message {
        WM_LBUTTONDOWN | WM_LBUTTONUP => MouseButton::Left,
        WM_RBUTTONDOWN | WM_RBUTTONUP => MouseButton::Right,
        WM_MBUTTONDOWN | WM_MBUTTONUP => MouseButton::Middle,
        WM_XBUTTONDOWN | WM_XBUTTONUP => {
            if hiword(wparam) == XBUTTON1 {
                MouseButton::X1
            } else {
                MouseButton::X2
            }
        }
        _ => MouseButton::Unknown,
    }
}

/// `true` for the button-down half of a mouse-button message pair.
pub fn is_button_press(message: u32) -> bool {
    matches!(
        message,
        WM_LBUTTONDOWN | WM_RBUTTONDOWN | WM_MBUTTONDOWN | WM_XBUTTONDOWN
    )
}

const LETTERS: [Key; 26] = [
    Key::A,
    Key::B,
    Key::C,
    Key::D,
    Key::E,
    Key::F,
    Key::G,
    Key::H,
    Key::I,
    Key::J,
    Key::K,
    Key::L,
    Key::M,
    Key::N,
    Key::O,
    Key::P,
    Key::Q,
    Key::R,
    Key::S,
    Key::T,
    Key::U,
    Key::V,
    Key::W,
    Key::X,
    Key::Y,
    Key::Z,
];

const DIGITS: [Key; 10] = [
    Key::Digit0,
    Key::Digit1,
    Key::Digit2,
    Key::Digit3,
    Key::Digit4,
    Key::Digit5,
    Key::Digit6,
    Key::Digit7,
    Key::Digit8,
    Key::Digit9,
];

const FUNCTION_KEYS: [Key; 12] = [
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
];

fn letter(offset: u16) -> Key {
    LETTERS.get(usize::from(offset)).copied().unwrap_or(Key::Unknown)
}

fn digit(offset: u16) -> Key {
    DIGITS.get(usize::from(offset)).copied().unwrap_or(Key::Unknown)
}

fn function_key(offset: u16) -> Key {
    FUNCTION_KEYS
        .get(usize::from(offset))
        .copied()
        .unwrap_or(Key::Unknown)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
