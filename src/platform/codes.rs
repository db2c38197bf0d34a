// ── Native message and key codes ──────────────────────────────────────────────
//
// The Win32 message identifiers and virtual-key codes the translator
// understands, plus the WPARAM/LPARAM bit-field helpers from <windowsx.h>.
// These are stable ABI values; on Windows every constant is checked at
// compile time against the `windows` crate (see the bottom of this file), so
// the portable core cannot drift from the real headers.

// ── Window messages ───────────────────────────────────────────────────────────

pub const WM_DESTROY: u32 = 0x0002;
pub const WM_SIZE: u32 = 0x0005;
pub const WM_CLOSE: u32 = 0x0010;
pub const WM_NCCREATE: u32 = 0x0081;
pub const WM_NCDESTROY: u32 = 0x0082;
pub const WM_KEYDOWN: u32 = 0x0100;
pub const WM_KEYUP: u32 = 0x0101;
pub const WM_SYSKEYDOWN: u32 = 0x0104;
pub const WM_SYSKEYUP: u32 = 0x0105;
pub const WM_MOUSEMOVE: u32 = 0x0200;
pub const WM_LBUTTONDOWN: u32 = 0x0201;
pub const WM_LBUTTONUP: u32 = 0x0202;
pub const WM_RBUTTONDOWN: u32 = 0x0204;
pub const WM_RBUTTONUP: u32 = 0x0205;
pub const WM_MBUTTONDOWN: u32 = 0x0207;
pub const WM_MBUTTONUP: u32 = 0x0208;
pub const WM_XBUTTONDOWN: u32 = 0x020B;
pub const WM_XBUTTONUP: u32 = 0x020C;
pub const WM_ENTERSIZEMOVE: u32 = 0x0231;
pub const WM_EXITSIZEMOVE: u32 = 0x0232;

/// HIWORD(wparam) of WM_XBUTTON* for the first extended button.
pub const XBUTTON1: u16 = 0x0001;
/// HIWORD(wparam) of WM_XBUTTON* for the second extended button.
pub const XBUTTON2: u16 = 0x0002;

// ── Virtual-key codes ─────────────────────────────────────────────────────────
//
// Letters and digits use their ASCII upper-case / digit values ('A'..='Z',
// '0'..='9') and have no named constant.

pub const VK_BACK: u16 = 0x08;
pub const VK_TAB: u16 = 0x09;
pub const VK_RETURN: u16 = 0x0D;
pub const VK_SHIFT: u16 = 0x10;
pub const VK_CONTROL: u16 = 0x11;
pub const VK_MENU: u16 = 0x12;
pub const VK_ESCAPE: u16 = 0x1B;
pub const VK_SPACE: u16 = 0x20;
pub const VK_PRIOR: u16 = 0x21;
pub const VK_NEXT: u16 = 0x22;
pub const VK_END: u16 = 0x23;
pub const VK_HOME: u16 = 0x24;
pub const VK_LEFT: u16 = 0x25;
pub const VK_UP: u16 = 0x26;
pub const VK_RIGHT: u16 = 0x27;
pub const VK_DOWN: u16 = 0x28;
pub const VK_INSERT: u16 = 0x2D;
pub const VK_DELETE: u16 = 0x2E;
pub const VK_LWIN: u16 = 0x5B;
pub const VK_RWIN: u16 = 0x5C;
pub const VK_F1: u16 = 0x70;
pub const VK_F2: u16 = 0x71;
pub const VK_F3: u16 = 0x72;
pub const VK_F4: u16 = 0x73;
pub const VK_F5: u16 = 0x74;
pub const VK_F6: u16 = 0x75;
pub const VK_F7: u16 = 0x76;
pub const VK_F8: u16 = 0x77;
pub const VK_F9: u16 = 0x78;
pub const VK_F10: u16 = 0x79;
pub const VK_F11: u16 = 0x7A;
pub const VK_F12: u16 = 0x7B;
pub const VK_LSHIFT: u16 = 0xA0;
pub const VK_RSHIFT: u16 = 0xA1;
pub const VK_LCONTROL: u16 = 0xA2;
pub const VK_RCONTROL: u16 = 0xA3;
pub const VK_LMENU: u16 = 0xA4;
pub const VK_RMENU: u16 = 0xA5;

/// Bit 30 of a key message's LPARAM: the key was already down.
pub const KEY_REPEAT_BIT: isize = 1 << 30;

// ── Bit-field helpers ─────────────────────────────────────────────────────────

#[inline]
pub fn loword(value: usize) -> u16 {
    (value & 0xFFFF) as u16
}

#[inline]
pub fn hiword(value: usize) -> u16 {
    ((value >> 16) & 0xFFFF) as u16
}

/// `GET_X_LPARAM`: signed client x.  Negative on multi-monitor setups or
/// while the mouse is captured outside the client area.
#[inline]
pub fn x_from_lparam(lparam: isize) -> i32 {
    i32::from(loword(lparam as usize) as i16)
}

/// `GET_Y_LPARAM`: signed client y.
#[inline]
pub fn y_from_lparam(lparam: isize) -> i32 {
    i32::from(hiword(lparam as usize) as i16)
}

/// Pack a client point into an LPARAM the way the OS does (`MAKELPARAM`).
#[inline]
pub fn point_to_lparam(x: i32, y: i32) -> isize {
    let lo = (x as u16) as usize;
    let hi = (y as u16) as usize;
    (lo | (hi << 16)) as isize
}

// ── Compile-time agreement with the Win32 headers ─────────────────────────────

#[cfg(windows)]
mod agreement {
    use windows::Win32::UI::{Input::KeyboardAndMouse as kbm, WindowsAndMessaging as wm};

    const _: () = {
        assert!(super::WM_DESTROY == wm::WM_DESTROY);
        assert!(super::WM_SIZE == wm::WM_SIZE);
        assert!(super::WM_CLOSE == wm::WM_CLOSE);
        assert!(super::WM_NCCREATE == wm::WM_NCCREATE);
        assert!(super::WM_NCDESTROY == wm::WM_NCDESTROY);
        assert!(super::WM_KEYDOWN == wm::WM_KEYDOWN);
        assert!(super::WM_KEYUP == wm::WM_KEYUP);
        assert!(super::WM_SYSKEYDOWN == wm::WM_SYSKEYDOWN);
        assert!(super::WM_SYSKEYUP == wm::WM_SYSKEYUP);
        assert!(super::WM_MOUSEMOVE == wm::WM_MOUSEMOVE);
        assert!(super::WM_LBUTTONDOWN == wm::WM_LBUTTONDOWN);
        assert!(super::WM_LBUTTONUP == wm::WM_LBUTTONUP);
        assert!(super::WM_RBUTTONDOWN == wm::WM_RBUTTONDOWN);
        assert!(super::WM_RBUTTONUP == wm::WM_RBUTTONUP);
        assert!(super::WM_MBUTTONDOWN == wm::WM_MBUTTONDOWN);
        assert!(super::WM_MBUTTONUP == wm::WM_MBUTTONUP);
        assert!(super::WM_XBUTTONDOWN == wm::WM_XBUTTONDOWN);
        assert!(super::WM_XBUTTONUP == wm::WM_XBUTTONUP);
        assert!(super::WM_ENTERSIZEMOVE == wm::WM_ENTERSIZEMOVE);
        assert!(super::WM_EXITSIZEMOVE == wm::WM_EXITSIZEMOVE);

        assert!(super::VK_BACK == kbm::VK_BACK.0);
        assert!(super::VK_TAB == kbm::VK_TAB.0);
        assert!(super::VK_RETURN == kbm::VK_RETURN.0);
        assert!(super::VK_SHIFT == kbm::VK_SHIFT.0);
        assert!(super::VK_CONTROL == kbm::VK_CONTROL.0);
        assert!(super::VK_MENU == kbm::VK_MENU.0);
        assert!(super::VK_ESCAPE == kbm::VK_ESCAPE.0);
        assert!(super::VK_SPACE == kbm::VK_SPACE.0);
        assert!(super::VK_PRIOR == kbm::VK_PRIOR.0);
        assert!(super::VK_NEXT == kbm::VK_NEXT.0);
        assert!(super::VK_END == kbm::VK_END.0);
        assert!(super::VK_HOME == kbm::VK_HOME.0);
        assert!(super::VK_LEFT == kbm::VK_LEFT.0);
        assert!(super::VK_UP == kbm::VK_UP.0);
        assert!(super::VK_RIGHT == kbm::VK_RIGHT.0);
        assert!(super::VK_DOWN == kbm::VK_DOWN.0);
        assert!(super::VK_INSERT == kbm::VK_INSERT.0);
        assert!(super::VK_DELETE == kbm::VK_DELETE.0);
        assert!(super::VK_LWIN == kbm::VK_LWIN.0);
        assert!(super::VK_RWIN == kbm::VK_RWIN.0);
        assert!(super::VK_F1 == kbm::VK_F1.0);
        assert!(super::VK_F12 == kbm::VK_F12.0);
        assert!(super::VK_LSHIFT == kbm::VK_LSHIFT.0);
        assert!(super::VK_RSHIFT == kbm::VK_RSHIFT.0);
        assert!(super::VK_LCONTROL == kbm::VK_LCONTROL.0);
        assert!(super::VK_RCONTROL == kbm::VK_RCONTROL.0);
        assert!(super::VK_LMENU == kbm::VK_LMENU.0);
        assert!(super::VK_RMENU == kbm::VK_RMENU.0);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lparam_coordinates_are_sign_extended() {
        let lparam = point_to_lparam(-3, 700);
        assert_eq!(x_from_lparam(lparam), -3);
        assert_eq!(y_from_lparam(lparam), 700);
    }

    #[test]
    fn words_split_a_size_lparam() {
        // WM_SIZE: low word = width, high word = height.
        let lparam = (480usize << 16) | 640;
        assert_eq!(loword(lparam), 640);
        assert_eq!(hiword(lparam), 480);
    }
}
