// ── Win32 cursor host ─────────────────────────────────────────────────────────
//
// `CursorHost` over the real cursor APIs for one HWND.

#![allow(unsafe_code)]

use windows::Win32::{
    Foundation::{FALSE, HWND, POINT, RECT, TRUE},
    Graphics::Gdi::ClientToScreen,
    UI::WindowsAndMessaging::{ClipCursor, GetClientRect, SetCursorPos, ShowCursor},
};

use crate::error::Result;
use crate::platform::host::{CursorHost, Point, Rect};

use super::window::win32_error;

pub(crate) struct Win32Host {
    hwnd: HWND,
}

impl Win32Host {
    pub(crate) fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl CursorHost for Win32Host {
    fn client_rect(&self) -> Result<Rect> {
        let mut rect = RECT::default();
        // SAFETY: hwnd is the window this host was built for; &mut rect is a
        // valid out pointer for the duration of the call.
        unsafe { GetClientRect(self.hwnd, &mut rect) }
            .map_err(win32_error("GetClientRect"))?;
        Ok(Rect {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        })
    }

    fn client_to_screen(&self, point: Point) -> Point {
        let mut p = POINT {
            x: point.x,
            y: point.y,
        };
        // SAFETY: hwnd is valid; &mut p is a valid in/out pointer.  On failure
        // p is left untouched, which degrades to a client-space warp target.
        let _ = unsafe { ClientToScreen(self.hwnd, &mut p) };
        Point { x: p.x, y: p.y }
    }

    fn set_cursor_pos(&mut self, screen: Point) {
        // SAFETY: SetCursorPos takes plain integers and has no preconditions.
        if let Err(e) = unsafe { SetCursorPos(screen.x, screen.y) } {
            log::warn!("SetCursorPos({}, {}) failed: {e}", screen.x, screen.y);
        }
    }

    fn hide_cursor(&mut self) {
        // ShowCursor adjusts a per-thread display counter; the cursor is
        // hidden while it is negative.
        // SAFETY: ShowCursor has no preconditions.
        while unsafe { ShowCursor(FALSE) } >= 0 {}
    }

    fn show_cursor(&mut self) {
        // SAFETY: ShowCursor has no preconditions.
        while unsafe { ShowCursor(TRUE) } < 0 {}
    }

    fn clip_cursor(&mut self, screen: Option<Rect>) -> Result<()> {
        let result = match screen {
            Some(r) => {
                let rect = RECT {
                    left: r.left,
                    top: r.top,
                    right: r.right,
                    bottom: r.bottom,
                };
                // SAFETY: &rect outlives the call; ClipCursor copies it.
                unsafe { ClipCursor(Some(&rect as *const RECT)) }
            }
            // SAFETY: None releases the clip; always valid.
            None => unsafe { ClipCursor(None) },
        };
        result.map_err(win32_error("ClipCursor"))
    }
}
