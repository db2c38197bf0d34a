// ── OS cursor / geometry seam ─────────────────────────────────────────────────
//
// The capture controller and the translator never call the OS directly; they
// go through `CursorHost`.  `platform::win32::host::Win32Host` is the real
// implementation; tests use a recording fake.

use crate::error::Result;

/// A point in client or screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// An axis-aligned rectangle; `right`/`bottom` are exclusive, as in Win32.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Centre of a client rectangle, in client coordinates.
    ///
    /// Client rectangles always start at the origin, so this is simply half
    /// the extent on each axis.
    pub fn center(&self) -> Point {
        Point {
            x: self.width() / 2,
            y: self.height() / 2,
        }
    }
}

/// The OS primitives the cursor-capture machinery needs from one window.
pub trait CursorHost {
    /// The window's client rectangle (origin at 0,0).
    fn client_rect(&self) -> Result<Rect>;

    /// Convert a client-space point to screen space.
    fn client_to_screen(&self, point: Point) -> Point;

    /// Warp the system cursor to a screen-space point.
    fn set_cursor_pos(&mut self, screen: Point);

    /// Drive the cursor display counter below zero (hidden).
    fn hide_cursor(&mut self);

    /// Drive the cursor display counter back to zero or above (visible).
    fn show_cursor(&mut self);

    /// Confine the cursor to a screen-space rectangle, or release it (`None`).
    fn clip_cursor(&mut self, screen: Option<Rect>) -> Result<()>;
}

// ── Test double ───────────────────────────────────────────────────────────────
