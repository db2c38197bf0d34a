// ── Per-window mutable state ──────────────────────────────────────────────────
//
// One `WindowState` backs one window.  The facade owns it (through an
// `Rc<RefCell<_>>`), and the window procedure reaches it through the handle
// table in `registry`.  It is mutated only by the translator and by the
// capture controller.

use std::collections::VecDeque;

use crate::event::{CursorMode, Event};

use super::hook::NativeMessageHook;
use super::NativeHandle;

#[derive(Debug)]
pub struct WindowState {
    handle: Option<NativeHandle>,
    is_open: bool,
    cursor_mode: CursorMode,
    /// One-shot guard: the next WM_MOUSEMOVE was caused by our own warp.
    suppress_next_move: bool,
    events: VecDeque<Event>,
    hook: Option<NativeMessageHook>,
}

impl Default for WindowState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WindowState {
    pub fn new(hook: Option<NativeMessageHook>) -> Self {
        Self {
            handle: None,
            is_open: true,
            cursor_mode: CursorMode::Normal,
            suppress_next_move: false,
            events: VecDeque::new(),
            hook,
        }
    }

    // ── Handle ────────────────────────────────────────────────────────────────

    pub fn handle(&self) -> Option<NativeHandle> {
        self.handle
    }

    /// Record the native handle; called when the association is established.
    pub fn bind(&mut self, handle: NativeHandle) {
        self.handle = Some(handle);
    }

    /// `true` while the native window can still be used for geometry and
    /// cursor calls.
    pub fn is_live(&self) -> bool {
        self.handle.is_some() && self.is_open
    }

    // ── Open flag ─────────────────────────────────────────────────────────────

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn mark_closed(&mut self) {
        self.is_open = false;
    }

    // ── Cursor mode ───────────────────────────────────────────────────────────

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    pub(crate) fn set_cursor_mode_flag(&mut self, mode: CursorMode) {
        self.cursor_mode = mode;
    }

    pub fn is_suppressing(&self) -> bool {
        self.suppress_next_move
    }

    pub(crate) fn arm_suppression(&mut self) {
        self.suppress_next_move = true;
    }

    pub(crate) fn disarm_suppression(&mut self) {
        self.suppress_next_move = false;
    }

    /// Consume the one-shot guard, returning whether it was armed.
    pub(crate) fn take_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_next_move)
    }

    // ── Queue ─────────────────────────────────────────────────────────────────

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Oldest pending event, if any.
    pub fn pop_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    // ── Hook ──────────────────────────────────────────────────────────────────

    pub fn hook(&self) -> Option<NativeMessageHook> {
        self.hook
    }
}
