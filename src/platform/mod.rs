// ── Platform layer ────────────────────────────────────────────────────────────
//
// The translation and cursor-capture core lives here and is portable: it works
// on raw message triples (`NativeMessage`) and reaches the OS only through the
// `CursorHost` trait.  All Win32 FFI is confined to the `win32` sub-module and
// never leaks outward.

pub mod capture;
pub mod codes;
pub mod hook;
pub mod host;
pub mod keymap;
pub mod registry;
pub mod state;
pub mod text;
pub mod translate;

#[cfg(windows)]
pub mod win32;

use serde::{Deserialize, Serialize};

/// Opaque identity of a native window (the numeric value of its `HWND`).
///
/// Only used as a lookup key and for hand-off to external renderers; it is
/// never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeHandle(pub isize);

impl NativeHandle {
    pub fn as_ptr(self) -> *mut std::ffi::c_void {
        self.0 as *mut std::ffi::c_void
    }
}
