//! A single-window Win32 shim.
//!
//! `casement` opens one window, drains the thread's message queue on demand and
//! turns native notifications into a portable, ordered stream of [`Event`]s.
//! In [`CursorMode::CapturedHidden`] the cursor is hidden, confined to the
//! client area and re-centred after every move so the stream also carries
//! relative [`Event::MouseDelta`] values suitable for first-person look
//! controls.
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn main() -> casement::Result<()> {
//! use casement::{Event, Window};
//!
//! let mut window = Window::create("casement", 640, 480)?;
//! window.show();
//! while window.is_open() {
//!     while let Some(event) = window.poll_event() {
//!         if event == Event::Close {
//!             break;
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(windows))]
//! # fn main() {}
//! ```

// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32` – Win32 / WinAPI FFI
//   • `platform::hook`  – the process-wide fn-pointer slot
// Each unsafe block in those modules MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

mod config;
mod error;
mod event;
pub mod platform;

pub use config::WindowConfig;
pub use error::{Error, Result};
pub use event::{CursorMode, Event, Key, MouseButton, WindowSize};
pub use platform::hook::{set_native_message_hook, NativeMessage, NativeMessageHook};
pub use platform::NativeHandle;

#[cfg(windows)]
pub use platform::win32::window::{Win32Handle, Window};
