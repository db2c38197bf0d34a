// ── Window facade ─────────────────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Register the window class (once per process, tolerating re-registration).
//   • Create the top-level window and bind it to its `WindowState`.
//   • Pump the thread's message queue without blocking.
//   • Route every message through the hooks and the portable translator.
//   • Tear down: release the captured cursor, clear the handle association,
//     destroy the native window.

#![allow(unsafe_code)]

use std::cell::RefCell;
use std::ffi::c_void;
use std::rc::Rc;
use std::time::Instant;

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Foundation::{
            GetLastError, ERROR_CLASS_ALREADY_EXISTS, FALSE, HINSTANCE, HWND, LPARAM, LRESULT,
            RECT, WPARAM,
        },
        Graphics::Gdi::UpdateWindow,
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            AdjustWindowRectEx, CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW,
            IsWindow, LoadCursorW, PeekMessageW, PostMessageW, RegisterClassExW, ShowWindow,
            TranslateMessage, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, HMENU, IDC_ARROW, MSG,
            PM_REMOVE, SW_SHOW, WINDOW_EX_STYLE, WM_CLOSE, WM_NCCREATE, WM_NCDESTROY, WNDCLASSEXW,
            WS_OVERLAPPEDWINDOW,
        },
    },
};

use crate::config::WindowConfig;
use crate::error::{win32_code, Error, Result};
use crate::event::{CursorMode, Event, WindowSize};
use crate::platform::hook::{self, NativeMessage};
use crate::platform::host::CursorHost;
use crate::platform::registry::{self, SharedState};
use crate::platform::state::WindowState;
use crate::platform::translate::{translate, Disposition};
use crate::platform::{capture, text, NativeHandle};

use super::host::Win32Host;

// ── Window identity ───────────────────────────────────────────────────────────

/// Atom name used to register (and later find) the window class.
const CLASS_NAME: PCWSTR = w!("casement.window");

// ── Public API ────────────────────────────────────────────────────────────────

/// Raw Win32 handles of a window, for renderers and other native interop.
#[derive(Debug, Clone, Copy)]
pub struct Win32Handle {
    pub hwnd: HWND,
    pub hinstance: HINSTANCE,
}

/// One native top-level window and its event queue.
///
/// Not `Send`: a window's messages are only ever delivered on the thread that
/// created it, and all methods must be called from that thread.
pub struct Window {
    state: SharedState,
    hwnd: HWND,
    hinstance: HINSTANCE,
}

impl Window {
    /// Create a window whose client area is `width` × `height` pixels.
    ///
    /// The window starts hidden; call [`show`](Self::show).
    pub fn create(title: &str, width: u32, height: u32) -> Result<Self> {
        Self::create_with(WindowConfig::new(title, width, height))
    }

    /// Create a window from a full [`WindowConfig`].
    pub fn create_with(config: WindowConfig) -> Result<Self> {
        let t0 = Instant::now();

        config.validate()?;
        let title = text::to_wide(&config.title)?;

        // SAFETY: GetModuleHandleW(None) returns the .exe's own HMODULE, which is
        // valid for the process lifetime.
        let hmodule = unsafe { GetModuleHandleW(None) }.map_err(win32_error("GetModuleHandleW"))?;

        // HINSTANCE and HMODULE represent the same underlying value on Windows.
        let hinstance = HINSTANCE(hmodule.0);

        register_class(hinstance)?;
        let (outer_width, outer_height) = outer_size(config.width, config.height);

        let state: SharedState = Rc::new(RefCell::new(WindowState::new(config.hook)));
        registry::stage(Rc::clone(&state));

        // SAFETY: CLASS_NAME is registered; `title` is a null-terminated UTF-16
        // buffer that outlives the call.  The WndProc binds the staged state on
        // WM_NCCREATE, before CreateWindowExW returns.
        let created = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                CLASS_NAME,
                PCWSTR(title.as_ptr()),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                outer_width,
                outer_height,
                HWND::default(),
                HMENU::default(),
                hinstance,
                None,
            )
        }
        .map_err(win32_error("CreateWindowExW"));

        registry::clear_pending();
        let hwnd = created?;

        log::debug!(
            "created window {:?} ({}x{} client) in {:.1} ms",
            handle_of(hwnd),
            config.width,
            config.height,
            t0.elapsed().as_secs_f64() * 1000.0
        );

        Ok(Self {
            state,
            hwnd,
            hinstance,
        })
    }

    /// `true` until the window has been closed or destroyed.
    pub fn is_open(&self) -> bool {
        self.state.try_borrow().is_ok_and(|s| s.is_open())
    }

    /// Ask the window to close.
    ///
    /// Fire-and-forget: the close is observed as an [`Event::Close`] from a
    /// later [`poll_event`](Self::poll_event).
    pub fn request_close(&self) {
        if !self.is_alive() {
            return;
        }
        // SAFETY: hwnd is a live window; WM_CLOSE carries no pointers.
        if let Err(e) = unsafe { PostMessageW(self.hwnd, WM_CLOSE, WPARAM(0), LPARAM(0)) } {
            log::warn!("PostMessageW(WM_CLOSE) failed: {e}");
        }
    }

    pub fn show(&self) {
        if !self.is_alive() {
            return;
        }
        // SAFETY: hwnd is a live window.  ShowWindow returns the previous
        // visibility state; UpdateWindow returns a success BOOL — both are
        // intentionally ignored here.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOW);
            let _ = UpdateWindow(self.hwnd);
        }
    }

    /// Dispatch every message currently queued for this thread, then return.
    /// Never waits for new messages.
    pub fn pump_messages(&self) {
        let mut msg = MSG::default();

        // SAFETY: &mut msg is a valid MSG pointer; HWND::default() retrieves
        // messages for all windows on this thread; 0,0 filter accepts all.
        while unsafe { PeekMessageW(&mut msg, HWND::default(), 0, 0, PM_REMOVE) }.as_bool() {
            // SAFETY: msg was populated by a successful PeekMessageW call.
            // TranslateMessage return value (whether it generated WM_CHAR)
            // and DispatchMessageW's LRESULT are intentionally unused.
            unsafe {
                let _ = TranslateMessage(&msg);
                let _ = DispatchMessageW(&msg);
            }
        }
    }

    /// Pump pending messages and return the oldest translated event.
    pub fn poll_event(&mut self) -> Option<Event> {
        self.pump_messages();
        self.state.try_borrow_mut().ok()?.pop_event()
    }

    /// Current client-area size; `{0, 0}` once the window is gone.
    pub fn size(&self) -> WindowSize {
        if !self.is_open() {
            return WindowSize::default();
        }
        match Win32Host::new(self.hwnd).client_rect() {
            Ok(rect) => WindowSize {
                width: u32::try_from(rect.width()).unwrap_or(0),
                height: u32::try_from(rect.height()).unwrap_or(0),
            },
            Err(_) => WindowSize::default(),
        }
    }

    /// Switch between the normal and the captured cursor.
    ///
    /// Setting the current mode does nothing.  Fails with
    /// [`Error::InvalidWindow`] once the window is gone, and with the
    /// underlying Win32 error if capture cannot be established.
    pub fn set_cursor_mode(&self, mode: CursorMode) -> Result<()> {
        let mut state = self.state.try_borrow_mut().map_err(|_| Error::WindowBusy)?;
        if !self.is_alive() {
            return Err(Error::InvalidWindow);
        }
        capture::set_cursor_mode(&mut state, &mut Win32Host::new(self.hwnd), mode)
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.state
            .try_borrow()
            .map_or(CursorMode::Normal, |s| s.cursor_mode())
    }

    /// The window's `HWND` as an opaque pointer.
    pub fn native_handle(&self) -> *mut c_void {
        self.handle().as_ptr()
    }

    /// The window's identity as a plain value, usable as a map key or to
    /// match the `handle` of a [`NativeMessage`] seen by a hook.
    pub fn handle(&self) -> NativeHandle {
        handle_of(self.hwnd)
    }

    pub fn native_win32(&self) -> Win32Handle {
        Win32Handle {
            hwnd: self.hwnd,
            hinstance: self.hinstance,
        }
    }

    fn is_alive(&self) -> bool {
        // SAFETY: IsWindow accepts any value and only reports whether it names
        // an existing window.
        unsafe { IsWindow(self.hwnd) }.as_bool()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        let handle = handle_of(self.hwnd);
        let alive = self.is_alive();

        // Never leave the global clip / hidden cursor behind.
        if alive {
            match self.state.try_borrow_mut() {
                Ok(mut state) => {
                    capture::release_if_captured(&mut state, &mut Win32Host::new(self.hwnd))
                }
                Err(_) => log::warn!("window {handle:?} dropped during dispatch; cursor not released"),
            }
        }

        // Clear the association first so the messages DestroyWindow sends
        // find no state.
        registry::unbind(handle);

        if alive {
            // SAFETY: hwnd is a live window created on this thread.
            if let Err(e) = unsafe { DestroyWindow(self.hwnd) } {
                log::warn!("DestroyWindow failed for {handle:?}: {e}");
            }
        }
        log::debug!("window {handle:?} released");
    }
}

// ── Window class registration ─────────────────────────────────────────────────

fn register_class(hinstance: HINSTANCE) -> Result<()> {
    // SAFETY: LoadCursorW with IDC_ARROW always succeeds; the arrow cursor is
    // a built-in resource guaranteed to exist on all Windows versions.
    let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }.map_err(win32_error("LoadCursorW"))?;

    let wndclass = WNDCLASSEXW {
        // WNDCLASSEXW is ~80 bytes; the cast to u32 is always lossless.
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wnd_proc),
        hInstance: hinstance,
        hCursor: cursor,
        lpszClassName: CLASS_NAME,
        ..Default::default()
    };

    // SAFETY: wndclass is fully initialised with valid handles;
    // CLASS_NAME is a valid null-terminated UTF-16 string literal.
    let atom = unsafe { RegisterClassExW(&wndclass) };
    if atom == 0 {
        let err = last_error("RegisterClassExW");
        // Every window after the first finds the class already registered.
        if !matches!(err, Error::Win32 { code, .. } if code == ERROR_CLASS_ALREADY_EXISTS.0) {
            return Err(err);
        }
    }

    Ok(())
}

/// Outer window size that yields the requested client size.
fn outer_size(width: u32, height: u32) -> (i32, i32) {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    let mut rect = RECT {
        left: 0,
        top: 0,
        right: width,
        bottom: height,
    };

    // SAFETY: &mut rect is a valid in/out pointer for the duration of the call.
    match unsafe { AdjustWindowRectEx(&mut rect, WS_OVERLAPPEDWINDOW, FALSE, WINDOW_EX_STYLE(0)) } {
        Ok(()) => (rect.right - rect.left, rect.bottom - rect.top),
        Err(e) => {
            log::warn!("AdjustWindowRectEx failed ({e}); using client size as window size");
            (width, height)
        }
    }
}

// ── Window procedure ──────────────────────────────────────────────────────────

// SAFETY: wnd_proc is registered as lpfnWndProc in WNDCLASSEXW.
// Windows guarantees that hwnd, msg, wparam, and lparam are valid for the
// lifetime of this call; we must not store hwnd beyond the message handler.
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let handle = handle_of(hwnd);

    if msg == WM_NCCREATE {
        if registry::bind_pending(handle) {
            log::trace!("bound window state to {handle:?}");
        }
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }

    // Messages before WM_NCCREATE (WM_GETMINMAXINFO) and after teardown have
    // no state to translate into.
    let Some(state) = registry::lookup(handle) else {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    };

    let message = NativeMessage {
        handle,
        message: msg,
        wparam: wparam.0,
        lparam: lparam.0,
    };

    let window_hook = state.try_borrow().ok().and_then(|s| s.hook());
    hook::notify(window_hook, &message);

    let disposition = match state.try_borrow_mut() {
        Ok(mut s) => translate(&mut s, &mut Win32Host::new(hwnd), &message),
        Err(_) => {
            log::warn!("re-entrant message {msg:#06x} for {handle:?}; using default processing");
            Disposition::Default
        }
    };

    if msg == WM_NCDESTROY {
        registry::unbind(handle);
    }

    match disposition {
        Disposition::Handled => LRESULT(0),
        Disposition::Default => DefWindowProcW(hwnd, msg, wparam, lparam),
        Disposition::Destroy => {
            // The state borrow is released; WM_DESTROY may re-enter safely.
            if let Err(e) = DestroyWindow(hwnd) {
                log::warn!("DestroyWindow failed for {handle:?}: {e}");
            }
            LRESULT(0)
        }
    }
}

// ── Error helpers ─────────────────────────────────────────────────────────────

fn handle_of(hwnd: HWND) -> NativeHandle {
    NativeHandle(hwnd.0 as isize)
}

/// Capture the current Win32 last-error code and wrap it in an `Error`.
///
/// Call immediately after a Win32 function that signals failure — `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
fn last_error(function: &'static str) -> Error {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    Error::Win32 {
        function,
        code: code.0,
    }
}

/// Map a `windows::core::Error` to an `Error` that names the failing call.
///
/// The windows crate has already read `GetLastError` into the HRESULT; unwrap
/// it so the code matches what `last_error` reports.
pub(crate) fn win32_error(function: &'static str) -> impl FnOnce(windows::core::Error) -> Error {
    move |e| Error::Win32 {
        function,
        code: win32_code(e.code().0),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::{SendMessageW, WM_SIZE};

    fn drain(window: &Window) {
        while window.state.borrow_mut().pop_event().is_some() {}
    }

    fn send_size(hwnd: HWND, width: u16, height: u16) -> LRESULT {
        let lparam = (isize::from(height) << 16) | isize::from(width);
        // SAFETY: hwnd is a live window on this thread; WM_SIZE carries no
        // pointers.
        unsafe { SendMessageW(hwnd, WM_SIZE, WPARAM(0), LPARAM(lparam)) }
    }

    #[test]
    fn bound_window_translates_sent_messages() {
        let window = Window::create("casement bound", 64, 64).expect("create");
        drain(&window);

        send_size(window.hwnd, 20, 10);
        assert_eq!(
            window.state.borrow_mut().pop_event(),
            Some(Event::Resize {
                width: 20,
                height: 10
            })
        );
    }

    #[test]
    fn unassociated_window_falls_through_to_default_processing() {
        let window = Window::create("casement unbound", 64, 64).expect("create");
        drain(&window);

        assert!(registry::unbind(window.handle()).is_some());
        send_size(window.hwnd, 20, 10);

        assert_eq!(window.state.borrow().pending_events(), 0);
        assert!(window.is_open());
    }

    #[test]
    fn drop_clears_the_association() {
        let window = Window::create("casement drop", 64, 64).expect("create");
        let handle = window.handle();
        assert!(registry::lookup(handle).is_some());

        drop(window);
        assert!(registry::lookup(handle).is_none());
    }
}
