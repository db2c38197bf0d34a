// ── Native message translator ─────────────────────────────────────────────────
//
// Turns one native message into zero, one or two portable events on the
// window's queue, and tells the window procedure what to do next.  Never
// fails: unknown codes become `Unknown`, unhandled messages go to default
// processing.
//
// Relative motion while captured is a two-step protocol with the OS:
//
//   1. every WM_MOUSEMOVE is queued as an absolute `MouseMove`;
//   2. if the one-shot suppression flag is armed, this move is the echo of our
//      own warp: disarm and stop;
//   3. otherwise a move away from the client centre queues a `MouseDelta`,
//      arms the flag and warps the cursor back to the centre.
//
// Step 2 is what keeps the warp from feeding back into another delta.

use crate::event::{CursorMode, Event};

use super::capture;
use super::codes::*;
use super::hook::NativeMessage;
use super::host::CursorHost;
use super::keymap::{is_button_press, map_key, map_mouse_button};
use super::state::WindowState;

/// What the window procedure must do after translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Fully handled; return 0.
    Handled,
    /// Forward to the platform's default window procedure.
    Default,
    /// Handled; now destroy the native window, then return 0.
    ///
    /// Destruction re-enters the window procedure (WM_DESTROY), so it has to
    /// happen after the state borrow used for translation is released.
    Destroy,
}

/// Translate `message` for the window backed by `state`.
pub fn translate<H: CursorHost>(
    state: &mut WindowState,
    host: &mut H,
    message: &NativeMessage,
) -> Disposition {
    let NativeMessage {
        message: id,
        wparam,
        lparam,
        ..
    } = *message;

    match id {
        // ── Lifecycle ─────────────────────────────────────────────────────────
        WM_CLOSE => {
            state.mark_closed();
            state.push_event(Event::Close);
            Disposition::Destroy
        }

        WM_DESTROY => {
            // The handle is still valid here; give back the global cursor
            // clip and visibility before it goes away.
            capture::release_if_captured(state, host);
            state.mark_closed();
            Disposition::Handled
        }

        // ── Layout ────────────────────────────────────────────────────────────
        WM_SIZE => {
            let lparam = lparam as usize;
            state.push_event(Event::Resize {
                width: u32::from(loword(lparam)),
                height: u32::from(hiword(lparam)),
            });
            Disposition::Handled
        }

        WM_ENTERSIZEMOVE => {
            state.push_event(Event::ResizeBegin);
            Disposition::Handled
        }

        WM_EXITSIZEMOVE => {
            state.push_event(Event::ResizeEnd);
            Disposition::Handled
        }

        // ── Keyboard ──────────────────────────────────────────────────────────
        WM_KEYDOWN | WM_SYSKEYDOWN => {
            state.push_event(Event::Key {
                key: map_key(wparam),
                pressed: true,
                repeated: lparam & KEY_REPEAT_BIT != 0,
            });
            system_key_disposition(id)
        }

        WM_KEYUP | WM_SYSKEYUP => {
            state.push_event(Event::Key {
                key: map_key(wparam),
                pressed: false,
                repeated: false,
            });
            system_key_disposition(id)
        }

        // ── Mouse ─────────────────────────────────────────────────────────────
        WM_MOUSEMOVE => {
            mouse_move(state, host, x_from_lparam(lparam), y_from_lparam(lparam));
            Disposition::Handled
        }

        WM_LBUTTONDOWN | WM_LBUTTONUP | WM_RBUTTONDOWN | WM_RBUTTONUP | WM_MBUTTONDOWN
        | WM_MBUTTONUP | WM_XBUTTONDOWN | WM_XBUTTONUP => {
            state.push_event(Event::MouseButton {
                button: map_mouse_button(id, wparam),
                pressed: is_button_press(id),
                x: x_from_lparam(lparam),
                y: y_from_lparam(lparam),
            });
            Disposition::Handled
        }

        _ => Disposition::Default,
    }
}

/// System keys are reported but still given to the default procedure, which
/// implements Alt+F4 and the Alt menu accelerator.
fn system_key_disposition(id: u32) -> Disposition {
    if id == WM_SYSKEYDOWN || id == WM_SYSKEYUP {
        Disposition::Default
    } else {
        Disposition::Handled
    }
}

fn mouse_move<H: CursorHost>(state: &mut WindowState, host: &mut H, x: i32, y: i32) {
    state.push_event(Event::MouseMove { x, y });

    if state.cursor_mode() != CursorMode::CapturedHidden {
        return;
    }
    if state.take_suppression() {
        return;
    }

    // Without a client rectangle there is no centre to measure against.
    let Ok(client) = host.client_rect() else {
        return;
    };
    let center = client.center();
    let (dx, dy) = (x - center.x, y - center.y);
    if dx == 0 && dy == 0 {
        return;
    }

    state.push_event(Event::MouseDelta { dx, dy });
    let screen = host.client_to_screen(center);
    state.arm_suppression();
    host.set_cursor_pos(screen);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
