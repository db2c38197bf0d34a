// ── Cursor capture controller ─────────────────────────────────────────────────
//
// Two states, `Normal` (initial) and `CapturedHidden`, driven only by
// `set_cursor_mode`.  While captured the cursor is hidden, clipped to the
// client rectangle and parked at the client centre; the translator then turns
// every move away from the centre into a `MouseDelta` and warps back.

use crate::error::{Error, Result};
use crate::event::CursorMode;

use super::host::{CursorHost, Point, Rect};
use super::state::WindowState;

/// Transition `state` to `mode`.
///
/// Setting the current mode is a no-op and touches no OS state.  Entering
/// capture fails (and leaves the window in `Normal`, cursor visible, no clip)
/// if the client rectangle cannot be read or the clip cannot be installed.
pub fn set_cursor_mode<H: CursorHost>(
    state: &mut WindowState,
    host: &mut H,
    mode: CursorMode,
) -> Result<()> {
    if !state.is_live() {
        return Err(Error::InvalidWindow);
    }
    if state.cursor_mode() == mode {
        return Ok(());
    }

    match mode {
        CursorMode::CapturedHidden => capture(state, host),
        CursorMode::Normal => {
            release(state, host);
            Ok(())
        }
    }
}

/// Return to `Normal` if captured, without the liveness check.
///
/// Used on teardown paths (WM_DESTROY, drop) where the window is already
/// marked closed but its handle is still valid for the release calls.
pub fn release_if_captured<H: CursorHost>(state: &mut WindowState, host: &mut H) {
    if state.cursor_mode() == CursorMode::CapturedHidden {
        release(state, host);
    }
}

fn capture<H: CursorHost>(state: &mut WindowState, host: &mut H) -> Result<()> {
    host.hide_cursor();

    let client = match host.client_rect() {
        Ok(client) => client,
        Err(e) => {
            host.show_cursor();
            log::warn!("captured cursor mode not entered: {e}");
            return Err(e);
        }
    };

    let clip = screen_rect(host, client);
    if let Err(e) = host.clip_cursor(Some(clip)) {
        host.show_cursor();
        log::warn!("captured cursor mode not entered: {e}");
        return Err(e);
    }

    let center = host.client_to_screen(client.center());
    state.set_cursor_mode_flag(CursorMode::CapturedHidden);
    state.arm_suppression();
    host.set_cursor_pos(center);

    log::debug!(
        "cursor captured: clip {}x{} at ({}, {}), centre ({}, {})",
        clip.width(),
        clip.height(),
        clip.left,
        clip.top,
        center.x,
        center.y
    );
    Ok(())
}

fn release<H: CursorHost>(state: &mut WindowState, host: &mut H) {
    if let Err(e) = host.clip_cursor(None) {
        log::warn!("failed to release cursor clip: {e}");
    }
    host.show_cursor();
    state.disarm_suppression();
    state.set_cursor_mode_flag(CursorMode::Normal);
    log::debug!("cursor released");
}

fn screen_rect<H: CursorHost>(host: &H, client: Rect) -> Rect {
    let top_left = host.client_to_screen(Point {
        x: client.left,
        y: client.top,
    });
    let bottom_right = host.client_to_screen(Point {
        x: client.right,
        y: client.bottom,
    });
    Rect {
        left: top_left.x,
        top: top_left.y,
        right: bottom_right.x,
        bottom: bottom_right.y,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::host::testing::{Call, RecordingHost};
    use crate::platform::NativeHandle;

    fn live_state() -> WindowState {
        let mut state = WindowState::default();
        state.bind(NativeHandle(0x1234));
        state
    }

    #[test]
    fn entering_capture_hides_clips_and_warps_to_center() {
        let mut state = live_state();
        let mut host = RecordingHost::new(640, 480);

        set_cursor_mode(&mut state, &mut host, CursorMode::CapturedHidden).expect("capture");

        let clip = Rect {
            left: 100,
            top: 50,
            right: 740,
            bottom: 530,
        };
        assert_eq!(
            host.calls,
            vec![
                Call::Hide,
                Call::Clip(Some(clip)),
                Call::Warp(Point { x: 420, y: 290 }),
            ]
        );
        assert_eq!(state.cursor_mode(), CursorMode::CapturedHidden);
        assert!(state.is_suppressing());
        assert!(!host.cursor_visible());
    }

    #[test]
    fn setting_the_current_mode_twice_has_no_extra_side_effects() {
        let mut state = live_state();
        let mut host = RecordingHost::new(640, 480);

        set_cursor_mode(&mut state, &mut host, CursorMode::CapturedHidden).expect("capture");
        set_cursor_mode(&mut state, &mut host, CursorMode::CapturedHidden).expect("capture again");
        assert_eq!(host.warps(), 1);
        assert_eq!(host.clips(), 1);

        set_cursor_mode(&mut state, &mut host, CursorMode::Normal).expect("release");
        let after_release = host.calls.len();
        set_cursor_mode(&mut state, &mut host, CursorMode::Normal).expect("release again");
        assert_eq!(host.calls.len(), after_release);
    }

    #[test]
    fn normal_to_normal_makes_no_os_calls() {
        let mut state = live_state();
        let mut host = RecordingHost::new(640, 480);
        set_cursor_mode(&mut state, &mut host, CursorMode::Normal).expect("no-op");
        assert!(host.calls.is_empty());
    }

    #[test]
    fn releasing_restores_visibility_and_clears_clip() {
        let mut state = live_state();
        let mut host = RecordingHost::new(640, 480);

        set_cursor_mode(&mut state, &mut host, CursorMode::CapturedHidden).expect("capture");
        set_cursor_mode(&mut state, &mut host, CursorMode::Normal).expect("release");

        assert_eq!(state.cursor_mode(), CursorMode::Normal);
        assert!(!state.is_suppressing());
        assert!(host.cursor_visible());
        assert_eq!(host.clip, None);
        assert_eq!(host.calls[host.calls.len() - 2..], [Call::Clip(None), Call::Show]);
    }

    #[test]
    fn client_rect_failure_is_reported_and_rolled_back() {
        let mut state = live_state();
        let mut host = RecordingHost::new(640, 480);
        host.fail_client_rect = true;

        let err = set_cursor_mode(&mut state, &mut host, CursorMode::CapturedHidden).unwrap_err();
        assert!(matches!(
            err,
            Error::Win32 {
                function: "GetClientRect",
                ..
            }
        ));
        assert_eq!(state.cursor_mode(), CursorMode::Normal);
        assert!(host.cursor_visible());
        assert_eq!(host.warps(), 0);
    }

    #[test]
    fn clip_failure_is_reported_and_rolled_back() {
        let mut state = live_state();
        let mut host = RecordingHost::new(640, 480);
        host.fail_clip = true;

        let err = set_cursor_mode(&mut state, &mut host, CursorMode::CapturedHidden).unwrap_err();
        assert!(matches!(err, Error::Win32 { function: "ClipCursor", .. }));
        assert_eq!(state.cursor_mode(), CursorMode::Normal);
        assert!(!state.is_suppressing());
        assert!(host.cursor_visible());
        assert_eq!(host.clip, None);
    }

    #[test]
    fn unbound_or_closed_window_is_rejected() {
        let mut host = RecordingHost::new(640, 480);

        let mut unbound = WindowState::default();
        let err = set_cursor_mode(&mut unbound, &mut host, CursorMode::CapturedHidden).unwrap_err();
        assert!(matches!(err, Error::InvalidWindow));

        let mut closed = live_state();
        closed.mark_closed();
        let err = set_cursor_mode(&mut closed, &mut host, CursorMode::Normal).unwrap_err();
        assert!(matches!(err, Error::InvalidWindow));
        assert!(host.calls.is_empty());
    }

    #[test]
    fn release_if_captured_works_after_close() {
        let mut state = live_state();
        let mut host = RecordingHost::new(640, 480);
        set_cursor_mode(&mut state, &mut host, CursorMode::CapturedHidden).expect("capture");

        state.mark_closed();
        release_if_captured(&mut state, &mut host);
        assert_eq!(state.cursor_mode(), CursorMode::Normal);
        assert!(host.cursor_visible());
        assert_eq!(host.clip, None);

        let calls = host.calls.len();
        release_if_captured(&mut state, &mut host);
        assert_eq!(host.calls.len(), calls);
    }
}
