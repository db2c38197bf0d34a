// ── Native handle → window state table ────────────────────────────────────────
//
// The window procedure finds the state for an HWND here instead of through a
// raw pointer in GWLP_USERDATA.  A window being created is staged in the
// `pending` slot; the first WM_NCCREATE on this thread binds it to its new
// handle.  Entries are erased on WM_NCDESTROY and again when the facade drops,
// so a late message for a dead handle finds nothing and falls through to
// default processing.
//
// The table is thread-local: Win32 delivers a window's messages only on the
// thread that created it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::state::WindowState;
use super::NativeHandle;

/// State shared between the facade and the window procedure on one thread.
pub type SharedState = Rc<RefCell<WindowState>>;

#[derive(Default)]
struct Registry {
    pending: Option<SharedState>,
    bound: HashMap<NativeHandle, SharedState>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Stage `state` for the next window created on this thread.
pub fn stage(state: SharedState) {
    REGISTRY.with(|r| r.borrow_mut().pending = Some(state));
}

/// Drop a staged state that never got a handle (creation failed).
pub fn clear_pending() {
    REGISTRY.with(|r| r.borrow_mut().pending = None);
}

/// Bind the staged state to `handle`.  Returns `false` when nothing was staged
/// (a window of our class created by someone else).
pub fn bind_pending(handle: NativeHandle) -> bool {
    REGISTRY.with(|r| {
        let mut r = r.borrow_mut();
        let Some(state) = r.pending.take() else {
            return false;
        };
        // The state is not borrowed elsewhere during CreateWindowExW.
        if let Ok(mut s) = state.try_borrow_mut() {
            s.bind(handle);
        }
        r.bound.insert(handle, state);
        true
    })
}

pub fn lookup(handle: NativeHandle) -> Option<SharedState> {
    REGISTRY.with(|r| r.borrow().bound.get(&handle).cloned())
}

pub fn unbind(handle: NativeHandle) -> Option<SharedState> {
    REGISTRY.with(|r| r.borrow_mut().bound.remove(&handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared() -> SharedState {
        Rc::new(RefCell::new(WindowState::default()))
    }

    #[test]
    fn unknown_handle_has_no_state() {
        assert!(lookup(NativeHandle(0xDEAD)).is_none());
    }

    #[test]
    fn staged_state_binds_to_first_created_handle() {
        let state = shared();
        stage(Rc::clone(&state));

        assert!(bind_pending(NativeHandle(10)));
        // Only one binding per staging.
        assert!(!bind_pending(NativeHandle(11)));

        let found = lookup(NativeHandle(10)).expect("bound");
        assert!(Rc::ptr_eq(&found, &state));
        assert_eq!(state.borrow().handle(), Some(NativeHandle(10)));
        assert!(lookup(NativeHandle(11)).is_none());

        assert!(unbind(NativeHandle(10)).is_some());
        assert!(lookup(NativeHandle(10)).is_none());
        assert!(unbind(NativeHandle(10)).is_none());
    }

    #[test]
    fn cleared_pending_is_never_bound() {
        stage(shared());
        clear_pending();
        assert!(!bind_pending(NativeHandle(20)));
    }

    #[test]
    fn table_is_per_thread() {
        stage(shared());
        assert!(bind_pending(NativeHandle(30)));
        std::thread::spawn(|| assert!(lookup(NativeHandle(30)).is_none()))
            .join()
            .expect("lookup thread");
        unbind(NativeHandle(30));
    }
}
