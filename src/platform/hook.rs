// ── Native message hooks ──────────────────────────────────────────────────────
//
// A hook observes every native message a window receives, before casement
// translates it.  There are two places to install one:
//
//   • per window, through `WindowConfig::with_hook` (explicitly owned), and
//   • process-wide, through `set_native_message_hook` — a single atomic slot
//     with last-writer-wins replace semantics.
//
// The slot stores a plain `fn` pointer, so installing from another thread is
// a release store and reading it on the dispatch thread is an acquire load.

#![allow(unsafe_code)]

use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

use super::NativeHandle;

/// The raw message triple delivered to the window procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeMessage {
    pub handle: NativeHandle,
    pub message: u32,
    pub wparam: usize,
    pub lparam: isize,
}

/// Observer for raw native messages.  Its return is not consulted; the
/// message is always translated afterwards.
pub type NativeMessageHook = fn(&NativeMessage);

static GLOBAL_HOOK: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

/// Install (or replace, or with `None` clear) the process-wide hook.
///
/// Returns the previously installed hook.
pub fn set_native_message_hook(hook: Option<NativeMessageHook>) -> Option<NativeMessageHook> {
    let raw = hook.map_or(ptr::null_mut(), |f| f as *mut ());
    let previous = GLOBAL_HOOK.swap(raw, Ordering::AcqRel);
    log::trace!("native message hook {}", if hook.is_some() { "installed" } else { "cleared" });
    from_raw(previous)
}

/// The currently installed process-wide hook.
pub fn native_message_hook() -> Option<NativeMessageHook> {
    from_raw(GLOBAL_HOOK.load(Ordering::Acquire))
}

/// Run the process-wide hook, then the window's own hook, for `message`.
pub fn notify(window_hook: Option<NativeMessageHook>, message: &NativeMessage) {
    if let Some(hook) = native_message_hook() {
        hook(message);
    }
    if let Some(hook) = window_hook {
        hook(message);
    }
}

fn from_raw(raw: *mut ()) -> Option<NativeMessageHook> {
    if raw.is_null() {
        return None;
    }
    // SAFETY: the only non-null values ever stored in GLOBAL_HOOK come from
    // `set_native_message_hook`, which casts a valid `NativeMessageHook`.
    // Function and data pointers have the same size on every supported
    // target, and fn items live for the whole program.
    Some(unsafe { std::mem::transmute::<*mut (), NativeMessageHook>(raw) })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    static GLOBAL_CALLS: AtomicUsize = AtomicUsize::new(0);
    static REPLACEMENT_CALLS: AtomicUsize = AtomicUsize::new(0);
    static WINDOW_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn global(_: &NativeMessage) {
        GLOBAL_CALLS.fetch_add(1, Ordering::SeqCst);
    }

    fn replacement(_: &NativeMessage) {
        REPLACEMENT_CALLS.fetch_add(1, Ordering::SeqCst);
    }

    fn window(message: &NativeMessage) {
        assert_eq!(message.message, 0x0010);
        WINDOW_CALLS.fetch_add(1, Ordering::SeqCst);
    }

    fn message() -> NativeMessage {
        NativeMessage {
            handle: NativeHandle(7),
            message: 0x0010,
            wparam: 0,
            lparam: 0,
        }
    }

    // The global slot is process-wide, so everything touching it lives in this
    // one test.
    #[test]
    fn global_slot_is_last_writer_wins() {
        assert!(set_native_message_hook(Some(global)).is_none());
        notify(None, &message());
        assert_eq!(GLOBAL_CALLS.load(Ordering::SeqCst), 1);

        // Installed from another thread, observed here.
        std::thread::spawn(|| {
            let previous = set_native_message_hook(Some(replacement));
            assert!(previous.is_some());
        })
        .join()
        .expect("installer thread");

        notify(Some(window), &message());
        assert_eq!(GLOBAL_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(REPLACEMENT_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(WINDOW_CALLS.load(Ordering::SeqCst), 1);

        assert!(set_native_message_hook(None).is_some());
        assert!(native_message_hook().is_none());
        notify(None, &message());
        assert_eq!(REPLACEMENT_CALLS.load(Ordering::SeqCst), 1);
    }
}
