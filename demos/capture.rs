//! Opens a window and logs every event.
//!
//! Space toggles the captured cursor; Escape releases it; closing the window
//! exits.  Run with `RUST_LOG=debug` to see lifecycle and capture logging.

#[cfg(windows)]
fn main() -> casement::Result<()> {
    use casement::{CursorMode, Event, Key, Window, WindowConfig};

    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => WindowConfig::load(path)?,
        None => WindowConfig::new("casement capture demo", 960, 640),
    };

    let mut window = Window::create_with(config)?;
    window.show();

    while window.is_open() {
        while let Some(event) = window.poll_event() {
            match event {
                Event::Key {
                    key: Key::Space,
                    pressed: true,
                    repeated: false,
                } => {
                    let next = match window.cursor_mode() {
                        CursorMode::Normal => CursorMode::CapturedHidden,
                        CursorMode::CapturedHidden => CursorMode::Normal,
                    };
                    window.set_cursor_mode(next)?;
                }
                Event::Key {
                    key: Key::Escape,
                    pressed: true,
                    ..
                } => window.set_cursor_mode(CursorMode::Normal)?,
                Event::MouseMove { .. } => log::trace!("{event:?}"),
                _ => log::info!("{event:?}"),
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("the capture demo needs a Win32 desktop");
}
