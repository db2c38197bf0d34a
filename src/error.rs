// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in casement return `error::Result<T>`.  Nothing on
// the message-dispatch path returns an error: notification-time problems
// degrade to `Unknown` codes or default processing instead.

/// Every error that casement can produce.
#[derive(Debug)]
pub enum Error {
    /// A Win32 API call returned a failure code.
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code, as `GetLastError()` reports it.
        /// HRESULTs that do not wrap a Win32 code are kept whole.
        code: u32,
    },

    /// A window was requested with a zero width or height.
    InvalidDimensions { width: u32, height: u32 },

    /// The window title could not be converted to a native wide string.
    StringConversion {
        /// Why the conversion was rejected.
        reason: &'static str,
    },

    /// The operation needs a live native window, but it was never created
    /// or has already been destroyed.
    InvalidWindow,

    /// The window state is borrowed by an in-flight message dispatch
    /// (the call was made re-entrantly from inside a message hook).
    WindowBusy,

    /// A standard I/O error while reading a configuration file.
    Io(std::io::Error),

    /// A configuration document could not be parsed.
    Config(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win32 { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "window dimensions must be greater than zero (got {width}x{height})"
                )
            }
            Self::StringConversion { reason } => {
                write!(f, "couldn't convert UTF-8 to UTF-16: {reason}")
            }
            Self::InvalidWindow => f.write_str("the window is not open"),
            Self::WindowBusy => f.write_str("the window is busy dispatching a message"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(e) => write!(f, "invalid window configuration: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

/// Unwrap the Win32 code from an HRESULT.
///
/// `HRESULT_FROM_WIN32` packs a Win32 code as `0x8007xxxx`; this undoes it so
/// every `Error::Win32` carries the same kind of code as `GetLastError()`.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn win32_code(hresult: i32) -> u32 {
    let bits = hresult as u32;
    if bits & 0xFFFF_0000 == 0x8007_0000 {
        bits & 0xFFFF
    } else {
        bits
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
