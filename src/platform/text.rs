// ── UTF-8 → UTF-16 ────────────────────────────────────────────────────────────

use crate::error::{Error, Result};

/// Convert `text` to a null-terminated UTF-16 buffer for wide Win32 calls.
///
/// Rust strings are always valid UTF-8, so the only thing that can go wrong is
/// an interior NUL, which the OS would silently truncate at.  That is rejected
/// up front so a title is never partially applied.
pub fn to_wide(text: &str) -> Result<Vec<u16>> {
    if text.contains('\0') {
        return Err(Error::StringConversion {
            reason: "text contains an interior NUL",
        });
    }
    Ok(text.encode_utf16().chain(std::iter::once(0)).collect())
}
