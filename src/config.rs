// ── Window configuration ──────────────────────────────────────────────────────
//
// Everything needed to construct a `Window`.  Can be built in code or loaded
// from a small JSON document, e.g.
//
//     { "title": "Viewer", "width": 1280, "height": 720 }
//
// No `unsafe` — pure safe Rust + serde_json.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::hook::NativeMessageHook;

/// Construction parameters for a window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Title bar text (UTF-8).
    pub title: String,
    /// Requested client-area width in pixels.
    pub width: u32,
    /// Requested client-area height in pixels.
    pub height: u32,
    /// Observer invoked with every native message this window receives,
    /// before the message is translated.  Not serialized.
    #[serde(skip)]
    pub hook: Option<NativeMessageHook>,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            hook: None,
        }
    }

    /// Attach a per-window native message hook.
    pub fn with_hook(mut self, hook: NativeMessageHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Parse a configuration from JSON text.  The result is validated.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject configurations that cannot produce a window.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
