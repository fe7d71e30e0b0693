//! Clipboard writes with a fallback path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Somewhere text can be copied to.
pub trait ClipboardSink {
    fn name(&self) -> &'static str;

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy `text` through `primary`, falling back to `fallback`.
///
/// Returns `true` if either write succeeded.
pub fn copy_with_fallback(
    text: &str,
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
) -> bool {
    match primary.set_text(text) {
        Ok(()) => return true,
        Err(err) => {
            tracing::warn!(sink = primary.name(), %err, "Clipboard write failed, trying fallback");
        }
    }

    match fallback.set_text(text) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(sink = fallback.name(), %err, "Clipboard fallback failed");
            false
        }
    }
}

/// In-process clipboard, also usable as a failing sink in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail: bool,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every write fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("memory clipboard disabled".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
