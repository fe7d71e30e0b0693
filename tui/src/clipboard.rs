//! Clipboard backends: the system clipboard and the OSC 52 terminal escape.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use folio_core::{ClipboardError, ClipboardSink};

/// System clipboard through `arboard`.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("system clipboard".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_owned())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

/// Build the OSC 52 sequence that asks the terminal to set its clipboard.
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Clipboard writes through the terminal (works over SSH).
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

/// Primary and fallback sinks used by the page's copy action.
pub struct Clipboards {
    pub primary: Box<dyn ClipboardSink>,
    pub fallback: Box<dyn ClipboardSink>,
}

impl Clipboards {
    /// System clipboard first, then OSC 52 on stdout.
    #[must_use]
    pub fn system() -> Self {
        Self {
            primary: Box::new(SystemClipboard::new()),
            fallback: Box::new(Osc52Clipboard::stdout()),
        }
    }
}
