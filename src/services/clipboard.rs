//! Clipboard backends
//!
//! The system clipboard is tried first. Over SSH or on a headless box there
//! is usually no clipboard server, so the `auto` backend falls back to the
//! OSC 52 escape sequence, which asks the terminal emulator to set the
//! clipboard instead. The terminal never acknowledges that request, so an
//! OSC 52 write only reports [`Delivery::Sent`].

use crate::error::ClipboardError;
use base64::engine::general_purpose::STANDARD as BASE64_STD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Largest payload sent through OSC 52; many terminals drop bigger ones
pub const MAX_OSC52_BYTES: usize = 100 * 1024;

/// How far a successful write is known to have gone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The clipboard owner accepted the text
    Confirmed,
    /// Handed to the terminal; whether it honoured the request is unknown
    Sent,
}

/// Something that can receive copied text
pub trait ClipboardWriter {
    /// Write `text` verbatim
    fn write_text(&mut self, text: &str) -> Result<Delivery, ClipboardError>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

/// Which backend to use, as set in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Build the writer for a configured backend
pub fn create_clipboard(backend: ClipboardBackend) -> Box<dyn ClipboardWriter> {
    match backend {
        ClipboardBackend::Auto => Box::new(<AutoClipboard>::default()),
        ClipboardBackend::System => Box::new(SystemClipboard::default()),
        ClipboardBackend::Osc52 => Box::new(Osc52Clipboard::stdout()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// System clipboard
// ─────────────────────────────────────────────────────────────────────────────

/// OS clipboard through `arboard`, connected on first use
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<Delivery, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("not initialised".to_string()))?;

        if let Err(e) = clipboard.set_text(text.to_owned()) {
            // Drop the handle so the next attempt reconnects
            self.inner = None;
            return Err(ClipboardError::Write(e.to_string()));
        }
        Ok(Delivery::Confirmed)
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OSC 52
// ─────────────────────────────────────────────────────────────────────────────

/// Terminal clipboard via the OSC 52 escape sequence
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
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

/// Build the `ESC ] 52 ; c ; <base64> BEL` sequence
///
/// Oversized payloads are refused rather than truncated so the clipboard
/// never holds a partial snippet.
pub fn osc52_sequence(text: &str) -> Result<String, ClipboardError> {
    let size = text.len();
    if size > MAX_OSC52_BYTES {
        return Err(ClipboardError::PayloadTooLarge {
            size,
            limit: MAX_OSC52_BYTES,
        });
    }
    Ok(format!("\x1b]52;c;{}\x07", BASE64_STD.encode(text.as_bytes())))
}

impl<W: Write> ClipboardWriter for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<Delivery, ClipboardError> {
        let seq = osc52_sequence(text)?;
        self.out.write_all(seq.as_bytes())?;
        self.out.flush()?;
        Ok(Delivery::Sent)
    }

    fn name(&self) -> &'static str {
        "osc52"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Auto
// ─────────────────────────────────────────────────────────────────────────────

/// System clipboard with OSC 52 fallback
///
/// The delivery reported is the one of the backend that took the text, so a
/// fallback write surfaces as [`Delivery::Sent`] rather than a confirmed copy.
pub struct AutoClipboard<P = SystemClipboard, F = Osc52Clipboard<io::Stdout>> {
    primary: P,
    fallback: F,
}

impl Default for AutoClipboard {
    fn default() -> Self {
        Self::new(SystemClipboard::default(), Osc52Clipboard::stdout())
    }
}

impl<P: ClipboardWriter, F: ClipboardWriter> AutoClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ClipboardWriter, F: ClipboardWriter> ClipboardWriter for AutoClipboard<P, F> {
    fn write_text(&mut self, text: &str) -> Result<Delivery, ClipboardError> {
        match self.primary.write_text(text) {
            Ok(delivery) => Ok(delivery),
            Err(err) => {
                debug!(
                    error = %err,
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    "primary clipboard failed, falling back"
                );
                self.fallback.write_text(text).inspect_err(|fallback_err| {
                    warn!(primary = %err, fallback = %fallback_err, "all clipboard backends failed");
                })
            }
        }
    }

    fn name(&self) -> &'static str {
        "auto"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory (tests)
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail_with: Option<String>,
    pub writes: usize,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

#[cfg(test)]
impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<Delivery, ClipboardError> {
        self.writes += 1;
        if let Some(ref reason) = self.fail_with {
            return Err(ClipboardError::Unavailable(reason.clone()));
        }
        self.contents = Some(text.to_string());
        Ok(Delivery::Confirmed)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
