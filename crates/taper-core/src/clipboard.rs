//! Clipboard seam for generated clinical text.
//!
//! EMR summaries and scale breakdowns are copied out of the tool with
//! fire-and-forget semantics: a failed write is logged and swallowed, and the
//! caller's flow continues uninterrupted. A repeat copy supersedes the
//! previous one, so there is nothing to retry or cancel.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Trait implemented by the system-clipboard collaborator.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Best-effort copy. Returns whether the write succeeded; failures are
/// logged via `tracing` and never propagate.
pub fn copy_text(clipboard: &dyn Clipboard, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed, continuing without copy");
            false
        }
    }
}

/// Clipboard for environments that have none. Every write fails, which
/// exercises the swallow path in [`copy_text`].
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "no system clipboard in this environment".to_string(),
        ))
    }
}
