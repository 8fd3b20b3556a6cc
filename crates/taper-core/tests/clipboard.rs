use std::cell::RefCell;

use taper_core::clipboard::{copy_text, Clipboard, ClipboardError, NullClipboard};

/// Test double that records every successful write.
struct RecordingClipboard {
    writes: RefCell<Vec<String>>,
}

impl RecordingClipboard {
    fn new() -> Self {
        Self {
            writes: RefCell::new(Vec::new()),
        }
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[test]
fn successful_write_is_recorded() {
    let clipboard = RecordingClipboard::new();
    assert!(copy_text(&clipboard, "Plan: Supportive treatment."));
    assert_eq!(
        clipboard.writes.borrow().as_slice(),
        ["Plan: Supportive treatment."]
    );
}

#[test]
fn failure_is_swallowed_not_propagated() {
    // Absence of a clipboard must never interrupt the caller.
    assert!(!copy_text(&NullClipboard, "anything"));
}

#[test]
fn repeat_copy_supersedes_previous() {
    let clipboard = RecordingClipboard::new();
    copy_text(&clipboard, "first");
    copy_text(&clipboard, "second");
    assert_eq!(clipboard.writes.borrow().len(), 2);
    assert_eq!(clipboard.writes.borrow().last().map(String::as_str), Some("second"));
}
