//! System clipboard adapter backed by arboard.

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Writes transcripts to the system clipboard via arboard.
///
/// Construction is free; the actual clipboard handle is opened per
/// write, so a headless environment only fails at copy time.
#[derive(Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

// arboard handles are not Send, so the whole open-write sequence runs
// inside one blocking task.
fn write_text(text: &str) -> Result<(), ClipboardError> {
    let mut handle =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    handle
        .set_text(text)
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || write_text(&text))
            .await
            .map_err(|e| ClipboardError::WriteFailed(format!("clipboard task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_is_constructible_without_a_display() {
        // Opening the clipboard is deferred to copy(), so this works
        // even on CI machines with no display server.
        let _adapter = ArboardClipboard::new();
        let _default = ArboardClipboard::default();
    }
}
