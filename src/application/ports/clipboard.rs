//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Why a clipboard write did not land.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    /// No clipboard exists in this environment (headless session,
    /// missing display server).
    #[error("No clipboard available on this system: {0}")]
    Unavailable(String),

    /// A clipboard exists but the write was refused.
    #[error("Could not write to the clipboard: {0}")]
    WriteFailed(String),
}

/// Port the result action coordinator uses to copy the formatted
/// transcript after a successful transcription.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Place `text` on the system clipboard, replacing its contents.
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().copy(text).await
    }
}
