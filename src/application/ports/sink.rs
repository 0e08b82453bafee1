//! Transcript sink port interface

use async_trait::async_trait;
use thiserror::Error;

/// Sink errors
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    #[error("Failed to save transcript: {0}")]
    SaveFailed(String),
}

/// Port for persisting a transcript as a file
#[async_trait]
pub trait TranscriptSink: Send + Sync {
    /// Save transcript contents under the given file name.
    ///
    /// # Arguments
    /// * `file_name` - The target file name (e.g. `transcript.txt`)
    /// * `contents` - The transcript text to write
    async fn save(&self, file_name: &str, contents: &str) -> Result<(), SinkError>;
}

/// Blanket implementation for boxed sink types
#[async_trait]
impl TranscriptSink for Box<dyn TranscriptSink> {
    async fn save(&self, file_name: &str, contents: &str) -> Result<(), SinkError> {
        self.as_ref().save(file_name, contents).await
    }
}
