//! Filesystem transcript sink

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{SinkError, TranscriptSink};

/// Sink that writes transcripts into a target directory
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path a given file name would be written to
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

#[async_trait]
impl TranscriptSink for FileSink {
    async fn save(&self, file_name: &str, contents: &str) -> Result<(), SinkError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SinkError::SaveFailed(e.to_string()))?;

        fs::write(self.target_path(file_name), contents)
            .await
            .map_err(|e| SinkError::SaveFailed(e.to_string()))
    }
}
