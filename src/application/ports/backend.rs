//! Transcription backend port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::{TranscriptionRequest, TranscriptionResult};

/// Failure signal from the transcription backend.
///
/// Carries enough shape for the classifier to map every failure into a
/// user-facing category; the transport adapter never surfaces raw
/// transport errors past this boundary.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The backend answered with a non-success HTTP status
    #[error("Backend returned HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// The request never produced an HTTP response
    #[error("Network failure: {0}")]
    Network(String),

    /// The request exceeded the transport's bounded wait
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The backend answered 2xx but the body was not a valid result
    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),
}

/// Port for the remote transcription service
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    /// Submit a validated request and wait for the transcription.
    ///
    /// # Arguments
    /// * `request` - The validated file or URL request
    ///
    /// # Returns
    /// The completed transcription or a classified-ready failure signal
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, BackendError>;
}

/// Blanket implementation for boxed backend types
#[async_trait]
impl TranscriptionBackend for Box<dyn TranscriptionBackend> {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, BackendError> {
        self.as_ref().transcribe(request).await
    }
}
