//! Failure classification
//!
//! Maps every backend failure signal into a fixed user-facing category
//! with canned remediation text. Pure mapping, no I/O, total over the
//! signal space.

use crate::domain::error::{ErrorCategory, UserError};

use super::ports::BackendError;

/// Banner prefixed to every classified error message
pub const ERROR_BANNER: &str = "An error occurred during transcription.";

/// Classify a backend failure into a user-facing error.
pub fn classify(error: &BackendError) -> UserError {
    let (category, detail) = match error {
        BackendError::Status { code: 500, .. } => (
            ErrorCategory::ServerError,
            "The server could not process this audio. Make sure the URL points to a \
             directly downloadable audio file; for streaming video, download the audio \
             to your device first."
                .to_string(),
        ),
        BackendError::Status { code: 413, .. } => (
            ErrorCategory::PayloadTooLarge,
            "File size too large. Please upload a smaller file.".to_string(),
        ),
        BackendError::Status { code: 415, .. } => (
            ErrorCategory::UnsupportedFormat,
            "Unsupported file format. Please use MP3, WAV, MP4, or M4A.".to_string(),
        ),
        BackendError::Status { code: 0, .. } | BackendError::Network(_) => (
            ErrorCategory::NetworkError,
            "Network error. Please check your connection.".to_string(),
        ),
        BackendError::Timeout(_) => (
            ErrorCategory::TimedOut,
            "The request timed out. Please try again.".to_string(),
        ),
        BackendError::MalformedResponse(detail) => (
            ErrorCategory::Unknown,
            format!("The server sent an unreadable response: {detail}"),
        ),
        BackendError::Status { message, .. } => {
            let detail = if message.trim().is_empty() {
                "Unknown error occurred.".to_string()
            } else {
                message.clone()
            };
            (ErrorCategory::Unknown, detail)
        }
    };

    UserError::new(category, format!("{ERROR_BANNER} {detail}"))
}
