//! Transcription result value object

use serde::{Deserialize, Serialize};

/// A completed transcription as returned by the backend.
///
/// `text` is the raw transcript; `formatted_text` carries per-sentence
/// timestamps and is what gets copied and downloaded. Both fields are
/// required; a response missing either is rejected as malformed rather
/// than passed through loosely typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub formatted_text: String,
}
