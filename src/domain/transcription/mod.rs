//! Transcription domain module

mod request;
mod result;

pub use request::TranscriptionRequest;
pub use result::TranscriptionResult;
