//! Domain layer - Core business logic
//!
//! Contains value objects, validation policy, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod language;
pub mod source;
pub mod transcription;

// Re-export common types
pub use config::AppConfig;
pub use error::{ConfigError, ErrorCategory, InvalidLanguageError, UserError};
pub use language::{LanguageCode, ALL_LANGUAGES};
pub use source::{validate, FileCandidate, SourceCandidate, SourceRejection};
pub use transcription::{TranscriptionRequest, TranscriptionResult};
