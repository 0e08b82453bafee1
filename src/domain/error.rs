//! Domain error types

use std::fmt;

use thiserror::Error;

/// Error when an unsupported language code is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid language: \"{input}\". Valid languages are: en, es, fr, de")]
pub struct InvalidLanguageError {
    pub input: String,
}

/// User-facing category for a failed transcription attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    ServerError,
    PayloadTooLarge,
    UnsupportedFormat,
    NetworkError,
    TimedOut,
    Unknown,
}

impl ErrorCategory {
    /// Get the string identifier for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ServerError => "server-error",
            Self::PayloadTooLarge => "payload-too-large",
            Self::UnsupportedFormat => "unsupported-format",
            Self::NetworkError => "network-error",
            Self::TimedOut => "timed-out",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-facing error for a single failed transcription attempt.
///
/// The message is complete and ready to render; the category lets the
/// caller vary presentation without re-parsing the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub category: ErrorCategory,
    pub message: String,
}

impl UserError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_displays_message() {
        let err = UserError::new(ErrorCategory::NetworkError, "Network error.");
        assert_eq!(err.to_string(), "Network error.");
    }

    #[test]
    fn category_identifiers() {
        assert_eq!(ErrorCategory::PayloadTooLarge.as_str(), "payload-too-large");
        assert_eq!(ErrorCategory::Unknown.to_string(), "unknown");
    }
}
