//! Validated transcription request

use url::Url;

use crate::domain::language::LanguageCode;

/// A validated request ready for dispatch to the backend.
///
/// Constructed only by [`crate::domain::source::validate`], so a request
/// always carries exactly one source. Built fresh per submission attempt
/// and discarded after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionRequest {
    /// An uploaded audio file
    File {
        bytes: Vec<u8>,
        name: String,
        language: LanguageCode,
    },
    /// A remote direct-download URL
    Url { url: Url, language: LanguageCode },
}

impl TranscriptionRequest {
    /// The language requested for this transcription
    pub fn language(&self) -> LanguageCode {
        match self {
            Self::File { language, .. } | Self::Url { language, .. } => *language,
        }
    }

    /// Short human-readable description of the source
    pub fn source_description(&self) -> String {
        match self {
            Self::File { name, .. } => name.clone(),
            Self::Url { url, .. } => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_accessor() {
        let request = TranscriptionRequest::File {
            bytes: vec![1, 2, 3],
            name: "clip.mp3".to_string(),
            language: LanguageCode::Fr,
        };
        assert_eq!(request.language(), LanguageCode::Fr);
    }

    #[test]
    fn source_description_for_url() {
        let request = TranscriptionRequest::Url {
            url: Url::parse("https://dropbox.com/s/abc/clip.mp3").unwrap(),
            language: LanguageCode::En,
        };
        assert!(request.source_description().contains("dropbox.com"));
    }
}
