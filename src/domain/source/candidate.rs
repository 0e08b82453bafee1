//! Raw source candidate as entered by the user

use crate::domain::language::LanguageCode;

/// An audio file picked by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub bytes: Vec<u8>,
    pub name: String,
    /// Declared size from the picker; may lag the actual byte count
    pub size: u64,
}

impl FileCandidate {
    /// Create a candidate whose declared size matches its content
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self {
            bytes,
            name: name.into(),
            size,
        }
    }
}

/// Raw user input for one submission attempt.
///
/// Unlike [`crate::domain::TranscriptionRequest`], a candidate may carry
/// both a file and a URL, or neither; validation rejects those shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCandidate {
    pub file: Option<FileCandidate>,
    pub url: Option<String>,
    pub language: LanguageCode,
}

impl SourceCandidate {
    /// Candidate from an uploaded file
    pub fn from_file(file: FileCandidate, language: LanguageCode) -> Self {
        Self {
            file: Some(file),
            url: None,
            language,
        }
    }

    /// Candidate from a remote URL
    pub fn from_url(url: impl Into<String>, language: LanguageCode) -> Self {
        Self {
            file: None,
            url: Some(url.into()),
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_candidate_size_matches_bytes() {
        let file = FileCandidate::new("clip.mp3", vec![0u8; 42]);
        assert_eq!(file.size, 42);
    }

    #[test]
    fn from_url_has_no_file() {
        let candidate = SourceCandidate::from_url("https://example.com/a.mp3", LanguageCode::En);
        assert!(candidate.file.is_none());
        assert!(candidate.url.is_some());
    }
}
