//! Pre-flight source validation
//!
//! Pure policy applied before any network call. Rules run in a fixed
//! order and the first failing rule wins, so the user always sees the
//! most actionable rejection.

use thiserror::Error;
use url::Url;

use crate::domain::source::candidate::SourceCandidate;
use crate::domain::transcription::TranscriptionRequest;

/// Audio extensions the backend accepts
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav", "mp4", "m4a"];

/// Trusted direct-download hosts, matched by substring so subdomains pass
pub const ALLOWED_DOMAINS: &[&str] = &["drive.google.com", "dropbox.com", "s3.amazonaws.com"];

/// Maximum accepted upload size (100 MiB)
pub const MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024;

/// Streaming-video URL patterns that are never directly downloadable
const STREAMING_VIDEO_PATTERNS: &[&str] = &["youtube.com/watch", "youtu.be/"];

/// Reason a source candidate was rejected before dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceRejection {
    #[error("Please provide either an audio file or URL.")]
    MissingOrAmbiguousSource,

    #[error("Please provide a valid URL.")]
    MalformedUrl,

    #[error(
        "Streaming video links cannot be transcribed directly. \
         Please download the audio file to your device first, then upload it here."
    )]
    StreamingVideoUrl,

    #[error(
        "URL must point to a trusted direct-download host: \
         drive.google.com, dropbox.com, or s3.amazonaws.com."
    )]
    UntrustedDomain,

    #[error("Unsupported file extension. Supported audio formats: mp3, wav, mp4, m4a.")]
    UnsupportedExtension,

    #[error("File size too large. Please upload a file smaller than 100 MB.")]
    FileTooLarge,
}

/// Validate a candidate, producing a dispatch-ready request.
///
/// Deterministic and side-effect-free; the caller surfaces the rejection
/// as UI state. Acceptance yields a [`TranscriptionRequest`], so the
/// file-XOR-url invariant holds by construction downstream.
pub fn validate(candidate: &SourceCandidate) -> Result<TranscriptionRequest, SourceRejection> {
    let url = candidate
        .url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match (&candidate.file, url) {
        (Some(_), Some(_)) | (None, None) => Err(SourceRejection::MissingOrAmbiguousSource),
        (Some(file), None) => {
            if file.size > MAX_FILE_SIZE_BYTES {
                return Err(SourceRejection::FileTooLarge);
            }
            Ok(TranscriptionRequest::File {
                bytes: file.bytes.clone(),
                name: file.name.clone(),
                language: candidate.language,
            })
        }
        (None, Some(raw)) => {
            let url = Url::parse(raw).map_err(|_| SourceRejection::MalformedUrl)?;
            // Streaming check runs before the allowlist so the user gets
            // the download-it-first hint rather than a domain complaint.
            if is_streaming_video(raw) {
                return Err(SourceRejection::StreamingVideoUrl);
            }
            let host = url.host_str().ok_or(SourceRejection::MalformedUrl)?;
            if !ALLOWED_DOMAINS.iter().any(|domain| host.contains(domain)) {
                return Err(SourceRejection::UntrustedDomain);
            }
            if !has_supported_extension(url.path()) {
                return Err(SourceRejection::UnsupportedExtension);
            }
            Ok(TranscriptionRequest::Url {
                url,
                language: candidate.language,
            })
        }
    }
}

/// Eager check run as the user edits the URL field, before submission.
///
/// Only flags streaming-video links; partially typed URLs are left alone
/// until submit-time validation.
pub fn check_url_live(url: &str) -> Option<SourceRejection> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_streaming_video(trimmed) {
        return Some(SourceRejection::StreamingVideoUrl);
    }
    None
}

fn is_streaming_video(url: &str) -> bool {
    STREAMING_VIDEO_PATTERNS
        .iter()
        .any(|pattern| url.contains(pattern))
}

/// Extension is the text after the last `.` of the path, case-insensitive
fn has_supported_extension(path: &str) -> bool {
    match path.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
