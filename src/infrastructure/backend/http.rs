//! HTTP transcription backend adapter
//!
//! Talks to the AudioScript backend over its two endpoints:
//! `POST /transcribe/file` (multipart) and `POST /transcribe/url` (JSON).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{BackendError, TranscriptionBackend};
use crate::domain::language::LanguageCode;
use crate::domain::transcription::{TranscriptionRequest, TranscriptionResult};

/// Bounded wait for one transcription round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct UrlTranscribeBody<'a> {
    url: &'a str,
    language: &'a str,
}

/// FastAPI-style error envelope
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP adapter for the transcription backend
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend adapter against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn transcribe_file(
        &self,
        bytes: &[u8],
        name: &str,
        language: LanguageCode,
    ) -> Result<TranscriptionResult, BackendError> {
        let part = reqwest::multipart::Part::bytes(bytes.to_vec()).file_name(name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("language", language.as_str());

        let response = self
            .client
            .post(self.endpoint("transcribe/file"))
            .multipart(form)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::parse_response(response).await
    }

    async fn transcribe_url(
        &self,
        url: &str,
        language: LanguageCode,
    ) -> Result<TranscriptionResult, BackendError> {
        let body = UrlTranscribeBody {
            url,
            language: language.as_str(),
        };

        let response = self
            .client
            .post(self.endpoint("transcribe/url"))
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::parse_response(response).await
    }

    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<TranscriptionResult, BackendError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                code: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        // Strict parse; a 2xx with a wrong shape is a malformed response,
        // never loosely-typed passthrough.
        response
            .json::<TranscriptionResult>()
            .await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl TranscriptionBackend for HttpBackend {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, BackendError> {
        match request {
            TranscriptionRequest::File {
                bytes,
                name,
                language,
            } => self.transcribe_file(bytes, name, *language).await,
            TranscriptionRequest::Url { url, language } => {
                self.transcribe_url(url.as_str(), *language).await
            }
        }
    }
}

/// Pull the human-readable message out of an error body
fn extract_error_message(body: &str) -> String {
    if let Ok(ErrorBody {
        detail: Some(detail),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        return detail;
    }
    body.to_string()
}

fn map_transport_error(error: reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::Timeout(error.to_string())
    } else {
        BackendError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let backend = HttpBackend::new("http://localhost:8000/");
        assert_eq!(
            backend.endpoint("transcribe/url"),
            "http://localhost:8000/transcribe/url"
        );
    }

    #[test]
    fn extracts_fastapi_detail() {
        let message = extract_error_message(r#"{"detail":"Transcription failed: bad audio"}"#);
        assert_eq!(message, "Transcription failed: bad audio");
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(extract_error_message("plain failure"), "plain failure");
        assert_eq!(extract_error_message(r#"{"other":1}"#), r#"{"other":1}"#);
    }

    #[test]
    fn url_body_serializes_expected_fields() {
        let body = UrlTranscribeBody {
            url: "https://dropbox.com/x/a.mp3",
            language: "en",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["url"], "https://dropbox.com/x/a.mp3");
        assert_eq!(json["language"], "en");
    }
}
