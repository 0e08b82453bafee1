//! Transcription backend infrastructure module

mod http;

pub use http::HttpBackend;
