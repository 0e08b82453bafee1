//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod backend;
pub mod clipboard;
pub mod config;
pub mod sink;

// Re-export common types
pub use backend::{BackendError, TranscriptionBackend};
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use sink::{SinkError, TranscriptSink};
