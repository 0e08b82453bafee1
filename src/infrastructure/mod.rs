//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the HTTP backend, clipboard, and filesystem.

pub mod backend;
pub mod clipboard;
pub mod config;
pub mod sink;

// Re-export adapters
pub use backend::HttpBackend;
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use sink::FileSink;
