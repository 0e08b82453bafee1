//! AudioScript - audio transcription client
//!
//! This crate submits audio (an uploaded file or a remote URL) to a
//! transcription backend and coordinates the result: pre-flight source
//! validation, the single-request submission lifecycle, failure
//! classification, and copy/download side effects.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, validation policy, and errors
//! - **Application**: The orchestrator, classifier, result actions, and
//!   port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP backend,
//!   clipboard, transcript sink, config store)
//! - **CLI**: Command-line interface and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
