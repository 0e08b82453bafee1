//! Application layer - Use cases and port interfaces
//!
//! Contains the orchestration logic and trait definitions
//! for external system interactions.

pub mod actions;
pub mod classifier;
pub mod orchestrator;
pub mod ports;

// Re-export use cases
pub use actions::{ActionPhase, ActionState, ResultActions};
pub use classifier::classify;
pub use orchestrator::{OrchestratorState, SubmitOutcome, TranscriptionOrchestrator};
