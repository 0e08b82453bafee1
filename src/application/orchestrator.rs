//! Transcription request orchestrator
//!
//! Owns the `Idle -> Submitting -> Succeeded | Failed` lifecycle for one
//! transcription attempt at a time: pre-flight validation, a single
//! dispatch to the backend port, and failure classification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::domain::error::{ErrorCategory, UserError};
use crate::domain::source::{check_url_live, validate, SourceCandidate, SourceRejection};
use crate::domain::transcription::TranscriptionResult;

use super::classifier::classify;
use super::ports::TranscriptionBackend;

/// Observable state of the orchestrator.
///
/// Exactly one instance lives per orchestrator; consumers only ever see
/// cloned snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OrchestratorState {
    #[default]
    Idle,
    Submitting,
    Succeeded(TranscriptionResult),
    Failed(UserError),
}

impl OrchestratorState {
    /// The completed result, if any
    pub fn result(&self) -> Option<&TranscriptionResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

/// How a `submit` call was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation rejected the candidate; the backend was never contacted
    Rejected,
    /// A request was already in flight; this call did nothing
    AlreadyInFlight,
    /// The request was dispatched and ran to completion (either way)
    Completed,
}

/// Orchestrator for transcription submissions.
///
/// Accepts at most one in-flight request; a second `submit` while one is
/// running is refused rather than queued. The machine is reusable: after
/// `Succeeded` or `Failed`, a fresh `submit` starts over.
pub struct TranscriptionOrchestrator<B: TranscriptionBackend> {
    backend: B,
    state: Mutex<OrchestratorState>,
    // Bumped on every dispatch and on reset, so a completion that lost a
    // race with teardown is dropped instead of resurrecting old state.
    epoch: AtomicU64,
}

impl<B: TranscriptionBackend> TranscriptionOrchestrator<B> {
    /// Create a new orchestrator wired to a backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(OrchestratorState::Idle),
            epoch: AtomicU64::new(0),
        }
    }

    /// Read-only snapshot of the current state
    pub fn current_state(&self) -> OrchestratorState {
        self.lock_state().clone()
    }

    /// Eager URL check, re-run as the user edits the URL field.
    ///
    /// Stateless and independent of submission; `None` means nothing to
    /// flag yet.
    pub fn on_url_edited(&self, url: &str) -> Option<SourceRejection> {
        check_url_live(url)
    }

    /// Submit a candidate for transcription.
    ///
    /// Validation runs first; a rejection becomes `Failed` without any
    /// network call. On acceptance the state moves to `Submitting`
    /// (clearing any prior result or error), exactly one backend call is
    /// made, and completion lands in `Succeeded` or `Failed`.
    pub async fn submit(&self, candidate: &SourceCandidate) -> SubmitOutcome {
        let (request, my_epoch) = {
            let mut state = self.lock_state();
            if matches!(*state, OrchestratorState::Submitting) {
                return SubmitOutcome::AlreadyInFlight;
            }
            match validate(candidate) {
                Err(rejection) => {
                    *state = OrchestratorState::Failed(UserError::new(
                        ErrorCategory::Unknown,
                        rejection.to_string(),
                    ));
                    return SubmitOutcome::Rejected;
                }
                Ok(request) => {
                    *state = OrchestratorState::Submitting;
                    let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
                    (request, epoch)
                }
            }
        };

        let outcome = self.backend.transcribe(&request).await;

        let mut state = self.lock_state();
        if self.epoch.load(Ordering::SeqCst) != my_epoch {
            // A reset happened mid-flight; the late completion is a no-op.
            return SubmitOutcome::Completed;
        }
        *state = match outcome {
            Ok(result) => OrchestratorState::Succeeded(result),
            Err(error) => OrchestratorState::Failed(classify(&error)),
        };
        SubmitOutcome::Completed
    }

    /// Return to `Idle`, invalidating any in-flight completion.
    pub fn reset(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *self.lock_state() = OrchestratorState::Idle;
    }

    fn lock_state(&self) -> MutexGuard<'_, OrchestratorState> {
        // State stays consistent even if a holder panicked mid-update.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::application::ports::BackendError;
    use crate::domain::language::LanguageCode;
    use crate::domain::source::FileCandidate;
    use crate::domain::transcription::TranscriptionRequest;

    fn sample_result() -> TranscriptionResult {
        TranscriptionResult {
            text: "a".to_string(),
            formatted_text: "A.".to_string(),
        }
    }

    fn url_candidate() -> SourceCandidate {
        SourceCandidate::from_url("https://dropbox.com/x/file.mp3", LanguageCode::En)
    }

    struct StubBackend {
        calls: AtomicUsize,
        response: Result<TranscriptionResult, BackendError>,
    }

    impl StubBackend {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Ok(sample_result()),
            }
        }

        fn failing(error: BackendError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Err(error),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TranscriptionBackend for StubBackend {
        async fn transcribe(
            &self,
            _request: &TranscriptionRequest,
        ) -> Result<TranscriptionResult, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    /// Backend that parks until released, for in-flight state tests
    struct GatedBackend {
        calls: AtomicUsize,
        gate: Notify,
    }

    impl GatedBackend {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl TranscriptionBackend for GatedBackend {
        async fn transcribe(
            &self,
            _request: &TranscriptionRequest,
        ) -> Result<TranscriptionResult, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(sample_result())
        }
    }

    async fn wait_for_submitting<B: TranscriptionBackend>(
        orchestrator: &TranscriptionOrchestrator<B>,
    ) {
        while orchestrator.current_state() != OrchestratorState::Submitting {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn starts_idle() {
        let orchestrator = TranscriptionOrchestrator::new(StubBackend::ok());
        assert_eq!(orchestrator.current_state(), OrchestratorState::Idle);
    }

    #[tokio::test]
    async fn successful_submit_lands_in_succeeded() {
        let orchestrator = TranscriptionOrchestrator::new(StubBackend::ok());

        let outcome = orchestrator.submit(&url_candidate()).await;

        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(
            orchestrator.current_state(),
            OrchestratorState::Succeeded(sample_result())
        );
    }

    #[tokio::test]
    async fn validation_rejection_never_reaches_backend() {
        let orchestrator = TranscriptionOrchestrator::new(StubBackend::ok());

        let outcome = orchestrator.submit(&SourceCandidate::default()).await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(orchestrator.backend.call_count(), 0);
        match orchestrator.current_state() {
            OrchestratorState::Failed(err) => {
                assert_eq!(err.category, ErrorCategory::Unknown);
                assert!(err.message.contains("either an audio file or URL"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn both_sources_set_never_reaches_backend() {
        let orchestrator = TranscriptionOrchestrator::new(StubBackend::ok());
        let candidate = SourceCandidate {
            file: Some(FileCandidate::new("a.mp3", vec![1])),
            url: Some("https://dropbox.com/x/a.mp3".to_string()),
            language: LanguageCode::En,
        };

        let outcome = orchestrator.submit(&candidate).await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(orchestrator.backend.call_count(), 0);
    }

    #[tokio::test]
    async fn backend_failure_is_classified() {
        let orchestrator = TranscriptionOrchestrator::new(StubBackend::failing(
            BackendError::Status {
                code: 413,
                message: String::new(),
            },
        ));

        orchestrator.submit(&url_candidate()).await;

        match orchestrator.current_state() {
            OrchestratorState::Failed(err) => {
                assert_eq!(err.category, ErrorCategory::PayloadTooLarge)
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_refused() {
        let orchestrator = Arc::new(TranscriptionOrchestrator::new(GatedBackend::new()));

        let first = {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move { orchestrator.submit(&url_candidate()).await })
        };
        wait_for_submitting(&orchestrator).await;

        let second = orchestrator.submit(&url_candidate()).await;
        assert_eq!(second, SubmitOutcome::AlreadyInFlight);

        orchestrator.backend.gate.notify_one();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Completed);
        // Exactly one dispatch despite two submit calls
        assert_eq!(orchestrator.backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn new_submission_clears_prior_error() {
        let orchestrator = TranscriptionOrchestrator::new(StubBackend::ok());

        orchestrator.submit(&SourceCandidate::default()).await;
        assert!(matches!(
            orchestrator.current_state(),
            OrchestratorState::Failed(_)
        ));

        let outcome = orchestrator.submit(&url_candidate()).await;
        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(
            orchestrator.current_state(),
            OrchestratorState::Succeeded(sample_result())
        );
    }

    #[tokio::test]
    async fn reusable_across_sequential_submissions() {
        let orchestrator = TranscriptionOrchestrator::new(StubBackend::ok());

        orchestrator.submit(&url_candidate()).await;
        orchestrator.submit(&url_candidate()).await;

        assert_eq!(orchestrator.backend.call_count(), 2);
        assert!(matches!(
            orchestrator.current_state(),
            OrchestratorState::Succeeded(_)
        ));
    }

    #[tokio::test]
    async fn late_completion_after_reset_is_ignored() {
        let orchestrator = Arc::new(TranscriptionOrchestrator::new(GatedBackend::new()));

        let in_flight = {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move { orchestrator.submit(&url_candidate()).await })
        };
        wait_for_submitting(&orchestrator).await;

        orchestrator.reset();
        orchestrator.backend.gate.notify_one();
        in_flight.await.unwrap();

        // The stale success must not overwrite the reset state
        assert_eq!(orchestrator.current_state(), OrchestratorState::Idle);
    }

    #[tokio::test]
    async fn url_edit_hook_flags_streaming_links() {
        let orchestrator = TranscriptionOrchestrator::new(StubBackend::ok());

        assert!(orchestrator
            .on_url_edited("https://youtu.be/abc")
            .is_some());
        assert!(orchestrator
            .on_url_edited("https://dropbox.com/x/a.mp3")
            .is_none());
        // The hook alone never touches the backend or the state
        assert_eq!(orchestrator.backend.call_count(), 0);
        assert_eq!(orchestrator.current_state(), OrchestratorState::Idle);
    }
}
