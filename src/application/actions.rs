//! Result action coordinator
//!
//! Post-completion side effects: copy-to-clipboard and save-as-file,
//! each with its own transient button pulse and auto-reverting label.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::application::orchestrator::OrchestratorState;
use crate::application::ports::{Clipboard, TranscriptSink};

/// File name for downloaded transcripts
pub const TRANSCRIPT_FILE_NAME: &str = "transcript.txt";

/// How long a button stays visually active after a click
pub const BUTTON_PULSE: Duration = Duration::from_millis(200);

/// How long the copy button shows its success label
pub const COPY_LABEL_REVERT: Duration = Duration::from_secs(2);

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_FAILED_LABEL: &str = "Failed to copy";
pub const DOWNLOAD_LABEL: &str = "Download";

/// Visual phase of a side-effect button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionPhase {
    #[default]
    Idle,
    Active,
}

/// Transient per-button state; not persisted, never part of the
/// orchestrator's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionState {
    pub phase: ActionPhase,
    pub label: String,
}

impl ActionState {
    fn new(label: &str) -> Self {
        Self {
            phase: ActionPhase::Idle,
            label: label.to_string(),
        }
    }
}

type SharedActionState = Arc<Mutex<ActionState>>;

/// Coordinator for copy/download side effects on a completed result.
///
/// Both operations are silent no-ops unless handed a `Succeeded` state.
/// Each button runs its pulse on its own timer; the label clock on the
/// copy button is independent of the pulse clock, so the two revert at
/// different times.
pub struct ResultActions<C: Clipboard, S: TranscriptSink> {
    clipboard: C,
    sink: S,
    copy_button: SharedActionState,
    download_button: SharedActionState,
}

impl<C, S> ResultActions<C, S>
where
    C: Clipboard,
    S: TranscriptSink,
{
    /// Create a coordinator wired to a clipboard and a transcript sink
    pub fn new(clipboard: C, sink: S) -> Self {
        Self {
            clipboard,
            sink,
            copy_button: Arc::new(Mutex::new(ActionState::new(COPY_LABEL))),
            download_button: Arc::new(Mutex::new(ActionState::new(DOWNLOAD_LABEL))),
        }
    }

    /// Snapshot of the copy button state
    pub fn copy_state(&self) -> ActionState {
        lock(&self.copy_button).clone()
    }

    /// Snapshot of the download button state
    pub fn download_state(&self) -> ActionState {
        lock(&self.download_button).clone()
    }

    /// Copy the formatted transcript to the clipboard.
    ///
    /// Pulses the button immediately, then updates the label to
    /// `Copied!` (reverting after 2s) or `Failed to copy` depending on
    /// the clipboard outcome.
    pub async fn copy(&self, state: &OrchestratorState) {
        let Some(result) = state.result() else {
            return;
        };

        pulse(&self.copy_button);

        match self.clipboard.copy(&result.formatted_text).await {
            Ok(()) => {
                set_label(&self.copy_button, COPIED_LABEL);
                let button = Arc::clone(&self.copy_button);
                tokio::spawn(async move {
                    tokio::time::sleep(COPY_LABEL_REVERT).await;
                    set_label(&button, COPY_LABEL);
                });
            }
            Err(error) => {
                eprintln!("Warning: clipboard copy failed: {}", error);
                set_label(&self.copy_button, COPY_FAILED_LABEL);
            }
        }
    }

    /// Save the formatted transcript as `transcript.txt`.
    ///
    /// Fire-and-forget: a sink failure is logged, never surfaced as
    /// state. Pulses the download button on its own timer.
    pub async fn download(&self, state: &OrchestratorState) {
        let Some(result) = state.result() else {
            return;
        };

        pulse(&self.download_button);

        if let Err(error) = self
            .sink
            .save(TRANSCRIPT_FILE_NAME, &result.formatted_text)
            .await
        {
            eprintln!("Warning: transcript save failed: {}", error);
        }
    }
}

/// Flip a button to Active and schedule its revert.
fn pulse(button: &SharedActionState) {
    lock(button).phase = ActionPhase::Active;
    let button = Arc::clone(button);
    tokio::spawn(async move {
        tokio::time::sleep(BUTTON_PULSE).await;
        lock(&button).phase = ActionPhase::Idle;
    });
}

fn set_label(button: &SharedActionState, label: &str) {
    lock(button).label = label.to_string();
}

fn lock(button: &SharedActionState) -> MutexGuard<'_, ActionState> {
    button.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
