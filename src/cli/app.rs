//! Main app runner for one-shot transcription

use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{
    OrchestratorState, ResultActions, SubmitOutcome, TranscriptionOrchestrator,
};
use crate::domain::config::AppConfig;
use crate::domain::source::{check_url_live, FileCandidate, SourceCandidate};
use crate::infrastructure::{ArboardClipboard, FileSink, HttpBackend, XdgConfigStore};

use crate::application::actions::{COPIED_LABEL, TRANSCRIPT_FILE_NAME};

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a one-shot transcription from CLI arguments
pub async fn run_transcribe(cli: Cli) -> ExitCode {
    let mut presenter = Presenter::new();

    let config = load_merged_config(&cli, &presenter).await;

    // Run the live URL check up front so streaming links fail before we
    // touch the filesystem or the network.
    if let Some(url) = cli.url.as_deref() {
        if let Some(rejection) = check_url_live(url) {
            presenter.error(&rejection.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    let candidate = match build_candidate(&cli, &config, &presenter).await {
        Ok(candidate) => candidate,
        Err(code) => return code,
    };

    let backend = HttpBackend::new(config.api_url_or_default());
    let orchestrator = TranscriptionOrchestrator::new(backend);

    presenter.start_spinner("Transcribing...");
    let outcome = orchestrator.submit(&candidate).await;
    let state = orchestrator.current_state();

    match (&outcome, &state) {
        (SubmitOutcome::Completed, OrchestratorState::Succeeded(result)) => {
            presenter.spinner_success("Transcription complete");
            presenter.output(&result.formatted_text);

            run_result_actions(&config, &state, &presenter).await;
            ExitCode::from(EXIT_SUCCESS)
        }
        (SubmitOutcome::Rejected, OrchestratorState::Failed(error)) => {
            presenter.spinner_fail("Invalid input");
            presenter.error(&error.message);
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        (_, OrchestratorState::Failed(error)) => {
            presenter.spinner_fail("Transcription failed");
            presenter.failure(error.category.as_str(), &error.message);
            ExitCode::from(EXIT_ERROR)
        }
        _ => {
            // Single-shot CLI flow cannot leave the machine mid-flight
            presenter.spinner_fail("Transcription did not complete");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Merge defaults, config file, and CLI flags (CLI wins)
async fn load_merged_config(cli: &Cli, presenter: &Presenter) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    let cli_config = AppConfig {
        api_url: cli.api_url.clone(),
        language: cli.language.map(|l| l.to_string()),
        copy: if cli.copy { Some(true) } else { None },
        save: if cli.save { Some(true) } else { None },
        output_dir: cli
            .output_dir
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
    };

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Assemble the raw candidate from CLI input.
///
/// The file, if given, is read here; everything else is left to the
/// orchestrator's validation.
async fn build_candidate(
    cli: &Cli,
    config: &AppConfig,
    presenter: &Presenter,
) -> Result<SourceCandidate, ExitCode> {
    let language = config.language_or_default();

    let file = match &cli.file {
        Some(path) => {
            let bytes = tokio::fs::read(path).await.map_err(|e| {
                presenter.error(&format!("Failed to read {}: {}", path.display(), e));
                ExitCode::from(EXIT_ERROR)
            })?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "audio".to_string());
            Some(FileCandidate::new(name, bytes))
        }
        None => None,
    };

    Ok(SourceCandidate {
        file,
        url: cli.url.clone(),
        language,
    })
}

/// Apply the configured post-completion side effects
async fn run_result_actions(config: &AppConfig, state: &OrchestratorState, presenter: &Presenter) {
    if !config.copy_or_default() && !config.save_or_default() {
        return;
    }

    let sink = FileSink::new(config.output_dir_or_default());
    let saved_path = sink.target_path(TRANSCRIPT_FILE_NAME);
    let actions = ResultActions::new(ArboardClipboard::new(), sink);

    if config.copy_or_default() {
        actions.copy(state).await;
        if actions.copy_state().label == COPIED_LABEL {
            presenter.info("Copied to clipboard");
        }
    }

    if config.save_or_default() {
        actions.download(state).await;
        presenter.info(&format!("Saved {}", saved_path.display()));
    }
}
