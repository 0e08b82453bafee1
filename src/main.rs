//! AudioScript CLI entry point

use std::process::ExitCode;

use clap::Parser;

use audioscript::cli::{
    app::{run_transcribe, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use audioscript::domain::language::ALL_LANGUAGES;
use audioscript::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Languages) => {
            for language in ALL_LANGUAGES {
                presenter.output(&format!("{}  {}", language, language.label()));
            }
            ExitCode::SUCCESS
        }
        None => run_transcribe(cli).await,
    }
}
