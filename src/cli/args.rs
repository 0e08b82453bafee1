//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::language::LanguageCode;

/// Config keys accepted by `config get` / `config set`
pub const VALID_CONFIG_KEYS: &[&str] = &["api_url", "language", "copy", "save", "output_dir"];

/// Check whether a key is a known config key
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// AudioScript - audio transcription from files or URLs
#[derive(Parser, Debug)]
#[command(name = "audioscript")]
#[command(version)]
#[command(about = "Submit an audio file or URL for transcription")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to an audio file to transcribe
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Direct-download URL of the audio to transcribe
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Language of the audio (en, es, fr, de)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<LanguageCode>,

    /// Copy the transcript to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Save the transcript as transcript.txt
    #[arg(short, long)]
    pub save: bool,

    /// Directory to save the transcript into
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Transcription backend base URL
    #[arg(long, value_name = "URL", env = "AUDIOSCRIPT_API_URL")]
    pub api_url: Option<String>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List supported languages
    Languages,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}
