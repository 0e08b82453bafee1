//! Configuration store port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisting the audioscript configuration.
///
/// A store backs one `config.toml` holding the partial [`AppConfig`]
/// keys (`api_url`, `language`, `copy`, `save`, `output_dir`). Merging
/// stored values with defaults and CLI flags is the caller's job; the
/// store only reads and writes what is on disk.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored config. A missing file is not an error; it loads
    /// as an empty config with every field unset.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Write the given config, replacing whatever was stored before.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing `config.toml`.
    fn path(&self) -> PathBuf;

    /// Whether a config file has been written yet.
    fn exists(&self) -> bool;

    /// Create the config file seeded with [`AppConfig::defaults`].
    /// Refuses to clobber an existing file.
    async fn init(&self) -> Result<(), ConfigError>;
}
