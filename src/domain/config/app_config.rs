//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::language::LanguageCode;

/// Backend URL used when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: Option<String>,
    pub language: Option<String>,
    pub copy: Option<bool>,
    pub save: Option<bool>,
    pub output_dir: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_url: Some(DEFAULT_API_URL.to_string()),
            language: Some("en".to_string()),
            copy: Some(false),
            save: Some(false),
            output_dir: Some(".".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_url: other.api_url.or(self.api_url),
            language: other.language.or(self.language),
            copy: other.copy.or(self.copy),
            save: other.save.or(self.save),
            output_dir: other.output_dir.or(self.output_dir),
        }
    }

    /// Get the backend URL, or the default if not set
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Get language as parsed LanguageCode, or default if not set/invalid
    pub fn language_or_default(&self) -> LanguageCode {
        self.language
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get clipboard-copy setting, or false if not set
    pub fn copy_or_default(&self) -> bool {
        self.copy.unwrap_or(false)
    }

    /// Get save-transcript setting, or false if not set
    pub fn save_or_default(&self) -> bool {
        self.save.unwrap_or(false)
    }

    /// Get output directory, or the working directory if not set
    pub fn output_dir_or_default(&self) -> String {
        self.output_dir.clone().unwrap_or_else(|| ".".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_other() {
        let base = AppConfig {
            api_url: Some("http://a".to_string()),
            language: Some("en".to_string()),
            ..Default::default()
        };
        let other = AppConfig {
            api_url: Some("http://b".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.api_url.as_deref(), Some("http://b"));
        assert_eq!(merged.language.as_deref(), Some("en"));
    }

    #[test]
    fn merge_keeps_base_when_other_empty() {
        let base = AppConfig::defaults();
        let merged = base.clone().merge(AppConfig::empty());
        assert_eq!(merged, base);
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(config.language_or_default(), LanguageCode::En);
        assert!(!config.copy_or_default());
        assert_eq!(config.output_dir_or_default(), ".");
    }

    #[test]
    fn invalid_language_falls_back() {
        let config = AppConfig {
            language: Some("klingon".to_string()),
            ..Default::default()
        };
        assert_eq!(config.language_or_default(), LanguageCode::En);
    }

    #[test]
    fn roundtrips_through_toml() {
        let config = AppConfig::defaults();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
