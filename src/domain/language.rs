//! Language code value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidLanguageError;

/// All languages the backend accepts
pub const ALL_LANGUAGES: &[LanguageCode] = &[
    LanguageCode::En,
    LanguageCode::Es,
    LanguageCode::Fr,
    LanguageCode::De,
];

/// Language codes supported by the transcription backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageCode {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl LanguageCode {
    /// Get the human-readable name for this language
    pub const fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
        }
    }

    /// Get the ISO 639-1 code sent to the backend
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }
}

impl FromStr for LanguageCode {
    type Err = InvalidLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "fr" => Ok(Self::Fr),
            "de" => Ok(Self::De),
            _ => Err(InvalidLanguageError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_languages() {
        assert_eq!("en".parse::<LanguageCode>().unwrap(), LanguageCode::En);
        assert_eq!("es".parse::<LanguageCode>().unwrap(), LanguageCode::Es);
        assert_eq!("fr".parse::<LanguageCode>().unwrap(), LanguageCode::Fr);
        assert_eq!("de".parse::<LanguageCode>().unwrap(), LanguageCode::De);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("EN".parse::<LanguageCode>().unwrap(), LanguageCode::En);
        assert_eq!("Fr".parse::<LanguageCode>().unwrap(), LanguageCode::Fr);
    }

    #[test]
    fn parse_with_whitespace() {
        assert_eq!("  de  ".parse::<LanguageCode>().unwrap(), LanguageCode::De);
    }

    #[test]
    fn parse_invalid() {
        assert!("jp".parse::<LanguageCode>().is_err());
        assert!("".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(LanguageCode::En.to_string(), "en");
        assert_eq!(LanguageCode::De.to_string(), "de");
    }

    #[test]
    fn labels() {
        assert_eq!(LanguageCode::En.label(), "English");
        assert_eq!(LanguageCode::Es.label(), "Spanish");
    }

    #[test]
    fn default_is_english() {
        assert_eq!(LanguageCode::default(), LanguageCode::En);
    }

    #[test]
    fn all_languages_constant() {
        assert_eq!(ALL_LANGUAGES.len(), 4);
    }
}
