//! Runtime settings loaded from an optional YAML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration. CLI flags are applied on top in `main`.
//!
//! ```yaml
//! gnews_api_key: "your-key"
//! search_endpoint: "https://gnews.io/api/v4/search"
//! request_timeout_secs: 10
//! scrape_workers: 6
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://gnews.io/api/v4/search";
pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Output languages offered to users, as `(name, code)` pairs.
pub const LANGUAGE_OPTIONS: &[(&str, &str)] = &[("English", "en"), ("Hindi", "hi"), ("Telugu", "te")];

/// Resolve a language name from [`LANGUAGE_OPTIONS`] (case-insensitive) to its code.
///
/// Anything else is assumed to already be a language code and is returned lowercased.
pub fn language_code(input: &str) -> String {
    let input = input.trim();
    LANGUAGE_OPTIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(input))
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| input.to_lowercase())
}

/// Pipeline settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// API token for the news search service.
    pub gnews_api_key: Option<String>,
    /// News search endpoint.
    pub search_endpoint: String,
    /// Language requested from the search API.
    pub search_language: String,
    /// Google Translate endpoint.
    pub translate_endpoint: String,
    /// Per-request timeout for every outbound call.
    pub request_timeout_secs: u64,
    /// Number of concurrent scrapes.
    pub scrape_workers: usize,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Longest text sent to the translator in one request, in characters.
    pub translate_chunk_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gnews_api_key: None,
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            search_language: "en".to_string(),
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            request_timeout_secs: 10,
            scrape_workers: 6,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            translate_chunk_chars: 4900,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read or isn't valid YAML for [`Settings`].
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;
        let settings = Self::from_yaml(&raw).map_err(|source| ConfigError::Yaml {
            path: path_str,
            source,
        })?;
        info!(
            workers = settings.scrape_workers,
            timeout_secs = settings.request_timeout_secs,
            "Loaded settings"
        );
        Ok(settings)
    }

    /// Parse settings from YAML text. An empty document yields the defaults.
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
        assert_eq!(settings.scrape_workers, 6);
        assert_eq!(settings.user_agent, "Mozilla/5.0");
        assert_eq!(settings.translate_chunk_chars, 4900);
        assert!(settings.gnews_api_key.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("gnews_api_key: abc\nscrape_workers: 3\n").unwrap();
        assert_eq!(settings.gnews_api_key.as_deref(), Some("abc"));
        assert_eq!(settings.scrape_workers, 3);
        assert_eq!(settings.search_endpoint, DEFAULT_SEARCH_ENDPOINT);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "request_timeout_secs: 5").unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_language_code() {
        assert_eq!(language_code("Hindi"), "hi");
        assert_eq!(language_code("telugu"), "te");
        assert_eq!(language_code("EN"), "en");
        assert_eq!(language_code("fr"), "fr");
    }
}
