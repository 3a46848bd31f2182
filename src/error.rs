//! Error types for each pipeline boundary.
//!
//! Every per-item failure is absorbed where it happens (one topic, one URL,
//! one translation). These types exist so the absorbing code can log what went
//! wrong before collapsing it to "no result".

use thiserror::Error;

/// Failure while talking to the news search API or downloading a page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request timeout")]
    Timeout,

    #[error("http error {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl FetchError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status(status)
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Failure while translating one chunk of text.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("translation service returned {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected translation payload: {0}")]
    Payload(String),
}

/// Failure while loading the YAML settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// The only failure that propagates out of the pipeline: nothing survived.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PipelineError {
    #[error("No relevant articles found.")]
    NoArticles,
}
