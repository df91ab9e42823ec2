//! Error types for the fetch and configuration layers
//!
//! The UI layer works with `anyhow::Result`; these typed errors are what the
//! pipeline inspects and renders.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding a parsed result set
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("no access token configured for the {0} endpoint")]
    MissingAccessToken(&'static str),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("service answered with status {status}")]
    BadStatus { status: u16 },

    #[error("malformed response body: {0}")]
    MalformedBody(String),

    #[error("response has no \"meals\" field")]
    MissingMeals,

    #[error("no recipe found with id {0}")]
    RecordNotFound(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedBody(err.to_string())
    }
}

/// Errors raised while loading or saving the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
