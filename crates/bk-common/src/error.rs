//! Error types for benchkit.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for benchkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the toolkit.
///
/// The sanitizers and aggregates themselves never fail; these variants only
/// come out of config loading and logging initialisation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config path has an extension we do not know how to parse.
    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A global tracing subscriber was already installed.
    #[error("logging already initialised: {0}")]
    LoggingInit(String),
}

impl Error {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::Toml(_) => "toml",
            Error::UnsupportedFormat(_) => "unsupported_format",
            Error::LoggingInit(_) => "logging_init",
        }
    }
}
