use std::path::PathBuf;
use thiserror::Error;

/// Rejected optimizer or metric input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl FitError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("x and y columns must have the same length (x: {x_len}, y: {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sample data: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid dataset parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}
