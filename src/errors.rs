use std::fmt::Display;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Error type for table parsing, join, and output failures.
///
/// All variants abort the run: inputs are static files, so retrying
/// would not change the outcome.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed input in '{path}': {reason}")]
    MalformedInput { path: String, reason: String },
    #[error("missing join key in '{path}': {key}")]
    MissingJoinKey { path: String, key: String },
    #[error("cannot write output at '{path}': {reason}")]
    OutputPath { path: String, reason: String },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DatasetError {
    /// Build a `MalformedInput` for `path` with a formatted reason.
    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Build a `MissingJoinKey` naming the offending key in `path`.
    pub fn missing_key(path: &Path, key: impl Into<String>) -> Self {
        Self::MissingJoinKey {
            path: path.display().to_string(),
            key: key.into(),
        }
    }

    /// Build an `OutputPath` error for the destination `path`.
    pub fn output_path(path: &Path, reason: impl Display) -> Self {
        Self::OutputPath {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
