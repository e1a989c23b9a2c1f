//! Harness error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unknown output format '{0}' (expected json or plain)")]
    UnknownFormat(String),
    #[error("{invalid} of {total} trace lines failed validation")]
    InvalidTrace { invalid: usize, total: usize },
}

impl HarnessError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
