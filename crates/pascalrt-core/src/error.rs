//! Error types for the fallible, Rust-only parts of the runtime.
//!
//! None of these ever reach a Pascal program: the ABI layer swallows them so
//! the write family stays fire-and-forget.

use thiserror::Error;

/// Invalid diagnostics configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown trace level '{0}' (expected off, events or calls)")]
    UnknownTraceLevel(String),
}

/// Failure while emitting a trace record.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to serialize trace record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("trace sink write failed: {0}")]
    Io(#[from] std::io::Error),
}
