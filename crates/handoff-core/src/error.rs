//! Error types for the handoff utility.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for handoff operations.
///
/// Only [`HandoffError::LaunchFailed`] is fatal to a handoff; removal
/// failures are caught by the resolver and surfaced as a warning.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("invalid process id: {input}")]
    InvalidPid { input: String },

    #[error("failed to remove {path}: {source}")]
    RemovalFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch {executable}: {source}")]
    LaunchFailed {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for handoff operations.
pub type Result<T> = std::result::Result<T, HandoffError>;
