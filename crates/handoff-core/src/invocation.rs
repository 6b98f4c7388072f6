//! The single immutable value describing one handoff.

use crate::error::{HandoffError, Result};
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Everything one handoff needs, built once from the command line and
/// never mutated. The whole process terminates after the launch step,
/// so nothing here outlives a single run.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Process id of the exiting host.
    pub target_pid: NonZeroU32,
    /// Executable to relaunch once the host is gone. Existence is not
    /// pre-validated; a bad path surfaces as a launch failure.
    pub host_executable: PathBuf,
    /// Host base data directory, forwarded opaquely via `-b`.
    pub host_base_dir: PathBuf,
    /// Package file to install, or add-on directory to discard.
    pub resource_path: PathBuf,
}

/// Parse a decimal process id, rejecting zero and non-numeric input.
pub fn parse_pid(input: &str) -> Result<NonZeroU32> {
    input
        .trim()
        .parse::<NonZeroU32>()
        .map_err(|_| HandoffError::InvalidPid {
            input: input.to_string(),
        })
}
