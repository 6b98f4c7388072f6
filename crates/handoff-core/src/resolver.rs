//! Resource resolver: decide whether the resource path is a package to
//! hand to the host or an add-on directory to discard, and perform the
//! discard when it is one.

use crate::error::{HandoffError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Filename suffix marking an add-on package. Matched case-sensitively
/// against the end of the whole path string, so a directory named like
/// a package is still treated as a package.
pub const PACKAGE_SUFFIX: &str = ".ankiaddon";

/// Named removal strategy, tried in order until one succeeds.
type RemovalStrategy = (&'static str, fn(&Path) -> io::Result<()>);

/// Recoverable removal first, irreversible fallbacks after.
const REMOVAL_CHAIN: &[RemovalStrategy] = &[
    ("trash", soft_delete),
    ("file removal", hard_delete_file),
    ("directory removal", hard_delete_dir),
];

/// What to do with the resource path, decided once per handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Hand the package file to the host for installation. The path is
    /// forwarded untouched; the host validates and unpacks it.
    Install { package: PathBuf },
    /// The resource was an add-on directory; removal was attempted.
    /// `removed` is false when every removal strategy failed, which is
    /// a warning and never stops the handoff.
    Discard { removed: bool },
}

/// True when `path` names an add-on package rather than a directory.
pub fn is_package(path: &Path) -> bool {
    path.to_string_lossy().ends_with(PACKAGE_SUFFIX)
}

/// Classify `resource` and, for the discard case, attempt removal.
pub fn resolve(resource: &Path) -> Disposition {
    resolve_with(resource, REMOVAL_CHAIN)
}

fn resolve_with(resource: &Path, chain: &[RemovalStrategy]) -> Disposition {
    if is_package(resource) {
        info!("installing add-on from package {}", resource.display());
        return Disposition::Install {
            package: resource.to_path_buf(),
        };
    }

    info!("discarding add-on directory {}", resource.display());
    let removed = match discard(resource, chain) {
        Ok(()) => true,
        Err(err) => {
            warn!("failed to discard add-on directory: {}", err);
            false
        }
    };
    Disposition::Discard { removed }
}

/// Run the removal chain against `path`, stopping at the first
/// strategy that succeeds. A target that is already gone counts as
/// removed without any attempt.
fn discard(path: &Path, chain: &[RemovalStrategy]) -> Result<()> {
    if !path.exists() {
        debug!("{} already gone, nothing to discard", path.display());
        return Ok(());
    }

    let mut last_err = None;
    for (name, attempt) in chain {
        match attempt(path) {
            Ok(()) => return Ok(()),
            Err(err) => {
                warn!("{} failed for {}: {}", name, path.display(), err);
                last_err = Some(err);
            }
        }
    }

    Err(HandoffError::RemovalFailed {
        path: path.to_path_buf(),
        source: last_err.unwrap_or_else(|| io::Error::other("empty removal chain")),
    })
}

/// Place the target in the platform trash, without confirmation or UI.
fn soft_delete(path: &Path) -> io::Result<()> {
    trash::delete(path).map_err(|err| io::Error::other(err.to_string()))
}

fn hard_delete_file(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

fn hard_delete_dir(path: &Path) -> io::Result<()> {
    fs::remove_dir_all(path)
}
