//! Handoff core - wait out an exiting host application, mutate its
//! add-on state on disk, then relaunch it.
//!
//! A handoff runs exactly once per process: the watcher polls until the
//! host's pid is gone (so the host's own locked files can be touched),
//! the resolver either stages a package for installation or discards an
//! add-on directory, and the launcher starts a fresh, detached host.
//! There is no retry, no supervision of the new process, and no state
//! kept across invocations.
//!
//! # Example
//!
//! ```rust,ignore
//! use handoff_core::{invocation, Invocation};
//!
//! let invocation = Invocation {
//!     target_pid: invocation::parse_pid("4242")?,
//!     host_executable: "/usr/local/bin/anki".into(),
//!     host_base_dir: "/home/user/.local/share/Anki2".into(),
//!     resource_path: "/tmp/downloaded.ankiaddon".into(),
//! };
//!
//! handoff_core::run(&invocation)?;
//! ```

pub mod error;
pub mod invocation;
pub mod launcher;
pub mod platform;
pub mod resolver;
pub mod watcher;

// Re-export commonly used types
pub use error::{HandoffError, Result};
pub use invocation::Invocation;
pub use launcher::{build_args, spawn_detached};
pub use resolver::{is_package, resolve, Disposition, PACKAGE_SUFFIX};
pub use watcher::{wait_for_exit, POLL_INTERVAL};

use tracing::info;

/// Perform one complete handoff: wait for the host to exit, apply the
/// resource disposition, relaunch the host.
///
/// A failed discard is reported through the returned [`Disposition`]
/// (and logged as a warning by the resolver) but never stops the
/// handoff; only a failed relaunch is an error. Nothing done before a
/// failed launch is rolled back.
pub fn run(invocation: &Invocation) -> Result<Disposition> {
    info!("waiting for pid {} to exit", invocation.target_pid);
    watcher::wait_for_exit(invocation.target_pid.get(), watcher::POLL_INTERVAL);

    let disposition = resolver::resolve(&invocation.resource_path);
    launch_host(invocation, &disposition)?;

    Ok(disposition)
}

/// Relaunch the host for a decided disposition. The discard outcome
/// never gates this step; only the install path changes the arguments.
fn launch_host(invocation: &Invocation, disposition: &Disposition) -> Result<u32> {
    let package = match disposition {
        Disposition::Install { package } => Some(package.as_path()),
        Disposition::Discard { .. } => None,
    };
    launcher::spawn_detached(
        &invocation.host_executable,
        &invocation.host_base_dir,
        package,
    )
}
