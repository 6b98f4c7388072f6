//! Detached relaunch of the host application.

use crate::error::{HandoffError, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{error, info};

// Platform-specific imports for process detachment
#[cfg(unix)]
use std::os::unix::process::CommandExt;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

/// Build the host's argument vector: the base-directory flag always,
/// the package path appended only when one is being installed.
pub fn build_args(base_dir: &Path, package: Option<&Path>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-b".into(), base_dir.into()];
    if let Some(package) = package {
        args.push(package.into());
    }
    args
}

/// Start the host as an independent process and immediately let go of it.
///
/// The child gets null stdio and is detached from this process, so it
/// keeps running after the utility exits and never shows a console
/// window. Returns the child's pid; the handle is dropped right away
/// and the child is never waited on or monitored.
#[allow(unsafe_code)] // pre_exec detachment, see workspace lints
pub fn spawn_detached(executable: &Path, base_dir: &Path, package: Option<&Path>) -> Result<u32> {
    let mut cmd = Command::new(executable);
    cmd.args(build_args(base_dir, package));
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    #[cfg(unix)]
    {
        // SAFETY: setsid() is async-signal-safe and creates a new
        // session. The child stops being ours in the process-tree
        // sense and init adopts it once we exit.
        unsafe {
            cmd.pre_exec(|| {
                if libc::setsid() == -1 {
                    return Err(std::io::Error::last_os_error());
                }
                Ok(())
            });
        }
    }

    #[cfg(windows)]
    {
        // Detach from our console and process group so the host
        // survives our exit without flashing a window.
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NEW_PROCESS_GROUP | CREATE_NO_WINDOW);
    }

    info!("launching {}", executable.display());

    let child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            error!("failed to spawn {}: {}", executable.display(), err);
            return Err(HandoffError::LaunchFailed {
                executable: executable.to_path_buf(),
                source: err,
            });
        }
    };

    let pid = child.id();
    // Dropping the handle releases it without killing or waiting on
    // the child.
    drop(child);

    info!("host launched with pid {}", pid);
    Ok(pid)
}
