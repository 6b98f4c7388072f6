//! Add-on handoff utility.
//!
//! Started by the host application just before it exits. Waits for the
//! host's pid to disappear, removes an add-on directory or stages a
//! package for installation, then relaunches the host detached:
//!
//! ```text
//! addon-handoff <pid> <host-exe> <host-base> <addon-dir-or-package>
//! ```
//!
//! Exits 0 once the host has been relaunched (a failed removal only
//! warns), 1 on bad arguments or when the host could not be launched.

use clap::error::ErrorKind;
use clap::Parser;
use handoff_core::Invocation;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "addon-handoff")]
#[command(
    about = "Wait for the host process to exit, then restart it \
             with optional package installation or add-on deletion"
)]
struct Args {
    /// Process ID to wait for
    #[arg(value_parser = handoff_core::invocation::parse_pid)]
    pid: NonZeroU32,

    /// Path to the host executable
    host_exe: PathBuf,

    /// Host base data directory
    host_base: PathBuf,

    /// Add-on directory to delete or package file to install
    addon_dir_or_package: PathBuf,
}

fn main() -> ExitCode {
    // Set up logging (RUST_LOG overrides the default level)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                // Bad argument count or an unparseable/zero pid: usage
                // is reported and nothing has been touched yet.
                _ => ExitCode::FAILURE,
            };
        }
    };

    if args.host_exe.as_os_str().is_empty() {
        error!("host executable path must not be empty");
        return ExitCode::FAILURE;
    }

    let invocation = Invocation {
        target_pid: args.pid,
        host_executable: args.host_exe,
        host_base_dir: args.host_base,
        resource_path: args.addon_dir_or_package,
    };

    match handoff_core::run(&invocation) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
