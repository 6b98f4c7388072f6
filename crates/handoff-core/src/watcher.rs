//! Process watcher: blocks until the target process has exited.

use crate::platform;
use std::time::Duration;
use tracing::{debug, info};

/// Delay between liveness checks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Block the calling thread until `pid` is no longer alive.
///
/// Polls at a fixed `interval` with no upper bound: the utility's only
/// job is to outwait the host, so it never gives up on its own. A pid
/// that cannot be queried counts as already exited (see
/// [`platform::is_process_alive`]), which also means a pid that never
/// existed returns immediately.
pub fn wait_for_exit(pid: u32, interval: Duration) {
    while platform::is_process_alive(pid) {
        debug!("pid {} still running, sleeping", pid);
        std::thread::sleep(interval);
    }
    info!("pid {} is no longer running", pid);
}
