//! End-to-end tests driving the addon-handoff binary.

use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_addon-handoff"))
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = bin().output().expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "no usage text in: {stderr}");
}

#[test]
fn test_extra_argument_is_usage_error() {
    let output = bin()
        .args(["1234", "/bin/host", "/base", "/addons/foo", "surplus"])
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_malformed_pid_is_rejected() {
    let output = bin()
        .args(["abc", "/bin/host", "/base", "/addons/foo"])
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid process id"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_zero_pid_is_rejected() {
    let output = bin()
        .args(["0", "/bin/host", "/base", "/addons/foo"])
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
mod unix {
    use super::bin;
    use std::path::{Path, PathBuf};
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    /// Shell stub standing in for the host executable.
    fn write_stub_host(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("host.sh");
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    /// A pid that is known to have exited already.
    fn exited_pid() -> u32 {
        let mut child = std::process::Command::new("true").spawn().unwrap();
        let pid = child.id();
        child.wait().unwrap();
        pid
    }

    #[test]
    fn test_discard_run_removes_directory_and_exits_zero() {
        let temp_dir = TempDir::new().unwrap();
        let host = write_stub_host(temp_dir.path());
        let addon_dir = temp_dir.path().join("addons").join("foo");
        std::fs::create_dir_all(&addon_dir).unwrap();
        std::fs::write(addon_dir.join("__init__.py"), b"").unwrap();

        let status = bin()
            .arg(exited_pid().to_string())
            .arg(&host)
            .arg(temp_dir.path().join("base"))
            .arg(&addon_dir)
            .status()
            .expect("run binary");

        assert_eq!(status.code(), Some(0));
        assert!(!addon_dir.exists());
    }

    #[test]
    fn test_install_run_keeps_package_and_exits_zero() {
        let temp_dir = TempDir::new().unwrap();
        let host = write_stub_host(temp_dir.path());
        let package = temp_dir.path().join("foo.ankiaddon");
        std::fs::write(&package, b"payload").unwrap();

        let status = bin()
            .arg(exited_pid().to_string())
            .arg(&host)
            .arg(temp_dir.path().join("base"))
            .arg(&package)
            .status()
            .expect("run binary");

        assert_eq!(status.code(), Some(0));
        assert!(package.exists());
    }

    #[test]
    fn test_waits_for_running_target_before_launching() {
        let temp_dir = TempDir::new().unwrap();
        let host = write_stub_host(temp_dir.path());
        let package = temp_dir.path().join("foo.ankiaddon");
        std::fs::write(&package, b"payload").unwrap();

        let mut target = std::process::Command::new("sleep")
            .arg("1")
            .spawn()
            .expect("spawn sleep");
        let target_pid = target.id();

        // Reap in the background so the pid leaves the process table.
        let reaper = std::thread::spawn(move || {
            target.wait().unwrap();
        });

        let start = Instant::now();
        let status = bin()
            .arg(target_pid.to_string())
            .arg(&host)
            .arg(temp_dir.path().join("base"))
            .arg(&package)
            .status()
            .expect("run binary");
        let elapsed = start.elapsed();
        reaper.join().unwrap();

        assert_eq!(status.code(), Some(0));
        assert!(
            elapsed >= Duration::from_millis(800),
            "did not wait for the target: {elapsed:?}"
        );
    }

    #[test]
    fn test_missing_host_executable_exits_one() {
        let temp_dir = TempDir::new().unwrap();
        let package = temp_dir.path().join("foo.ankiaddon");
        std::fs::write(&package, b"payload").unwrap();

        let status = bin()
            .arg(exited_pid().to_string())
            .arg("/nonexistent/no-such-host")
            .arg(temp_dir.path().join("base"))
            .arg(&package)
            .status()
            .expect("run binary");

        assert_eq!(status.code(), Some(1));
    }

    #[test]
    fn test_failed_removal_still_launches() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let host = write_stub_host(temp_dir.path());
        let pinned = temp_dir.path().join("pinned");
        let addon_dir = pinned.join("addon");
        std::fs::create_dir_all(&addon_dir).unwrap();

        // Read-only parent makes every removal strategy fail (when not
        // running as root; the exit code must be 0 either way).
        let mut perms = std::fs::metadata(&pinned).unwrap().permissions();
        perms.set_mode(0o555);
        std::fs::set_permissions(&pinned, perms).unwrap();

        let status = bin()
            .arg(exited_pid().to_string())
            .arg(&host)
            .arg(temp_dir.path().join("base"))
            .arg(&addon_dir)
            .status()
            .expect("run binary");

        // Restore so TempDir can clean up.
        let mut perms = std::fs::metadata(&pinned).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&pinned, perms).unwrap();

        assert_eq!(status.code(), Some(0));
    }
}
