use std::path::{Path, PathBuf};
use std::time::Duration;

use super::checks::{locate_file, read_pid_file};
use crate::fsutil;

/// Candidate locations of the docker CLI.
pub const DOCKER_BINARY_CANDIDATES: &[&str] = &["/usr/bin/docker", "/usr/local/bin/docker"];

/// Candidate locations of the docker daemon's pid file.
pub const DOCKER_PID_FILE_CANDIDATES: &[&str] = &["/run/docker.pid", "/var/run/docker.pid"];

/// Observed state of the docker daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonState {
    /// The daemon process exists; `uptime` is derived from the pid file's mtime.
    Running { pid: libc::pid_t, uptime: Duration },
    /// None of the pid file candidates exists.
    NoPidFile,
    /// A pid file exists but does not hold a usable pid.
    UnreadablePidFile { path: PathBuf },
    /// The recorded process does not exist anymore.
    NotRunning { pid: libc::pid_t },
}

impl DaemonState {
    /// Only a running daemon lets the remaining checks query it.
    pub fn is_running(&self) -> bool {
        matches!(self, DaemonState::Running { .. })
    }
}

/// Determines the daemon state from the given pid file candidates.
///
/// `probe` decides whether a pid refers to a live process; production code passes
/// [`is_process_alive`](super::is_process_alive).
///
/// All individual errors are logged and folded into the returned state.
pub fn detect_daemon<P, F>(pid_file_candidates: &[P], probe: F) -> DaemonState
where
    P: AsRef<Path>,
    F: Fn(libc::pid_t) -> bool,
{
    let Some(pid_file) = locate_file(pid_file_candidates) else {
        log::debug!("no docker pid file found");
        return DaemonState::NoPidFile;
    };

    let pid = match read_pid_file(&pid_file) {
        Ok(pid) => pid,
        Err(err) => {
            log::warn!("{err}");
            return DaemonState::UnreadablePidFile { path: pid_file };
        }
    };

    if !probe(pid) {
        log::debug!("docker pid {pid} from {} is not alive", pid_file.display());
        return DaemonState::NotRunning { pid };
    }

    let uptime = match fsutil::modified_age(&pid_file) {
        Ok(age) => age,
        Err(err) => {
            log::warn!("cannot determine docker uptime: {err}");
            Duration::ZERO
        }
    };
    log::debug!("docker pid {pid} alive for {}s", uptime.as_secs());

    DaemonState::Running { pid, uptime }
}
