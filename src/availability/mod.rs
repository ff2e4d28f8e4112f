//! Docker availability detection.
//!
//! Locates the docker CLI and determines whether the daemon behind it is alive.
mod checks;
mod detect;
mod error;

pub use checks::{is_process_alive, locate_file, read_pid_file};
pub use detect::{DOCKER_BINARY_CANDIDATES, DOCKER_PID_FILE_CANDIDATES, DaemonState, detect_daemon};
pub use error::{Error, Result};
