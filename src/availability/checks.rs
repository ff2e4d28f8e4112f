use std::path::{Path, PathBuf};

use super::{Error, Result};
use crate::fsutil;

/// Returns the first candidate that is a regular file.
pub fn locate_file<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
}

/// Reads a positive pid from the first line of `path`.
///
/// # Errors
///
/// * [`Error::ReadPidFile`] if the file cannot be read.
/// * [`Error::InvalidPid`] if the first line is not a positive process id.
pub fn read_pid_file(path: impl AsRef<Path>) -> Result<libc::pid_t> {
    let path = path.as_ref();
    let line = fsutil::read_first_line(path).map_err(|source| Error::ReadPidFile {
        path: path.to_path_buf(),
        source,
    })?;

    line.trim()
        .parse::<libc::pid_t>()
        .ok()
        .filter(|pid| *pid > 0)
        .ok_or_else(|| Error::InvalidPid {
            path: path.to_path_buf(),
            value: line,
        })
}

/// Returns true if a process with the given pid exists.
///
/// Uses `kill(pid, 0)`, which performs the permission and existence checks without
/// delivering a signal. `EPERM` means the process exists but belongs to someone else.
pub fn is_process_alive(pid: libc::pid_t) -> bool {
    if pid <= 0 {
        return false;
    }

    // SAFETY: kill(2) with signal 0 does not affect the target process.
    let result = unsafe { libc::kill(pid, 0) };
    if result == 0 {
        return true;
    }

    std::io::Error::last_os_error().kind() == std::io::ErrorKind::PermissionDenied
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_locate_file_picks_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("docker");
        std::fs::write(&second, "").unwrap();

        let candidates = [dir.path().join("missing"), second.clone()];
        assert_eq!(locate_file(&candidates), Some(second));
    }

    #[test]
    fn test_locate_file_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(locate_file(&[dir.path()]), None);
    }

    #[test]
    fn test_locate_file_none_found() {
        assert_eq!(locate_file(&["/definitely/does/not/exist"]), None);
    }

    #[test]
    fn test_read_pid_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "4242").unwrap();
        assert_eq!(read_pid_file(tmp.path()).unwrap(), 4242);
    }

    #[test]
    fn test_read_pid_file_rejects_garbage() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "not-a-pid").unwrap();
        let err = read_pid_file(tmp.path()).unwrap_err();
        match err {
            Error::InvalidPid { value, .. } => assert_eq!(value, "not-a-pid"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_pid_file_rejects_zero_and_empty() {
        let mut zero = tempfile::NamedTempFile::new().unwrap();
        writeln!(zero, "0").unwrap();
        assert!(matches!(
            read_pid_file(zero.path()),
            Err(Error::InvalidPid { .. })
        ));

        let empty = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            read_pid_file(empty.path()),
            Err(Error::InvalidPid { .. })
        ));
    }

    #[test]
    fn test_read_pid_file_missing() {
        assert!(matches!(
            read_pid_file("/definitely/does/not/exist.pid"),
            Err(Error::ReadPidFile { .. })
        ));
    }

    #[test]
    fn test_own_process_is_alive() {
        let pid = std::process::id() as libc::pid_t;
        assert!(is_process_alive(pid));
    }

    #[test]
    fn test_non_positive_pid_is_not_alive() {
        assert!(!is_process_alive(0));
        assert!(!is_process_alive(-1));
    }
}
