//! Bounded execution of external commands.

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;

use super::{Error, Result};

/// Runs `program` with `args` and returns its standard output.
///
/// The child is killed if it does not exit within `timeout`.
///
/// # Errors
///
/// - [`Error::Spawn`] if the process cannot be started or waited on.
/// - [`Error::Timeout`] if it does not finish in time.
/// - [`Error::Failed`] if it exits unsuccessfully.
pub async fn capture_stdout(program: &Path, args: &[&str], timeout: Duration) -> Result<String> {
    let command = describe(program, args);
    let mut cmd = Command::new(program);
    // The output future owns the child, so dropping it on timeout kills the process.
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let before = Instant::now();
    let output = tokio::time::timeout(timeout, cmd.output())
        .await
        .map_err(|_| Error::Timeout {
            command: command.clone(),
            timeout,
        })?
        .map_err(|source| Error::Spawn {
            command: command.clone(),
            source,
        })?;
    log::trace!("`{command}` took {} ms", before.elapsed().as_millis());

    if !output.status.success() {
        return Err(Error::Failed {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn describe(program: &Path, args: &[&str]) -> String {
    let mut command = program.display().to_string();
    for arg in args {
        command.push(' ');
        command.push_str(arg);
    }
    command
}
