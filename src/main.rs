use std::process::ExitCode;

/// Entry point of the dockermon check_mk local check.
///
/// Takes no arguments. Results go to stdout, diagnostics to stderr.
///
/// Exit codes: `0` after a completed run, `1` if a default config file was just
/// written, `2` if docker is not installed, `3` on a fatal error such as a
/// malformed config file.
///
/// # Examples
///
/// ```bash
/// DOCKERMON_CONFIG=./dockermon.conf RUST_LOG=debug cargo run
/// ```
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dockermon::logging::init();
    match dockermon::run().await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(3)
        }
    }
}
