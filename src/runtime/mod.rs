//! Adapter around the container runtime CLI.
//!
//! Checks only see [`ContainerRuntime`], one method per piece of data they need.
//! The scraping of CLI text stays behind this seam so it can be replaced without
//! touching the check logic.
mod command;
mod docker;
mod error;

pub use command::capture_stdout;
pub use docker::DockerCli;
pub use error::{Error, Result};

/// Source of the raw text consumed by the checks.
pub trait ContainerRuntime {
    /// Lists running containers, names only when `friendly_names` is set.
    fn list_running(
        &self,
        friendly_names: bool,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Takes a single stats snapshot of exactly the given containers.
    fn stats(&self, names: &[String])
    -> impl std::future::Future<Output = Result<String>> + Send;

    /// Dumps the daemon's system information.
    fn info(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}
