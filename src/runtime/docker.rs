use std::path::{Path, PathBuf};
use std::time::Duration;

use super::command::capture_stdout;
use super::{ContainerRuntime, Result};

/// Output format for `docker ps` that prints only container names.
const NAMES_FORMAT: &str = "{{.Names}}";

/// [`ContainerRuntime`] backed by the `docker` command line tool.
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: PathBuf,
    timeout: Duration,
}

impl DockerCli {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        capture_stdout(&self.binary, args, self.timeout).await
    }
}

pub(super) fn list_args(friendly_names: bool) -> Vec<&'static str> {
    let mut args = vec!["ps"];
    if friendly_names {
        args.extend(["--format", NAMES_FORMAT]);
    }
    args
}

pub(super) fn stats_args(names: &[String]) -> Vec<&str> {
    let mut args = vec!["stats", "--no-stream=true"];
    args.extend(names.iter().map(String::as_str));
    args
}

impl ContainerRuntime for DockerCli {
    async fn list_running(&self, friendly_names: bool) -> Result<String> {
        self.run(&list_args(friendly_names)).await
    }

    async fn stats(&self, names: &[String]) -> Result<String> {
        self.run(&stats_args(names)).await
    }

    async fn info(&self) -> Result<String> {
        self.run(&["info"]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args() {
        assert_eq!(list_args(true), vec!["ps", "--format", "{{.Names}}"]);
        assert_eq!(list_args(false), vec!["ps"]);
    }

    #[test]
    fn test_stats_args_scoped_to_names() {
        let names = vec!["web1".to_owned(), "cache".to_owned()];
        assert_eq!(
            stats_args(&names),
            vec!["stats", "--no-stream=true", "web1", "cache"]
        );
    }

    #[tokio::test]
    async fn test_runs_configured_binary() {
        // `/bin/echo` stands in for docker and prints the arguments it receives.
        let cli = DockerCli::new("/bin/echo", Duration::from_secs(5));
        assert_eq!(cli.info().await.unwrap(), "info\n");
        assert_eq!(
            cli.stats(&["web1".to_owned()]).await.unwrap(),
            "stats --no-stream=true web1\n"
        );
    }
}
