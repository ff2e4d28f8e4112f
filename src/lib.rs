//! Dockermon: a check_mk local check for a docker host.
//!
//! One invocation inspects the docker daemon, its running containers and its storage
//! pools, and prints one `<status> <name> <perfdata> <description>` line per check on
//! standard output.
pub mod availability;
pub mod checks;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod inventory;
pub mod logging;
pub mod report;
pub mod runtime;
pub mod stats;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use availability::{
    DOCKER_BINARY_CANDIDATES, DOCKER_PID_FILE_CANDIDATES, detect_daemon, is_process_alive,
    locate_file,
};
use config::{Config, Loaded};
use error::{Error, Result, ResultOkLogExt};
use inventory::Inventory;
use report::Reporter;
use runtime::{ContainerRuntime, DockerCli};
use stats::InfoFields;

/// Environment variable that overrides [`config::DEFAULT_PATH`].
pub const CONFIG_ENV: &str = "DOCKERMON_CONFIG";

/// How a run ended, mapped to the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No docker binary on this host; nothing was printed.
    RuntimeMissing,
    /// The config file was missing and a default one was written.
    ConfigGenerated(PathBuf),
    /// All applicable checks were reported.
    Completed,
}

impl Outcome {
    pub fn code(&self) -> u8 {
        match self {
            Outcome::RuntimeMissing => 2,
            Outcome::ConfigGenerated(_) => 1,
            Outcome::Completed => 0,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH))
}

/// Runs every check once against the local docker installation.
///
/// # Errors
///
/// - [`Error::Config`] if the config file exists but cannot be read or is malformed.
/// - [`Error::Output`] if a result line cannot be written to stdout.
///
/// Failing docker invocations are not errors: they are logged and the checks that
/// depend on them are skipped.
pub async fn run() -> Result<Outcome> {
    let Some(binary) = locate_file(DOCKER_BINARY_CANDIDATES) else {
        log::debug!("no docker binary in {DOCKER_BINARY_CANDIDATES:?}");
        return Ok(Outcome::RuntimeMissing);
    };
    log::debug!("using docker binary {}", binary.display());

    let mut reporter = Reporter::new(std::io::stdout());

    let daemon = detect_daemon(DOCKER_PID_FILE_CANDIDATES, is_process_alive);
    log::debug!("daemon state: {daemon:?}");
    reporter.emit(&checks::daemon_service(&daemon))?;
    if !daemon.is_running() {
        return Ok(Outcome::Completed);
    }

    let path = config_path();
    let config = match config::load_or_generate(&path) {
        Ok(Loaded::Existing(config)) => config,
        Ok(Loaded::Generated) => {
            log::warn!("wrote default config to {}", path.display());
            return Ok(Outcome::ConfigGenerated(path));
        }
        Err(source) => return Err(Error::Config { path, source }),
    };
    if config.debug {
        logging::enable_debug();
        log::debug!("config: {config:?}");
    }

    let docker = DockerCli::new(binary, config.command_timeout);
    run_checks(&docker, &config, &mut reporter).await?;
    Ok(Outcome::Completed)
}

/// Runs the checks that need the daemon: count, metrics, presence and storage.
///
/// `docker ps` and `docker info` are each invoked once and shared between the
/// checks. When one of them fails the checks built on it are skipped.
///
/// # Errors
///
/// Returns [`Error::Output`] if writing to `reporter` fails.
pub async fn run_checks<R, W>(
    runtime: &R,
    config: &Config,
    reporter: &mut Reporter<W>,
) -> Result<()>
where
    R: ContainerRuntime,
    W: Write,
{
    let inventory = runtime
        .list_running(config.show_friendly_names)
        .await
        .ok_log()
        .map(Inventory::new);
    let info = runtime
        .info()
        .await
        .ok_log()
        .map(|text| InfoFields::parse(&text));

    match &inventory {
        Some(inventory) => {
            log::debug!("inventory:\n{}", inventory.raw());
            reporter.emit(&checks::running_containers(inventory))?;

            let names = inventory.names();
            if !names.is_empty() {
                if let Some(text) = runtime.stats(&names).await.ok_log() {
                    let samples = stats::parse_stats_output(&text);
                    let host_memory = info.as_ref().and_then(host_memory);
                    let results = checks::container_metrics(&samples, host_memory, config);
                    reporter.emit_all(&results)?;
                }
            }

            reporter.emit_all(&checks::watched_containers(inventory, &config.monitor))?;
        }
        None => log::warn!("container listing unavailable, skipping container checks"),
    }

    match &info {
        Some(info) => {
            if let Some(result) = checks::storage_pools(info, config) {
                reporter.emit(&result)?;
            }
        }
        None => log::warn!("docker info unavailable, skipping Docker_DataStores"),
    }

    Ok(())
}

fn host_memory(info: &InfoFields) -> Option<u64> {
    info.total_memory().unwrap_or_else(|err| {
        log::warn!("cannot read host memory: {err}");
        None
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    const GIB: u64 = 1024 * 1024 * 1024;

    const STATS: &str = "\
NAME   CPU %   MEM USAGE / LIMIT   MEM %
web1   10.00%   1GiB / 4GiB   25.00%
db   20.00%   1GiB / 4GiB   25.00%
";

    const POOLS: &str = "\
Storage Driver: devicemapper
 Data Space Used: 1 GB
 Data Space Available: 3 GB
 Metadata Space Used: 1 MB
 Metadata Space Available: 99 MB
";

    #[derive(Default)]
    struct FakeRuntime {
        listing: Option<String>,
        stats: Option<String>,
        info: Option<String>,
        list_calls: Mutex<Vec<bool>>,
        stats_calls: Mutex<Vec<Vec<String>>>,
    }

    fn reply(text: &Option<String>, command: &str) -> runtime::Result<String> {
        text.clone().ok_or_else(|| runtime::Error::Timeout {
            command: command.to_owned(),
            timeout: Duration::from_secs(10),
        })
    }

    impl ContainerRuntime for FakeRuntime {
        async fn list_running(&self, friendly_names: bool) -> runtime::Result<String> {
            self.list_calls.lock().unwrap().push(friendly_names);
            reply(&self.listing, "docker ps")
        }

        async fn stats(&self, names: &[String]) -> runtime::Result<String> {
            self.stats_calls.lock().unwrap().push(names.to_vec());
            reply(&self.stats, "docker stats")
        }

        async fn info(&self) -> runtime::Result<String> {
            reply(&self.info, "docker info")
        }
    }

    async fn output(runtime: &FakeRuntime, config: &Config) -> Vec<String> {
        let mut reporter = Reporter::new(Vec::new());
        run_checks(runtime, config, &mut reporter).await.unwrap();
        String::from_utf8(reporter.into_inner())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test]
    async fn test_full_run_order_and_format() {
        let runtime = FakeRuntime {
            listing: Some("web1\ndb\n".to_owned()),
            stats: Some(STATS.to_owned()),
            info: Some(format!("Total Memory: 8 GiB\n{POOLS}")),
            ..FakeRuntime::default()
        };
        let config = Config {
            monitor: vec!["web1".to_owned(), "cache".to_owned()],
            ..Config::default()
        };

        let lines = output(&runtime, &config).await;

        let (used, total) = (2 * GIB, 8 * GIB);
        let (warn, crit) = config.memory.levels_for(total);
        assert_eq!(
            lines,
            vec![
                "0 Docker_Containers Running_Instances=2 2 Docker container(s) are running"
                    .to_owned(),
                "0 Docker_CPU_Total CPU_Usage%=30.00;95;99;; Docker containers currently utilising 30.00% of cpu".to_owned(),
                format!(
                    "0 Docker_Memory_Total Memory_Usage={used};{warn};{crit};0;{total} Total memory usage is {used} of {total} or 25.00%"
                ),
                "0 Container_web1 Status=1 Container is UP!".to_owned(),
                "2 Container_cache Status=0 Container is DOWN!".to_owned(),
                "0 Docker_DataStores datastore=25.00;80;90;0;100|metastore=1.00;80;90;0;100 Datastore is at 25.00%, Metastore is at 1.00%".to_owned(),
            ]
        );
        assert_eq!(*runtime.list_calls.lock().unwrap(), vec![true]);
        assert_eq!(
            *runtime.stats_calls.lock().unwrap(),
            vec![vec!["web1".to_owned(), "db".to_owned()]]
        );
    }

    #[tokio::test]
    async fn test_no_containers_skips_stats() {
        let runtime = FakeRuntime {
            listing: Some("CONTAINER ID   IMAGE   NAMES\n".to_owned()),
            info: Some("Total Memory: 8 GiB\n".to_owned()),
            ..FakeRuntime::default()
        };
        let config = Config {
            show_friendly_names: false,
            ..Config::default()
        };

        let lines = output(&runtime, &config).await;

        assert_eq!(
            lines,
            vec!["0 Docker_Containers Running_Instances=0 0 Docker container(s) are running"]
        );
        assert!(runtime.stats_calls.lock().unwrap().is_empty());
        assert_eq!(*runtime.list_calls.lock().unwrap(), vec![false]);
    }

    #[tokio::test]
    async fn test_failed_listing_still_reports_storage() {
        let runtime = FakeRuntime {
            info: Some(POOLS.to_owned()),
            ..FakeRuntime::default()
        };

        let lines = output(&runtime, &Config::default()).await;

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("0 Docker_DataStores "));
        assert!(runtime.stats_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_info_skips_memory_total_and_storage() {
        let runtime = FakeRuntime {
            listing: Some("web1\n".to_owned()),
            stats: Some("web1   10.00%   1GiB / 4GiB   25.00%\n".to_owned()),
            ..FakeRuntime::default()
        };

        let lines = output(&runtime, &Config::default()).await;

        let names: Vec<_> = lines
            .iter()
            .map(|line| line.split(' ').nth(1).unwrap())
            .collect();
        assert_eq!(names, vec!["Docker_Containers", "Docker_CPU_Total"]);
    }

    #[tokio::test]
    async fn test_failed_stats_keeps_presence() {
        let runtime = FakeRuntime {
            listing: Some("web1\n".to_owned()),
            info: Some("Total Memory: 8 GiB\n".to_owned()),
            ..FakeRuntime::default()
        };
        let config = Config {
            monitor: vec!["web1".to_owned()],
            ..Config::default()
        };

        let lines = output(&runtime, &config).await;

        assert_eq!(
            lines,
            vec![
                "0 Docker_Containers Running_Instances=1 1 Docker container(s) are running",
                "0 Container_web1 Status=1 Container is UP!",
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_stats_line_is_skipped() {
        let runtime = FakeRuntime {
            listing: Some("web1\ndb\n".to_owned()),
            stats: Some("web1   --   --\ndb   20.00%   1GiB / 4GiB   25.00%\n".to_owned()),
            info: Some("Total Memory: 8 GiB\n".to_owned()),
            ..FakeRuntime::default()
        };
        let config = Config {
            display_all_containers: true,
            ..Config::default()
        };

        let lines = output(&runtime, &config).await;

        assert!(lines.iter().any(|l| l.contains(" Container_CPU_db ")));
        assert!(!lines.iter().any(|l| l.contains("web1")));
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::RuntimeMissing.code(), 2);
        assert_eq!(Outcome::ConfigGenerated(PathBuf::from("/x")).code(), 1);
        assert_eq!(Outcome::Completed.code(), 0);
    }
}
