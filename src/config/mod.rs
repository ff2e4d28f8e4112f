//! Check configuration.
//!
//! The config file is a line based `key=value` format with `#` comments:
//!
//! ```text
//! checkmemwarn=80
//! DisplayAllContainers=False
//! monitor=web1
//! monitor=1d1792684b10
//! ```
//!
//! A missing file is replaced by a generated default and the run stops, so the
//! operator reviews the thresholds before the first real check.
mod defaults;
mod error;
mod parser;

use std::path::Path;
use std::time::Duration;

pub use defaults::{generate, template};
pub use error::{Error, Result};

use crate::fsutil;
use crate::report::Thresholds;

/// Default location of the config file on check_mk agents.
pub const DEFAULT_PATH: &str = "/etc/check_mk/dockermon.conf";

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub memory: Thresholds,
    pub cpu: Thresholds,
    pub datastore: Thresholds,
    pub metastore: Thresholds,
    /// Emit per-container cpu and memory results in addition to the totals.
    pub display_all_containers: bool,
    /// List containers by name instead of by id.
    pub show_friendly_names: bool,
    pub debug: bool,
    /// Upper bound for every docker invocation.
    pub command_timeout: Duration,
    /// Containers that must be running, matched by substring.
    pub monitor: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        parser::Draft::default()
            .finish()
            .expect("built-in defaults are valid")
    }
}

/// Result of [`load_or_generate`].
#[derive(Debug)]
pub enum Loaded {
    /// The file existed and was parsed.
    Existing(Config),
    /// The file was missing; a default one has been written.
    Generated,
}

/// Loads the config at `path`.
///
/// # Errors
///
/// - [`Error::FileOpen`] if the file can't be opened.
/// - [`Error::ReadLine`] if reading a line fails.
/// - A value error if a key carries a malformed value or a threshold pair is inverted.
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let reader = fsutil::open_file_reader(path)?;
    let config = parser::parse_reader(reader, path)?;
    log::debug!("loaded config from {}: {config:?}", path.display());
    Ok(config)
}

/// Loads the config at `path`, or writes the default one if it does not exist.
///
/// # Errors
///
/// Returns the errors of [`load`] and [`generate`], and [`Error::ExistenceCheck`] if
/// the existence of `path` cannot be determined.
pub fn load_or_generate(path: impl AsRef<Path>) -> Result<Loaded> {
    let path = path.as_ref();
    let exists = path.try_exists().map_err(|source| Error::ExistenceCheck {
        path: path.to_path_buf(),
        source,
    })?;

    if exists {
        load(path).map(Loaded::Existing)
    } else {
        generate(path)?;
        Ok(Loaded::Generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.memory, Thresholds::new(80.0, 90.0).unwrap());
        assert_eq!(config.cpu, Thresholds::new(95.0, 99.0).unwrap());
        assert_eq!(config.datastore, Thresholds::new(80.0, 90.0).unwrap());
        assert_eq!(config.metastore, Thresholds::new(80.0, 90.0).unwrap());
        assert!(!config.display_all_containers);
        assert!(config.show_friendly_names);
        assert!(!config.debug);
        assert_eq!(config.command_timeout, Duration::from_secs(10));
        assert!(config.monitor.is_empty());
    }

    #[test]
    fn test_generate_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dockermon.conf");

        let first = load_or_generate(&path).unwrap();
        assert!(matches!(first, Loaded::Generated));
        assert!(path.exists());

        match load_or_generate(&path).unwrap() {
            Loaded::Existing(config) => assert_eq!(config, Config::default()),
            Loaded::Generated => panic!("config should have been loaded"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/definitely/does/not/exist.conf").unwrap_err();
        assert!(matches!(err, Error::FileOpen(_)));
    }

    #[test]
    fn test_load_custom_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dockermon.conf");
        std::fs::write(&path, "checkcpuwarn=50\nmonitor=web1\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.cpu.warn(), 50.0);
        assert_eq!(config.monitor, vec!["web1"]);
    }
}
