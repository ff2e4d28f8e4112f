//! Logger setup.
//!
//! Standard output belongs to the monitoring host, so all diagnostics go to stderr.
//! Without `RUST_LOG` only warnings and errors are shown until the config file
//! turns on `Debug=1`.

use log::LevelFilter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Installs `env_logger` as the global logger.
pub fn init() {
    let from_env = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Debug)
        .target(env_logger::Target::Stderr)
        .parse_default_env();
    if builder.try_init().is_err() {
        return;
    }

    // The logger itself accepts debug records; the global max level gates them so
    // `enable_debug` can open the gate later.
    if !from_env {
        log::set_max_level(DEFAULT_LEVEL);
    }
}

/// Raises the global level to debug unless `RUST_LOG` already decides it.
pub fn enable_debug() {
    if std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_none() {
        log::set_max_level(LevelFilter::Debug);
        log::debug!("debug logging enabled from config");
    }
}
