//! Line parser for the `key=value` config format.
//!
//! Keys are dispatched through a static setter table. Every setter validates its
//! value immediately so a typo is reported with its line number instead of
//! surfacing later as a wrong comparison.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use super::defaults;
use super::{Config, Error, Result};
use crate::report::Thresholds;

/// A single `key=value` line.
struct Entry<'a> {
    key: &'a str,
    value: &'a str,
    line: usize,
}

impl Entry<'_> {
    fn number(&self) -> Result<f64> {
        self.value
            .parse::<f64>()
            .map_err(|source| Error::InvalidNumber {
                key: self.key.to_owned(),
                value: self.value.to_owned(),
                line: self.line,
                source,
            })
    }

    fn flag(&self) -> Result<bool> {
        match self.value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(Error::InvalidFlag {
                key: self.key.to_owned(),
                value: self.value.to_owned(),
                line: self.line,
            }),
        }
    }

    fn seconds(&self) -> Result<Duration> {
        let secs = self.number()?;
        Duration::try_from_secs_f64(secs)
            .ok()
            .filter(|d| !d.is_zero())
            .ok_or_else(|| Error::InvalidTimeout {
                key: self.key.to_owned(),
                line: self.line,
            })
    }
}

/// Raw settings collected while reading; thresholds are validated as pairs once the
/// whole file has been read.
#[derive(Debug, Clone)]
pub(super) struct Draft {
    memory_warn: f64,
    memory_critical: f64,
    cpu_warn: f64,
    cpu_critical: f64,
    datastore_warn: f64,
    datastore_critical: f64,
    metastore_warn: f64,
    metastore_critical: f64,
    display_all_containers: bool,
    show_friendly_names: bool,
    debug: bool,
    command_timeout: Duration,
    monitor: Vec<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            memory_warn: defaults::MEMORY_WARN,
            memory_critical: defaults::MEMORY_CRITICAL,
            cpu_warn: defaults::CPU_WARN,
            cpu_critical: defaults::CPU_CRITICAL,
            datastore_warn: defaults::DATASTORE_WARN,
            datastore_critical: defaults::DATASTORE_CRITICAL,
            metastore_warn: defaults::METASTORE_WARN,
            metastore_critical: defaults::METASTORE_CRITICAL,
            display_all_containers: false,
            show_friendly_names: true,
            debug: false,
            command_timeout: Duration::from_secs(defaults::COMMAND_TIMEOUT_SECS),
            monitor: Vec::new(),
        }
    }
}

impl Draft {
    pub(super) fn finish(self) -> Result<Config> {
        let pair = |name, warn, critical| {
            Thresholds::new(warn, critical)
                .map_err(|source| Error::InvalidThresholds { name, source })
        };

        Ok(Config {
            memory: pair("memory", self.memory_warn, self.memory_critical)?,
            cpu: pair("cpu", self.cpu_warn, self.cpu_critical)?,
            datastore: pair("datastore", self.datastore_warn, self.datastore_critical)?,
            metastore: pair("metastore", self.metastore_warn, self.metastore_critical)?,
            display_all_containers: self.display_all_containers,
            show_friendly_names: self.show_friendly_names,
            debug: self.debug,
            command_timeout: self.command_timeout,
            monitor: self.monitor,
        })
    }
}

type Setter = fn(&mut Draft, &Entry<'_>) -> Result<()>;

static SETTERS: LazyLock<HashMap<&'static str, Setter>> = LazyLock::new(|| {
    let mut m: HashMap<&'static str, Setter> = HashMap::with_capacity(13);

    m.insert("checkmemwarn", |d, e| {
        d.memory_warn = e.number()?;
        Ok(())
    });
    m.insert("checkmemcritical", |d, e| {
        d.memory_critical = e.number()?;
        Ok(())
    });
    m.insert("checkcpuwarn", |d, e| {
        d.cpu_warn = e.number()?;
        Ok(())
    });
    m.insert("checkcpucritical", |d, e| {
        d.cpu_critical = e.number()?;
        Ok(())
    });
    m.insert("checkdatastorewarn", |d, e| {
        d.datastore_warn = e.number()?;
        Ok(())
    });
    m.insert("checkdatastorecritical", |d, e| {
        d.datastore_critical = e.number()?;
        Ok(())
    });
    m.insert("checkmetastorewarn", |d, e| {
        d.metastore_warn = e.number()?;
        Ok(())
    });
    m.insert("checkmetastorecritical", |d, e| {
        d.metastore_critical = e.number()?;
        Ok(())
    });
    m.insert("DisplayAllContainers", |d, e| {
        d.display_all_containers = e.flag()?;
        Ok(())
    });
    m.insert("ShowFriendlyNames", |d, e| {
        d.show_friendly_names = e.flag()?;
        Ok(())
    });
    m.insert("Debug", |d, e| {
        d.debug = e.flag()?;
        Ok(())
    });
    m.insert("CommandTimeout", |d, e| {
        d.command_timeout = e.seconds()?;
        Ok(())
    });
    m.insert("monitor", |d, e| {
        if !e.value.is_empty() {
            d.monitor.push(e.value.to_owned());
        }
        Ok(())
    });

    m
});

/// Reads config lines from `reader` on top of the defaults.
///
/// # Errors
///
/// Returns [`Error::ReadLine`] for I/O failures and the value errors of the setters.
pub(super) fn parse_reader<R: BufRead>(mut reader: R, origin: &Path) -> Result<Config> {
    let mut draft = Draft::default();
    let mut line = String::with_capacity(128);
    let mut lineno = 0;

    while reader
        .read_line(&mut line)
        .map_err(|source| Error::ReadLine {
            path: origin.to_path_buf(),
            line: lineno + 1,
            source,
        })?
        != 0
    {
        lineno += 1;
        apply_line(&mut draft, &line, lineno)?;
        line.clear();
    }

    draft.finish()
}

fn apply_line(draft: &mut Draft, line: &str, lineno: usize) -> Result<()> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(());
    }

    let Some((key, value)) = line.split_once('=') else {
        log::debug!("ignoring config line {lineno}: `{line}`");
        return Ok(());
    };
    let entry = Entry {
        key: key.trim(),
        value: value.trim(),
        line: lineno,
    };

    match SETTERS.get(entry.key) {
        Some(setter) => setter(draft, &entry),
        None => {
            log::debug!("ignoring unknown config key `{}` at line {lineno}", entry.key);
            Ok(())
        }
    }
}
