//! Parser for `docker stats --no-stream` output.
//!
//! Older releases print `NAME  CPU %  MEM USAGE / LIMIT  MEM %  NET I/O`, newer ones
//! prepend a `CONTAINER ID` column and append block I/O and pid counts. Both are
//! handled by anchoring on the first column that ends in `%` (the cpu column):
//!
//! ```text
//! CONTAINER ID   NAME   CPU %     MEM USAGE / LIMIT     MEM %     NET I/O           BLOCK I/O   PIDS
//! 3f2a1b0c9d8e   web1   12.50%    256MiB / 1.944GiB     12.86%    1.2kB / 648B      0B / 0B     5
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::units::parse_size;
use super::{Result, StatParseError, split_columns};

static SPACED_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+/\s+").expect("valid slash pattern"));

/// A single container's snapshot from `docker stats`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStats {
    pub name: String,
    /// CPU usage in percent of one core.
    pub cpu_percent: f64,
    /// Memory in use, in bytes.
    pub memory_used: u64,
    /// Memory limit reported for the container, in bytes.
    pub memory_limit: u64,
    /// Memory usage in percent as computed by docker.
    pub memory_percent: f64,
    /// Received and transmitted network bytes, if the column is present.
    pub network: Option<NetworkIo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkIo {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

impl ContainerStats {
    /// Parses one non-header line of `docker stats` output.
    ///
    /// # Errors
    ///
    /// Returns a [`StatParseError`] if a required column is missing or malformed.
    /// A malformed network column is not an error; it is reported as `None`.
    pub fn from_line(line: &str) -> Result<Self> {
        let normalized = SPACED_SLASH.replace_all(line.trim(), "/");
        let columns = split_columns(&normalized);

        let missing = |field| StatParseError::MissingField {
            field,
            line: line.to_owned(),
        };

        let cpu_idx = columns
            .iter()
            .position(|c| c.ends_with('%'))
            .ok_or_else(|| missing("cpu"))?;
        let name = cpu_idx
            .checked_sub(1)
            .and_then(|idx| columns.get(idx))
            .ok_or_else(|| missing("name"))?;
        let cpu_percent = parse_percent(columns[cpu_idx])?;

        let memory = columns.get(cpu_idx + 1).ok_or_else(|| missing("memory"))?;
        let (memory_used, memory_limit) = parse_pair(memory)?;

        let memory_percent = columns
            .get(cpu_idx + 2)
            .ok_or_else(|| missing("memory percent"))
            .and_then(|value| parse_percent(value))?;

        let network = columns
            .get(cpu_idx + 3)
            .and_then(|value| parse_pair(value).ok())
            .map(|(rx_bytes, tx_bytes)| NetworkIo { rx_bytes, tx_bytes });

        Ok(Self {
            name: (*name).to_owned(),
            cpu_percent,
            memory_used,
            memory_limit,
            memory_percent,
            network,
        })
    }
}

/// Returns true for the header line of `docker stats`.
pub fn is_stats_header(line: &str) -> bool {
    line.contains("CPU %")
}

fn parse_percent(value: &str) -> Result<f64> {
    value
        .trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .map_err(|source| StatParseError::InvalidPercent {
            value: value.to_owned(),
            source,
        })
}

fn parse_pair(value: &str) -> Result<(u64, u64)> {
    let (first, second) = value
        .split_once('/')
        .ok_or_else(|| StatParseError::InvalidPair {
            value: value.to_owned(),
        })?;
    Ok((parse_size(first)?, parse_size(second)?))
}
