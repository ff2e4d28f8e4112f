//! Parsers for the text produced by the docker CLI.
//!
//! # Main types
//!
//! - [`ContainerStats`]: one line of `docker stats --no-stream`.
//! - [`InfoFields`]: the `Label: value` pairs of `docker info`.
//! - [`convert`] / [`parse_size`]: size suffix normalization to bytes.
//!
//! The CLI output is not a stable format, so every parser reports failures through
//! [`StatParseError`] instead of panicking and the caller decides whether to skip.

mod container;
mod error;
pub mod info;
mod units;

pub use container::{ContainerStats, NetworkIo, is_stats_header};
pub use error::{Result, StatParseError};
pub use info::InfoFields;
pub use units::{convert, multiplier, parse_size};

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ResultOkLogExt;

static COLUMN_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid column pattern"));

/// Splits a tabular CLI line into columns.
///
/// Columns are separated by runs of two or more whitespace characters; single
/// spaces stay inside a column (`MEM USAGE / LIMIT`, `1.5 MiB`).
pub fn split_columns(line: &str) -> Vec<&str> {
    COLUMN_GAP
        .split(line.trim())
        .filter(|column| !column.is_empty())
        .collect()
}

/// Parses the full output of `docker stats --no-stream`.
///
/// Header and blank lines are skipped. A malformed line is logged and dropped so the
/// remaining containers are still evaluated.
pub fn parse_stats_output(text: &str) -> Vec<ContainerStats> {
    text.lines()
        .filter(|line| !line.trim().is_empty() && !is_stats_header(line))
        .filter_map(|line| {
            log::debug!("stats line: {line}");
            ContainerStats::from_line(line).ok_log()
        })
        .collect()
}
