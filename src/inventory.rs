//! Raw `docker ps` output, kept as text and shared by the checks of one run.

use crate::stats::split_columns;

const HEADER_MARKER: &str = "CONTAINER ID";

/// The running-container listing captured once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    raw: String,
}

impl Inventory {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lines describing a container: header and blank lines are skipped.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.raw
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.contains(HEADER_MARKER))
    }

    pub fn count(&self) -> usize {
        self.entries().count()
    }

    /// The first column of every entry: the name when listing with
    /// `--format {{.Names}}`, the container id otherwise.
    pub fn names(&self) -> Vec<String> {
        self.entries()
            .filter_map(|line| split_columns(line).first().map(|c| (*c).to_owned()))
            .collect()
    }

    /// Returns true if any entry contains `needle` as a plain substring.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().any(|line| line.contains(needle))
    }
}
