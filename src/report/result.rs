use std::fmt;

use super::Status;

/// The outcome of a single check, rendered as one output line.
///
/// Results are built once and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    status: Status,
    name: String,
    perfdata: String,
    description: String,
}

impl CheckResult {
    /// Creates a result.
    ///
    /// Whitespace inside `name` is replaced by `_` since the monitoring host splits
    /// the line on spaces. An empty `perfdata` is rendered as `-`.
    pub fn new(
        status: Status,
        name: impl AsRef<str>,
        perfdata: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name
            .as_ref()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        let mut perfdata = perfdata.into();
        if perfdata.is_empty() {
            perfdata.push('-');
        }

        Self {
            status,
            name,
            perfdata,
            description: description.into(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn perfdata(&self) -> &str {
        &self.perfdata
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.status, self.name, self.perfdata, self.description
        )
    }
}
