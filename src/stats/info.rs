//! Key/value view over `docker info` output.
//!
//! `docker info` prints an indented, loosely structured dump:
//!
//! ```text
//! Server:
//!  Storage Driver: devicemapper
//!   Data Space Used: 1.2 GB
//!   Data Space Available: 10.5 GB
//!  Total Memory: 7.774GiB
//! ```
//!
//! Only `Label: value` lines are kept; the first occurrence of a label wins.

use std::collections::HashMap;

use super::Result;
use super::units::parse_size;

pub const TOTAL_MEMORY: &str = "Total Memory";
pub const DATA_SPACE_USED: &str = "Data Space Used";
pub const DATA_SPACE_AVAILABLE: &str = "Data Space Available";
pub const METADATA_SPACE_USED: &str = "Metadata Space Used";
pub const METADATA_SPACE_AVAILABLE: &str = "Metadata Space Available";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoFields {
    fields: HashMap<String, String>,
}

impl InfoFields {
    pub fn parse(text: &str) -> Self {
        let mut fields = HashMap::new();
        for line in text.lines() {
            if let Some((label, value)) = line.trim().split_once(": ") {
                fields
                    .entry(label.trim().to_owned())
                    .or_insert_with(|| value.trim().to_owned());
            }
        }

        Self { fields }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    /// Looks up a size field and converts it to bytes.
    ///
    /// Returns `Ok(None)` if the label is absent.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the label is present but its value is not a size.
    pub fn size(&self, label: &str) -> Result<Option<u64>> {
        self.get(label).map(parse_size).transpose()
    }

    /// Host memory visible to the docker daemon, in bytes.
    pub fn total_memory(&self) -> Result<Option<u64>> {
        self.size(TOTAL_MEMORY)
    }
}
