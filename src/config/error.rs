use std::num::ParseFloatError;
use std::path::PathBuf;

use crate::fsutil;
use crate::report::ThresholdError;

/// Errors that may occur while loading or generating the config file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to check if path `{path}` exists: {source}")]
    ExistenceCheck {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    FileOpen(#[from] fsutil::FileOpenError),
    #[error("failed to read line {line} of `{path}`: {source}")]
    ReadLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid number for `{key}` at line {line}: '{value}': {source}")]
    InvalidNumber {
        key: String,
        value: String,
        line: usize,
        #[source]
        source: ParseFloatError,
    },
    #[error("invalid flag for `{key}` at line {line}: '{value}' (expected yes/no, true/false, on/off or 1/0)")]
    InvalidFlag {
        key: String,
        value: String,
        line: usize,
    },
    #[error("invalid {name} thresholds: {source}")]
    InvalidThresholds {
        name: &'static str,
        #[source]
        source: ThresholdError,
    },
    #[error("invalid `{key}` at line {line}: must be a positive number of seconds")]
    InvalidTimeout { key: String, line: usize },
    #[error("failed to write default config `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
