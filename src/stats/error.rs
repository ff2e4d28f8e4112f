//! Structured errors for the docker CLI text parsers.
//!
//! Every variant keeps the offending text so a diagnostic can point at the exact
//! line that failed, since the column layout varies between docker releases.

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatParseError {
    #[error("missing `{field}` column in line: `{line}`")]
    MissingField { field: &'static str, line: String },

    #[error("invalid percentage '{value}': {source}")]
    InvalidPercent {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid size '{value}'")]
    InvalidSize { value: String },

    #[error("expected `<used>/<total>` pair but got '{value}'")]
    InvalidPair { value: String },
}

pub type Result<T> = std::result::Result<T, StatParseError>;
