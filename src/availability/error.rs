use std::path::PathBuf;

/// Errors that may occur while inspecting the daemon's pid file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read pid file `{path}`: {source}")]
    ReadPidFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid pid '{value}' in `{path}`")]
    InvalidPid { path: PathBuf, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
