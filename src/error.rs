use std::path::PathBuf;

use crate::config;

/// Fatal errors that abort a run.
///
/// Everything else (docker failures, parse failures) is logged and the affected
/// check skipped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config `{path}`: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: config::Error,
    },
    #[error("failed to write check output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait ResultOkLogExt<T, E> {
    fn ok_log(self) -> Option<T>;
}

impl<T, E> ResultOkLogExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn ok_log(self) -> Option<T> {
        match self {
            Ok(ok) => Some(ok),
            Err(err) => {
                log::error!("{err}");
                None
            }
        }
    }
}
