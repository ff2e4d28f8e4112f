use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Error that occurs when opening a file fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to open file `{path}`: {source}")]
pub struct FileOpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Error that occurs when reading a file's metadata fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to read metadata of `{path}`: {source}")]
pub struct MetadataError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Opens a file at the given path and wraps it in a [`BufReader`].
///
/// # Errors
///
/// Returns a [`FileOpenError`] if the file cannot be opened.
pub fn open_file_reader(path: impl AsRef<Path>) -> Result<BufReader<File>, FileOpenError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FileOpenError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Reads the first line of a file, without the trailing newline.
///
/// # Errors
///
/// Returns an [`io::Error`] if the file cannot be opened or read.
pub fn read_first_line(path: impl AsRef<Path>) -> io::Result<String> {
    let mut reader =
        open_file_reader(path).map_err(|err| io::Error::new(err.source.kind(), err))?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end().to_owned())
}

/// Returns how long ago the file was last modified.
///
/// A modification time in the future yields [`Duration::ZERO`].
///
/// # Errors
///
/// Returns a [`MetadataError`] if the metadata or its modification time is unavailable.
pub fn modified_age(path: impl AsRef<Path>) -> Result<Duration, MetadataError> {
    let path = path.as_ref();
    let modified = std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|source| MetadataError {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(SystemTime::now()
        .duration_since(modified)
        .unwrap_or(Duration::ZERO))
}
