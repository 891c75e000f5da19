use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Reads the full UTF-8 content of the file at `file_path`.
///
/// A path that does not exist surfaces as a
/// [`ReadContentError::FileReadError`] whose `err` is of kind
/// [`std::io::ErrorKind::NotFound`], so callers can still tell "missing" from
/// other I/O failures.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if file_path.is_dir() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    let content = String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    Ok(content)
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("file at {file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("failed to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("path {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl ReadContentError {
    /// Returns the path that could not be read.
    pub fn file_path(&self) -> &Path {
        match self {
            Self::FileDecodeError { file_path, .. }
                | Self::FileReadError { file_path, .. }
                | Self::PathIsNotAFile(file_path)
                => file_path.as_path(),
        }
    }

    /// True when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FileReadError { err, .. }
                if err.kind() == std::io::ErrorKind::NotFound,
        )
    }
}
