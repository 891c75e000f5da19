use crate::file_reader;
use crate::file_reader::ReadContentError;
use std::path::Path;
use std::path::PathBuf;

/// Where a [`Namespace`](crate::Namespace) gets the text of its GraphQL
/// files from.
///
/// Paths handed to [`SourceReader::read_source`] are the `/`-separated,
/// root-relative entries of the namespace's candidate path list.
pub trait SourceReader: std::fmt::Debug + Send + Sync {
    fn read_source(&self, relative_path: &str) -> Result<String, ReadContentError>;
}

/// Reads GraphQL files from disk, relative to a root directory.
#[derive(Clone, Debug, PartialEq)]
pub struct FsSourceReader {
    root_dir: PathBuf,
}

impl FsSourceReader {
    pub fn new(root_dir: impl AsRef<Path>) -> Self {
        Self {
            root_dir: root_dir.as_ref().to_path_buf(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        self.root_dir.as_path()
    }
}

impl SourceReader for FsSourceReader {
    fn read_source(&self, relative_path: &str) -> Result<String, ReadContentError> {
        let file_path = relative_path
            .split('/')
            .fold(self.root_dir.clone(), |path, segment| path.join(segment));
        file_reader::read_content(file_path)
    }
}
