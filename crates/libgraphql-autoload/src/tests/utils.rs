use crate::file_reader::ReadContentError;
use crate::FsSourceReader;
use crate::Namespace;
use crate::SourceReader;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::OnceLock;

pub(super) const ARTIST_QUERY: &str = "\
query Metaphysics__Artist($id: String!) {
  artist(id: $id) {
    name
    bio
    birthday
  }
}";

pub(super) const ARTIST_FRAGMENT: &str = "\
fragment Metaphysics__ArtistFragment on Artist {
  hometown
  deathday
}";

pub(super) fn get_fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/tests/fixtures")
    })
}

/// Reads fixture files from disk and counts every read.
#[derive(Debug)]
pub(super) struct CountingSourceReader {
    inner: FsSourceReader,
    reads: Arc<AtomicUsize>,
}
impl CountingSourceReader {
    pub(super) fn new() -> (Self, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let reader = Self {
            inner: FsSourceReader::new(get_fixtures_dir()),
            reads: Arc::clone(&reads),
        };
        (reader, reads)
    }
}
impl SourceReader for CountingSourceReader {
    fn read_source(&self, relative_path: &str) -> Result<String, ReadContentError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_source(relative_path)
    }
}

/// Serves sources from memory. Paths without a source behave like missing
/// files.
#[derive(Debug, Default)]
pub(super) struct MemorySourceReader {
    sources: HashMap<String, String>,
    reads: Arc<AtomicUsize>,
}
impl MemorySourceReader {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn read_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.reads)
    }

    pub(super) fn with_source(
        mut self,
        relative_path: &str,
        source: &str,
    ) -> Self {
        self.sources.insert(relative_path.to_string(), source.to_string());
        self
    }
}
impl SourceReader for MemorySourceReader {
    fn read_source(&self, relative_path: &str) -> Result<String, ReadContentError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.sources.get(relative_path)
            .cloned()
            .ok_or_else(|| ReadContentError::FileReadError {
                file_path: PathBuf::from(relative_path),
                err: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

/// The `Metaphysics` namespace over the fixture files, reading from disk.
pub(super) fn metaphysics() -> Namespace {
    Namespace::builder("Metaphysics")
        .root_dir(get_fixtures_dir())
        .discover_graphql_files()
        .build()
        .unwrap()
}

/// The `Metaphysics` namespace over the fixture files, plus a counter of
/// file reads.
pub(super) fn counting_metaphysics() -> (Namespace, Arc<AtomicUsize>) {
    let (reader, reads) = CountingSourceReader::new();
    let namespace = Namespace::builder("Metaphysics")
        .root_dir(get_fixtures_dir())
        .discover_graphql_files()
        .source_reader(reader)
        .build()
        .unwrap();
    (namespace, reads)
}

pub(super) fn reads(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
