use crate::names;
use crate::CandidatePaths;
use crate::DocumentRegistry;
use crate::FsSourceReader;
use crate::Namespace;
use crate::PathMatcher;
use crate::SourceReader;
use std::path::Path;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, Vec<NamespaceBuildError>>;

/// Default set of extensions a GraphQL document file may use.
pub const DEFAULT_GRAPHQL_FILE_EXTS: &[&str] = &["graphql"];

/// Builder for configuring a [`Namespace`].
///
/// # Example
///
/// ```no_run
/// use libgraphql_autoload::Namespace;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let metaphysics = Namespace::builder("Metaphysics")
///     .root_dir("app/graphql")
///     .discover_graphql_files()
///     .build()
///     .map_err(|errs| format!("{errs:?}"))?;
///
/// // Reads and parses `app/graphql/metaphysics/artist.graphql` on first use.
/// let artist = metaphysics.resolve_by_name("Artist")?;
/// println!("{}", artist.to_query_string());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NamespaceBuilder {
    discover_graphql_files: bool,
    graphql_file_exts: Vec<String>,
    graphql_file_paths: CandidatePaths,
    name: String,
    root_dir: PathBuf,
    source_reader: Option<Box<dyn SourceReader>>,
}

impl NamespaceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            discover_graphql_files: false,
            graphql_file_exts: DEFAULT_GRAPHQL_FILE_EXTS.iter()
                .map(|ext| ext.to_string())
                .collect(),
            graphql_file_paths: CandidatePaths::new(),
            name: name.into(),
            root_dir: PathBuf::from("."),
            source_reader: None,
        }
    }

    /// Add a root-relative, `/`-separated path to the candidate path list.
    pub fn add_graphql_file_path(mut self, path: impl AsRef<str>) -> Self {
        self.graphql_file_paths.insert(path);
        self
    }

    pub fn add_graphql_file_paths<P: AsRef<str>>(
        mut self,
        paths: impl IntoIterator<Item = P>,
    ) -> Self {
        for path in paths {
            self.graphql_file_paths.insert(path);
        }
        self
    }

    /// Validate the configuration and build the [`Namespace`].
    ///
    /// If discovery was requested, the namespace directory
    /// (`<root_dir>/<snake_case(name)>`) is walked now and every file with a
    /// matching extension is appended to the candidate path list, in file
    /// name order. All configuration and directory-walk errors are reported
    /// together.
    pub fn build(self) -> Result<Namespace> {
        let mut errors = vec![];

        if !names::is_constant_name(self.name.as_str()) {
            errors.push(NamespaceBuildError::InvalidNamespaceName(
                self.name.to_owned(),
            ));
        }
        if self.graphql_file_exts.is_empty() {
            errors.push(NamespaceBuildError::NoGraphQLFileExtensions);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let matcher = PathMatcher::new(
            self.name.as_str(),
            self.graphql_file_exts,
        );

        let mut graphql_file_paths = self.graphql_file_paths;
        if self.discover_graphql_files {
            let discovered = discover_graphql_files(
                self.root_dir.as_path(),
                &matcher,
                &mut errors,
            );
            for path in discovered {
                graphql_file_paths.insert(path);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        tracing::debug!(
            namespace = %self.name,
            root_dir = %self.root_dir.display(),
            paths = graphql_file_paths.len(),
            "Built GraphQL namespace"
        );

        let reader = self.source_reader.unwrap_or_else(|| {
            Box::new(FsSourceReader::new(self.root_dir.as_path()))
        });

        Ok(Namespace {
            graphql_file_paths: RwLock::new(graphql_file_paths),
            matcher,
            name: self.name,
            reader,
            registry: DocumentRegistry::new(),
        })
    }

    /// Walk the namespace directory under the root directory at build time
    /// and add every GraphQL file found there to the candidate path list.
    pub fn discover_graphql_files(mut self) -> Self {
        self.discover_graphql_files = true;
        self
    }

    /// Set the extensions (with or without a leading `.`) that GraphQL files
    /// may use, in order of preference. Defaults to
    /// [`DEFAULT_GRAPHQL_FILE_EXTS`].
    pub fn graphql_file_exts<E: AsRef<str>>(
        mut self,
        exts: impl IntoIterator<Item = E>,
    ) -> Self {
        self.graphql_file_exts =
            exts.into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect();
        self
    }

    /// Set the directory candidate paths are relative to. Defaults to the
    /// current working directory.
    pub fn root_dir(mut self, root_dir: impl AsRef<Path>) -> Self {
        self.root_dir = root_dir.as_ref().to_path_buf();
        self
    }

    /// Read GraphQL sources through `reader` instead of from disk under the
    /// root directory.
    pub fn source_reader(mut self, reader: impl SourceReader + 'static) -> Self {
        self.source_reader = Some(Box::new(reader));
        self
    }
}

fn discover_graphql_files(
    root_dir: &Path,
    matcher: &PathMatcher,
    errors: &mut Vec<NamespaceBuildError>,
) -> Vec<String> {
    let namespace_dir = root_dir.join(matcher.namespace_dir());
    tracing::debug!(dir = %namespace_dir.display(), "Scanning for GraphQL files");

    let mut paths = vec![];
    let walker = WalkDir::new(namespace_dir.as_path())
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                errors.push(NamespaceBuildError::DirectoryWalk {
                    dir: namespace_dir.to_owned(),
                    err,
                });
                continue;
            },
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            tracing::trace!(path = %path.display(), "Skipping non-file");
            continue;
        }

        let has_graphql_ext =
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    matcher.graphql_file_exts().iter().any(|e| e == ext)
                });
        if !has_graphql_ext {
            tracing::trace!(path = %path.display(), "Skipping non-GraphQL file");
            continue;
        }

        match path.strip_prefix(root_dir) {
            Ok(relative) => {
                let relative =
                    relative.components()
                        .map(|c| c.as_os_str().to_string_lossy())
                        .collect::<Vec<_>>()
                        .join("/");
                tracing::trace!(path = %relative, "Found GraphQL file");
                paths.push(relative);
            },
            Err(_) => tracing::trace!(
                path = %path.display(),
                "Skipping file outside of the root directory"
            ),
        }
    }

    paths
}

#[derive(Debug, Error)]
pub enum NamespaceBuildError {
    #[error("failed to scan {dir:?} for GraphQL files: {err}")]
    DirectoryWalk {
        dir: PathBuf,
        #[source]
        err: walkdir::Error,
    },

    #[error(
        "`{0}` is not a valid namespace name (expected an ASCII identifier \
        starting with an uppercase letter)"
    )]
    InvalidNamespaceName(String),

    #[error("at least one GraphQL file extension is required")]
    NoGraphQLFileExtensions,
}
