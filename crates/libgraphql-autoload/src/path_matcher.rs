use crate::names;
use indexmap::IndexSet;

/// Ordered, duplicate-free list of root-relative paths that are known
/// GraphQL sources.
///
/// Paths are stored `/`-separated regardless of platform so that the same
/// list matches the same names everywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidatePaths {
    paths: IndexSet<String>,
}

impl CandidatePaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: impl AsRef<str>) -> bool {
        self.paths.contains(&normalize_path(path.as_ref()))
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.paths.get(path).map(String::as_str)
    }

    /// Appends `path` to the end of the list. Returns `false` if the path was
    /// already present.
    pub fn insert(&mut self, path: impl AsRef<str>) -> bool {
        self.paths.insert(normalize_path(path.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Removes `path` while keeping the order of the remaining entries.
    /// Returns `false` if the path was not present.
    pub fn remove(&mut self, path: impl AsRef<str>) -> bool {
        self.paths.shift_remove(&normalize_path(path.as_ref()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for CandidatePaths {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut paths = Self::new();
        for path in iter {
            paths.insert(path);
        }
        paths
    }
}

fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    path.strip_prefix("./").map(str::to_string).unwrap_or(path)
}

/// Maps names onto the relative file paths that would define them.
///
/// A document named `ArtistFragment` in the `Metaphysics` namespace is
/// expected at `metaphysics/artist_fragment.<ext>` for each configured
/// extension, in order. A name only matches when that path is present in the
/// [`CandidatePaths`] being consulted; nothing else is ever searched.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatcher {
    graphql_file_exts: Vec<String>,
    namespace_dir: String,
}

impl PathMatcher {
    pub fn new(namespace: &str, graphql_file_exts: Vec<String>) -> Self {
        Self {
            graphql_file_exts,
            namespace_dir: names::to_snake_case(namespace),
        }
    }

    /// Finds the candidate path for a constant-style name such as `Artist`.
    pub fn candidate_for_constant<'paths>(
        &self,
        paths: &'paths CandidatePaths,
        constant_name: &str,
    ) -> Option<&'paths str> {
        if !names::is_constant_name(constant_name) {
            return None;
        }
        self.candidate_for_stem(paths, &names::to_snake_case(constant_name))
    }

    /// Finds the candidate path for a method-style name such as `artist`.
    pub fn candidate_for_method<'paths>(
        &self,
        paths: &'paths CandidatePaths,
        method_name: &str,
    ) -> Option<&'paths str> {
        if !names::is_method_name(method_name) {
            return None;
        }
        self.candidate_for_stem(paths, method_name)
    }

    /// Derives the constant name a candidate path implies, or `None` when the
    /// path can never be reached through a name (outside the namespace
    /// directory, nested deeper, unknown extension, or a stem that does not
    /// survive the snake_case/PascalCase conversion).
    pub fn constant_name_for_path(&self, path: &str) -> Option<String> {
        let path = normalize_path(path);
        let relative = path
            .strip_prefix(self.namespace_dir.as_str())?
            .strip_prefix('/')?;

        let stem = self.graphql_file_exts.iter().find_map(|ext| {
            relative.strip_suffix(ext.as_str())?.strip_suffix('.')
        })?;

        if stem.contains('/') {
            return None;
        }
        names::constant_name_for_method(stem)
    }

    pub fn expected_paths(&self, constant_name: &str) -> Vec<String> {
        let stem = names::to_snake_case(constant_name);
        self.graphql_file_exts.iter()
            .map(|ext| self.path_for_stem(&stem, ext))
            .collect()
    }

    pub fn graphql_file_exts(&self) -> &[String] {
        &self.graphql_file_exts
    }

    pub fn namespace_dir(&self) -> &str {
        self.namespace_dir.as_str()
    }

    fn candidate_for_stem<'paths>(
        &self,
        paths: &'paths CandidatePaths,
        stem: &str,
    ) -> Option<&'paths str> {
        self.graphql_file_exts.iter().find_map(|ext| {
            paths.get(self.path_for_stem(stem, ext).as_str())
        })
    }

    fn path_for_stem(&self, stem: &str, ext: &str) -> String {
        format!("{}/{stem}.{ext}", self.namespace_dir)
    }
}
