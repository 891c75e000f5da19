use crate::ast;
use crate::names;
use crate::CandidatePaths;
use crate::DocumentRegistry;
use crate::NamespaceBuilder;
use crate::PathMatcher;
use crate::ResolveError;
use crate::ResolvedDocument;
use crate::SourceReader;
use indexmap::IndexSet;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

type Result<T> = std::result::Result<T, ResolveError>;

/// A named group of GraphQL documents (e.g. `Metaphysics`) that are loaded
/// from `.graphql` files the first time they are looked up.
///
/// Documents can be looked up constant-style
/// ([`Namespace::resolve_by_name("Artist")`](Namespace::resolve_by_name)) or
/// method-style ([`Namespace::call_method("artist")`](Namespace::call_method)).
/// Either way the name is matched against this namespace's own candidate
/// path list, the file is read and parsed once, and the result is cached for
/// the lifetime of the `Namespace` (or until [`Namespace::reset()`]).
///
/// Fragments (names ending in `Fragment`) can only be looked up
/// constant-style.
#[derive(Debug)]
pub struct Namespace {
    pub(crate) graphql_file_paths: RwLock<CandidatePaths>,
    pub(crate) matcher: PathMatcher,
    pub(crate) name: String,
    pub(crate) reader: Box<dyn SourceReader>,
    pub(crate) registry: DocumentRegistry,
}

impl Namespace {
    /// Helper function that just delegates to [`NamespaceBuilder::new()`].
    pub fn builder(name: impl Into<String>) -> NamespaceBuilder {
        NamespaceBuilder::new(name)
    }

    /// Appends `path` to the candidate path list. Returns `false` if it was
    /// already listed.
    pub fn add_graphql_file_path(&self, path: impl AsRef<str>) -> bool {
        self.write_paths().insert(path)
    }

    /// Method-style lookup: `artist` resolves the `Artist` document.
    ///
    /// Fails with [`ResolveError::UndefinedMethod`] whenever
    /// [`Namespace::responds_to()`] is `false`, which includes every fragment
    /// name.
    pub fn call_method(&self, method_name: &str) -> Result<Arc<ResolvedDocument>> {
        let undefined_method = || ResolveError::UndefinedMethod {
            method_name: method_name.to_string(),
            namespace: self.name.to_owned(),
        };

        if !self.responds_to(method_name) {
            return Err(undefined_method());
        }
        let constant_name = names::constant_name_for_method(method_name)
            .ok_or_else(undefined_method)?;

        self.resolve_by_name(constant_name.as_str()).map_err(|err| {
            if err.is_name_error() { undefined_method() } else { err }
        })
    }

    /// A snapshot of the candidate path list, in order.
    pub fn graphql_file_paths(&self) -> Vec<String> {
        self.read_paths().iter().map(str::to_string).collect()
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Like [`Namespace::resolve_by_name()`], except that a name with no
    /// matching candidate path yields `Ok(None)` instead of an error.
    pub fn load_constant(&self, name: &str) -> Result<Option<Arc<ResolvedDocument>>> {
        match self.resolve_by_name(name) {
            Ok(document) => Ok(Some(document)),
            Err(ResolveError::UndefinedConstant { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Names of every document loaded so far, sorted.
    pub fn loaded_names(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn path_matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    /// Loads every document the candidate path list can name.
    ///
    /// Paths that no name can reach (see
    /// [`PathMatcher::constant_name_for_path()`]) are skipped. A failing path
    /// does not stop the others from loading: every path is attempted,
    /// successfully loaded documents stay cached, and all failures are
    /// returned together. On success, returns how many distinct documents
    /// the list names.
    pub fn preload_all(&self) -> std::result::Result<usize, Vec<ResolveError>> {
        let paths = self.graphql_file_paths();
        tracing::debug!(
            namespace = %self.name,
            paths = paths.len(),
            "Preloading GraphQL documents"
        );

        let mut errors = vec![];
        let mut loaded = IndexSet::new();
        for path in &paths {
            let Some(name) = self.matcher.constant_name_for_path(path) else {
                tracing::debug!(
                    namespace = %self.name,
                    path = %path,
                    "Skipping path that no name maps onto"
                );
                continue;
            };

            match self.resolve_by_name(name.as_str()) {
                Ok(_) => {
                    loaded.insert(name);
                },
                Err(err) => {
                    tracing::warn!(
                        namespace = %self.name,
                        path = %path,
                        error = %err,
                        "Failed to preload GraphQL document"
                    );
                    errors.push(err);
                },
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(loaded.len())
    }

    /// Removes `path` from the candidate path list. Returns `false` if it was
    /// not listed.
    pub fn remove_graphql_file_path(&self, path: impl AsRef<str>) -> bool {
        self.write_paths().remove(path)
    }

    /// Forgets every loaded document. The candidate path list is untouched.
    pub fn reset(&self) {
        tracing::debug!(namespace = %self.name, "Resetting document registry");
        self.registry.reset();
    }

    /// Constant-style lookup: `Artist` resolves the document defined in
    /// `<namespace_dir>/artist.graphql`.
    ///
    /// * A cached document is returned as-is, without touching the file
    ///   system.
    /// * A name with no matching entry in the candidate path list fails with
    ///   [`ResolveError::UndefinedConstant`].
    /// * A listed path whose file is missing or unreadable fails with
    ///   [`ResolveError::FileAccess`].
    /// * A file that does not parse fails with [`ResolveError::Parse`].
    pub fn resolve_by_name(&self, name: &str) -> Result<Arc<ResolvedDocument>> {
        if let Some(document) = self.registry.get(name) {
            tracing::trace!(namespace = %self.name, name, "Registry hit");
            return Ok(document);
        }

        let path = self.matcher
            .candidate_for_constant(&self.read_paths(), name)
            .map(str::to_string)
            .ok_or_else(|| ResolveError::UndefinedConstant {
                name: name.to_string(),
                namespace: self.name.to_owned(),
            })?;

        self.registry.get_or_try_insert_with(name, || {
            self.load_document(name, path.as_str())
        })
    }

    /// Whether [`Namespace::call_method()`] would find a document for
    /// `method_name`.
    ///
    /// Only consults naming conventions and the candidate path list: no file
    /// is read and nothing is cached. Fragment names never respond.
    pub fn responds_to(&self, method_name: &str) -> bool {
        if names::is_fragment_method_name(method_name)
            || names::constant_name_for_method(method_name).is_none() {
            return false;
        }
        self.matcher
            .candidate_for_method(&self.read_paths(), method_name)
            .is_some()
    }

    fn load_document(&self, name: &str, path: &str) -> Result<Arc<ResolvedDocument>> {
        tracing::debug!(namespace = %self.name, name, path, "Loading GraphQL document");

        let content = self.reader.read_source(path)
            .map_err(|err| ResolveError::FileAccess {
                err,
                name: name.to_string(),
                namespace: self.name.to_owned(),
                path: path.to_string(),
            })?;

        let ast_doc = ast::parse(content.as_str())
            .map_err(|err| ResolveError::Parse {
                err,
                path: path.to_string(),
            })?;

        let document = ResolvedDocument::from_ast(
            self.name.as_str(),
            name,
            path,
            ast_doc,
        ).map_err(|err| ResolveError::Document {
            err,
            path: path.to_string(),
            qualified_name: names::qualified_name(self.name.as_str(), name),
        })?;

        Ok(Arc::new(document))
    }

    fn read_paths(&self) -> RwLockReadGuard<'_, CandidatePaths> {
        self.graphql_file_paths.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_paths(&self) -> RwLockWriteGuard<'_, CandidatePaths> {
        self.graphql_file_paths.write().unwrap_or_else(PoisonError::into_inner)
    }
}
