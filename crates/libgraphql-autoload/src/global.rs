//! The process-wide table of [`Namespace`]s.
//!
//! The table starts out empty. Hosts define namespaces once at startup; tests
//! call [`reset()`] to start from a clean slate.

use crate::Namespace;
use crate::ResolveError;
use crate::ResolvedDocument;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::RwLock;

type NamespaceTable = RwLock<HashMap<String, Arc<Namespace>>>;

fn namespaces() -> &'static NamespaceTable {
    static NAMESPACES: OnceLock<NamespaceTable> = OnceLock::new();
    NAMESPACES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Makes `namespace` available process-wide under its name, replacing any
/// namespace previously defined under the same name.
pub fn define_namespace(namespace: Namespace) -> Arc<Namespace> {
    let namespace = Arc::new(namespace);
    let previous = namespaces()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(namespace.name().to_string(), Arc::clone(&namespace));
    if previous.is_some() {
        tracing::debug!(namespace = namespace.name(), "Replaced GraphQL namespace");
    }
    namespace
}

pub fn lookup_namespace(name: &str) -> Option<Arc<Namespace>> {
    namespaces()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
}

pub fn remove_namespace(name: &str) -> Option<Arc<Namespace>> {
    namespaces()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(name)
}

/// Forgets every defined namespace (and with them, their cached documents).
pub fn reset() {
    namespaces()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

/// Resolves a `Namespace::Name` path, e.g. `Metaphysics::Artist`.
///
/// The namespace is looked up in the table and the name is resolved through
/// [`Namespace::resolve_by_name()`], i.e. against that namespace's own
/// candidate path list. Another namespace that happens to be called `Artist`
/// plays no part in resolving `Metaphysics::Artist`.
pub fn resolve_path(path: &str) -> Result<Arc<ResolvedDocument>, ResolveError> {
    let undefined = |namespace: &str, name: &str| ResolveError::UndefinedConstant {
        name: name.to_string(),
        namespace: namespace.to_string(),
    };

    let Some((namespace_name, name)) = path.rsplit_once("::") else {
        return Err(undefined("", path));
    };
    let namespace = lookup_namespace(namespace_name)
        .ok_or_else(|| undefined("", namespace_name))?;

    namespace.resolve_by_name(name)
}
