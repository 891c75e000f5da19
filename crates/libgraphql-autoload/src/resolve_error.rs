use crate::ast;
use crate::DocumentError;
use crate::file_reader::ReadContentError;
use thiserror::Error;

/// Everything that can go wrong when looking up a name in a
/// [`Namespace`](crate::Namespace).
///
/// "This name means nothing here" ([`ResolveError::UndefinedConstant`],
/// [`ResolveError::UndefinedMethod`]) is deliberately kept apart from "this
/// name maps onto a file, but the file could not be used" (every other
/// variant). [`ResolveError::is_name_error()`] tells the two groups apart.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("`{path}` does not define `{qualified_name}`: {err}")]
    Document {
        #[source]
        err: DocumentError,
        path: String,
        qualified_name: String,
    },

    #[error("failed to read `{path}` for {}: {err}", constant_path(.namespace, .name))]
    FileAccess {
        #[source]
        err: ReadContentError,
        name: String,
        namespace: String,
        path: String,
    },

    #[error("failed to parse `{path}`: {err}")]
    Parse {
        #[source]
        err: ast::ParseError,
        path: String,
    },

    #[error("uninitialized constant {}", constant_path(.namespace, .name))]
    UndefinedConstant {
        name: String,
        namespace: String,
    },

    #[error("undefined method `{method_name}` for {namespace}")]
    UndefinedMethod {
        method_name: String,
        namespace: String,
    },
}

impl ResolveError {
    /// True for the errors that mean "no such name".
    pub fn is_name_error(&self) -> bool {
        matches!(
            self,
            Self::UndefinedConstant { .. } | Self::UndefinedMethod { .. },
        )
    }

    /// True when a name matched a candidate path but nothing exists there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileAccess { err, .. } if err.is_not_found())
    }
}

fn constant_path(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}::{name}")
    }
}
