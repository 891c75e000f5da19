pub mod ast;
mod document;
pub mod file_reader;
pub mod global;
pub mod names;
mod namespace;
mod namespace_builder;
mod path_matcher;
mod registry;
mod resolve_error;
mod source_reader;

pub use document::DocumentError;
pub use document::DocumentKind;
pub use document::OperationKind;
pub use document::ResolvedDocument;
pub use namespace::Namespace;
pub use namespace_builder::DEFAULT_GRAPHQL_FILE_EXTS;
pub use namespace_builder::NamespaceBuildError;
pub use namespace_builder::NamespaceBuilder;
pub use path_matcher::CandidatePaths;
pub use path_matcher::PathMatcher;
pub use registry::DocumentRegistry;
pub use resolve_error::ResolveError;
pub use source_reader::FsSourceReader;
pub use source_reader::SourceReader;

#[cfg(test)]
mod tests;
