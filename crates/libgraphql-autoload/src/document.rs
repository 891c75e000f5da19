use crate::ast;
use crate::names;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentError>;

/// Similar to [`DocumentKind`], but only for operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocumentKind {
    Fragment,
    Operation(OperationKind),
}

/// An immutable, parsed GraphQL document that was resolved under a name in
/// some namespace.
///
/// The document's *primary definition* (the operation or fragment the name
/// refers to) is always named `Namespace__Name`, regardless of how it was
/// named in the source file. Any other definitions in the file are kept as
/// they were written.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedDocument {
    document: ast::Document,
    kind: DocumentKind,
    name: String,
    primary_def_index: usize,
    qualified_name: String,
    source_path: PathBuf,
}

impl ResolvedDocument {
    /// Wraps a parsed document as the document for `name` in `namespace`,
    /// renaming its primary definition to `Namespace__Name`.
    ///
    /// The primary definition is picked as follows:
    ///
    /// 1. A definition of the expected kind (a fragment when `name` ends with
    ///    `Fragment`, an operation otherwise) named either `Namespace__Name`
    ///    or `Name`.
    /// 2. Otherwise the only definition of the expected kind.
    ///
    /// Anonymous shorthand operations (`{ ... }`) become named queries.
    pub fn from_ast(
        namespace: &str,
        name: &str,
        source_path: impl AsRef<Path>,
        mut document: ast::Document,
    ) -> Result<Self> {
        let qualified_name = names::qualified_name(namespace, name);
        let expects_fragment = names::is_fragment_constant_name(name);

        let primary_def_index = find_primary_definition(
            &document,
            name,
            &qualified_name,
            expects_fragment,
        )?;
        let kind = qualify_definition(
            &mut document.definitions[primary_def_index],
            &qualified_name,
        );

        Ok(Self {
            document,
            kind,
            name: name.to_string(),
            primary_def_index,
            qualified_name,
            source_path: source_path.as_ref().to_path_buf(),
        })
    }

    pub fn document(&self) -> &ast::Document {
        &self.document
    }

    pub fn is_fragment(&self) -> bool {
        self.kind == DocumentKind::Fragment
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The name this document was resolved under (e.g. `Artist`).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn primary_definition(&self) -> &ast::Definition {
        &self.document.definitions[self.primary_def_index]
    }

    /// The name of the primary definition (e.g. `Metaphysics__Artist`).
    pub fn qualified_name(&self) -> &str {
        self.qualified_name.as_str()
    }

    /// The root-relative path of the file this document was read from.
    pub fn source_path(&self) -> &Path {
        self.source_path.as_path()
    }

    /// Canonical GraphQL text for the whole document, as printed by
    /// `graphql-parser` (two-space indentation, one selection per line, no
    /// trailing newline).
    pub fn to_query_string(&self) -> String {
        self.document.to_string().trim_end().to_string()
    }
}

impl std::fmt::Display for ResolvedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_query_string().as_str())
    }
}

fn definition_name(def: &ast::Definition) -> Option<&str> {
    use ast::Definition as Def;
    use ast::OperationDefinition as OpDef;
    match def {
        Def::Fragment(frag) => Some(frag.name.as_str()),
        Def::Operation(OpDef::Query(query)) => query.name.as_deref(),
        Def::Operation(OpDef::Mutation(mutation)) => mutation.name.as_deref(),
        Def::Operation(OpDef::Subscription(sub)) => sub.name.as_deref(),
        Def::Operation(OpDef::SelectionSet(_)) => None,
    }
}

fn find_primary_definition(
    document: &ast::Document,
    name: &str,
    qualified_name: &str,
    expects_fragment: bool,
) -> Result<usize> {
    let candidates: Vec<(usize, &ast::Definition)> =
        document.definitions.iter()
            .enumerate()
            .filter(|(_, def)| {
                matches!(def, ast::Definition::Fragment(_)) == expects_fragment
            })
            .collect();

    let named_match = candidates.iter().find(|(_, def)| {
        definition_name(def)
            .is_some_and(|def_name| def_name == qualified_name || def_name == name)
    });
    if let Some((idx, _)) = named_match {
        return Ok(*idx);
    }

    match candidates.as_slice() {
        [(idx, _)] => Ok(*idx),
        [] => Err(DocumentError::NoMatchingDefinition {
            expected: if expects_fragment { "a fragment" } else { "an operation" },
            qualified_name: qualified_name.to_string(),
        }),
        _ => Err(DocumentError::AmbiguousDefinitions {
            definition_names: candidates.iter()
                .map(|(_, def)| {
                    definition_name(def).unwrap_or("<anonymous>").to_string()
                })
                .collect(),
            qualified_name: qualified_name.to_string(),
        }),
    }
}

fn qualify_definition(
    def: &mut ast::Definition,
    qualified_name: &str,
) -> DocumentKind {
    use ast::Definition as Def;
    use ast::OperationDefinition as OpDef;

    if let Def::Operation(OpDef::SelectionSet(selection_set)) = def {
        let selection_set = selection_set.clone();
        *def = Def::Operation(OpDef::Query(ast::Query {
            position: selection_set.span.0,
            name: None,
            variable_definitions: vec![],
            directives: vec![],
            selection_set,
        }));
    }

    let qualified_name = qualified_name.to_string();
    match def {
        Def::Fragment(frag) => {
            frag.name = qualified_name;
            DocumentKind::Fragment
        },
        Def::Operation(OpDef::Query(query)) => {
            query.name = Some(qualified_name);
            DocumentKind::Operation(OperationKind::Query)
        },
        Def::Operation(OpDef::Mutation(mutation)) => {
            mutation.name = Some(qualified_name);
            DocumentKind::Operation(OperationKind::Mutation)
        },
        Def::Operation(OpDef::Subscription(sub)) => {
            sub.name = Some(qualified_name);
            DocumentKind::Operation(OperationKind::Subscription)
        },
        // Rewritten into a named query above.
        Def::Operation(OpDef::SelectionSet(_)) =>
            DocumentKind::Operation(OperationKind::Query),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error(
        "found several definitions that could be `{qualified_name}`: \
        {definition_names:?}"
    )]
    AmbiguousDefinitions {
        definition_names: Vec<String>,
        qualified_name: String,
    },

    #[error("expected the document to define {expected} named `{qualified_name}`")]
    NoMatchingDefinition {
        expected: &'static str,
        qualified_name: String,
    },
}
