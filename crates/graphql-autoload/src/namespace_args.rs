use libgraphql_autoload::Namespace;
use std::path::PathBuf;

/// Arguments shared by every command that works on a namespace of GraphQL
/// files.
#[derive(Debug, clap::Args)]
pub(crate) struct NamespaceArgs {
    #[arg(
        default_value="graphql",
        help="Set of file extensions GraphQL document files may use.",
        long,
        value_delimiter=',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Name of the namespace the documents belong to. Documents are \
             looked up in the snake_cased namespace directory under --root.",
        long,
        short='n',
    )]
    namespace: String,

    #[arg(
        default_value=".",
        help="Directory containing the namespace directory.",
        long,
        short='r',
    )]
    root: PathBuf,
}

impl NamespaceArgs {
    /// Builds the namespace, discovering every GraphQL file under its
    /// directory.
    pub(crate) fn build_namespace(&self) -> anyhow::Result<Namespace> {
        log::debug!(
            "Building namespace `{}` from {:#?}...",
            self.namespace,
            self.root,
        );

        Namespace::builder(self.namespace.as_str())
            .root_dir(self.root.as_path())
            .graphql_file_exts(&self.graphql_file_exts)
            .discover_graphql_files()
            .build()
            .map_err(|errors| {
                anyhow::anyhow!(
                    "Failed to set up namespace `{}`:\n{}",
                    self.namespace,
                    errors.iter()
                        .map(|err| format!("  * {err}"))
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            })
    }
}
