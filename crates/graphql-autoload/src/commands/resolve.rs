use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::NamespaceArgs;
use crate::RunnableCommand;
use libgraphql_autoload::names;
use libgraphql_autoload::ResolveError;

/// Print the canonical GraphQL for one or more documents.
#[derive(Debug, clap::Args)]
pub(crate) struct ResolveCmd {
    #[command(flatten)]
    namespace_args: NamespaceArgs,

    #[arg(
        help="Names of the documents to resolve, either constant-style \
             (`Artist`) or method-style (`artist`). Fragments can only be \
             resolved constant-style.",
        name="NAMES",
        required=true,
    )]
    names: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for ResolveCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let namespace = match self.namespace_args.build_namespace() {
            Ok(namespace) => namespace,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let mut printed = vec![];
        let mut errors: Vec<ResolveError> = vec![];
        for name in &self.names {
            log::debug!("Resolving `{name}`...");
            let result =
                if names::is_method_name(name) {
                    namespace.call_method(name)
                } else {
                    namespace.resolve_by_name(name)
                };

            match result {
                Ok(document) => printed.push(document.to_query_string()),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Failed to resolve {} of {} documents:\n{}",
                output_utils::RED_X,
                errors.len(),
                self.names.len(),
                errors.iter()
                    .map(|e| format!("  * {e}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        CommandResult::stdout(format_args!("{}", printed.join("\n\n")))
    }
}
