use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::NamespaceArgs;
use crate::RunnableCommand;
use libgraphql_autoload::names;

/// List the GraphQL files of a namespace and the names they define.
#[derive(Debug, clap::Args)]
pub(crate) struct ListCmd {
    #[command(flatten)]
    namespace_args: NamespaceArgs,
}

#[inherent::inherent]
impl RunnableCommand for ListCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let namespace = match self.namespace_args.build_namespace() {
            Ok(namespace) => namespace,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let matcher = namespace.path_matcher();
        let lines: Vec<String> =
            namespace.graphql_file_paths()
                .iter()
                .map(|path| match matcher.constant_name_for_path(path) {
                    Some(name) => {
                        let method_name = names::to_snake_case(name.as_str());
                        if namespace.responds_to(method_name.as_str()) {
                            format!(
                                "{path}\n    {}::{name} (callable as `{method_name}`)",
                                namespace.name(),
                            )
                        } else {
                            format!("{path}\n    {}::{name}", namespace.name())
                        }
                    },
                    None => format!("{path}\n    (no name maps onto this file)"),
                })
                .collect();

        if lines.is_empty() {
            return CommandResult::stdout(format_args!(
                "No GraphQL files found for `{}`.",
                namespace.name(),
            ));
        }
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}
