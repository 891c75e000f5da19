use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::NamespaceArgs;
use crate::RunnableCommand;

/// Load and parse every document in a namespace up front.
#[derive(Debug, clap::Args)]
pub(crate) struct PreloadCmd {
    #[command(flatten)]
    namespace_args: NamespaceArgs,
}

#[inherent::inherent]
impl RunnableCommand for PreloadCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let namespace = match self.namespace_args.build_namespace() {
            Ok(namespace) => namespace,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let paths = namespace.graphql_file_paths();
        let num_paths = paths.len();
        let num_unnamed =
            paths.iter()
                .filter(|path| {
                    namespace.path_matcher()
                        .constant_name_for_path(path)
                        .is_none()
                })
                .count();
        log::debug!(
            "Preloading {num_paths} GraphQL files for `{}`...",
            namespace.name(),
        );

        match namespace.preload_all() {
            Ok(num_loaded) => CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL documents preloaded successfully:\n",
                    "  * Found {} GraphQL files.\n",
                    "  * Loaded {} documents.\n",
                    "  * Skipped {} files no name maps onto.",
                ),
                output_utils::GREEN_CHECK,
                num_paths,
                num_loaded,
                num_unnamed,
            )),

            Err(errors) => CommandResult::stderr(format_args!(
                "{} {} GraphQL documents failed to preload ({} loaded):\n{}",
                output_utils::RED_X,
                errors.len(),
                namespace.loaded_names().len(),
                errors.iter()
                    .map(|e| format!("  * {e}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),
        }
    }
}
