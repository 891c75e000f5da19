mod list;
mod preload;
mod resolve;

use crate::Cli;
use crate::CommandResult;
use list::ListCmd;
use preload::PreloadCmd;
use resolve::ResolveCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-autoload")]
pub(crate) enum CommandEnum {
    List(Box<ListCmd>),
    Preload(Box<PreloadCmd>),
    Resolve(Box<ResolveCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::List(cmd) => cmd.run(cli).await,
            Self::Preload(cmd) => cmd.run(cli).await,
            Self::Resolve(cmd) => cmd.run(cli).await,
        }
    }
}
