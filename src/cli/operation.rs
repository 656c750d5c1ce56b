use crate::cli::Cli;

#[derive(Debug, clap::Args)]
pub(crate) struct OperationArgs {
    #[command(subcommand)]
    pub command: OperationCommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum OperationCommand {
    /// List the REST operations of the resource provider
    #[clap(alias = "list")]
    Ls(OperationLsArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct OperationLsArgs {
    /// Limit the number of operations to show
    #[arg(long)]
    pub limit: Option<usize>,
}

pub(crate) fn handle(cli: &Cli, args: OperationArgs) -> anyhow::Result<()> {
    match args.command {
        OperationCommand::Ls(OperationLsArgs { limit }) => {
            let ops = cli.client.operations()?;
            let items = ops.list_values("list", &[], limit)?;
            cli.print_list(
                items,
                &[
                    ("NAME", "/name"),
                    ("RESOURCE", "/display/resource"),
                    ("OPERATION", "/display/operation"),
                ],
            )
        }
    }
}
