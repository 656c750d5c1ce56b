use crate::cli::Cli;

#[derive(Debug, clap::Args)]
pub(crate) struct RegionArgs {
    #[command(subcommand)]
    pub command: RegionCommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum RegionCommand {
    /// List the regions a pricing tier is available in
    #[clap(alias = "list")]
    Ls(RegionLsArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct RegionLsArgs {
    /// Pricing tier
    #[arg(long, default_value = "Standard")]
    pub sku: String,
    /// Limit the number of regions to show
    #[arg(long)]
    pub limit: Option<usize>,
}

pub(crate) fn handle(cli: &Cli, args: RegionArgs) -> anyhow::Result<()> {
    match args.command {
        RegionCommand::Ls(RegionLsArgs { sku, limit }) => {
            let ops = cli.client.regions()?;
            let items = ops.list_values("list_by_sku", &[("sku", sku.as_str())], limit)?;
            cli.print_list(
                items,
                &[("NAME", "/name"), ("CODE", "/properties/code")],
            )
        }
    }
}
