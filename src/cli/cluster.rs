use anyhow::bail;

use crate::cli::{Cli, color::*};

#[derive(Debug, clap::Args)]
pub(crate) struct ClusterArgs {
    #[command(subcommand)]
    pub command: ClusterCommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum ClusterCommand {
    /// List the dedicated clusters in a resource group
    #[clap(alias = "list")]
    Ls(ClusterLsArgs),
    /// Get information about a dedicated cluster
    Get(ClusterGetArgs),
}

#[derive(Debug, clap::Args)]
#[command(after_long_help = CliExamples("
  # Clusters only exist in the preview API
  ehmgmt --api-version 2018-01-01-preview cluster ls -g my-rg
"))]
pub(crate) struct ClusterLsArgs {
    /// Resource group
    #[arg(short = 'g', long)]
    pub resource_group: String,
    /// Limit the number of clusters to show
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ClusterGetArgs {
    /// Resource group
    #[arg(short = 'g', long)]
    pub resource_group: String,
    /// Cluster name
    pub cluster_name: String,
}

pub(crate) fn handle(cli: &Cli, args: ClusterArgs) -> anyhow::Result<()> {
    match args.command {
        ClusterCommand::Ls(args) => list_clusters(cli, args),
        ClusterCommand::Get(args) => get_cluster(cli, args),
    }
}

fn list_clusters(cli: &Cli, args: ClusterLsArgs) -> anyhow::Result<()> {
    let ClusterLsArgs {
        resource_group,
        limit,
    } = args;

    let ops = cli.client.clusters()?;
    let items = ops.list_values(
        "list_by_resource_group",
        &[("resourceGroupName", resource_group.as_str())],
        limit,
    )?;

    cli.print_list(
        items,
        &[
            ("NAME", "/name"),
            ("LOCATION", "/location"),
            ("CAPACITY", "/sku/capacity"),
            ("STATUS", "/properties/status"),
        ],
    )
}

fn get_cluster(cli: &Cli, args: ClusterGetArgs) -> anyhow::Result<()> {
    let ClusterGetArgs {
        resource_group,
        cluster_name,
    } = args;

    let ops = cli.client.clusters()?;
    let params = [
        ("resourceGroupName", resource_group.as_str()),
        ("clusterName", cluster_name.as_str()),
    ];

    let Some(cluster) = ops.call_value("get", &params, None)? else {
        bail!("Empty response for cluster {cluster_name:?}");
    };

    cli.print_resource(
        &cluster,
        &[
            ("Name", "/name"),
            ("Id", "/id"),
            ("Location", "/location"),
            ("Capacity", "/sku/capacity"),
            ("Status", "/properties/status"),
            ("Metric Id", "/properties/metricId"),
            ("Created", "/properties/created"),
        ],
    )
}
