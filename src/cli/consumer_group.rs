use anyhow::bail;

use crate::cli::{Cli, eventhub::NamespaceRef};

#[derive(Debug, clap::Args)]
pub(crate) struct ConsumerGroupArgs {
    #[command(subcommand)]
    pub command: ConsumerGroupCommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum ConsumerGroupCommand {
    /// List the consumer groups of an event hub
    #[clap(alias = "list")]
    Ls(ConsumerGroupLsArgs),
    /// Get information about a consumer group
    Get(ConsumerGroupGetArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct ConsumerGroupLsArgs {
    #[command(flatten)]
    pub namespace: NamespaceRef,
    /// Event hub name
    #[arg(short, long)]
    pub event_hub: String,
    /// Limit the number of consumer groups to show
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ConsumerGroupGetArgs {
    #[command(flatten)]
    pub namespace: NamespaceRef,
    /// Event hub name
    #[arg(short, long)]
    pub event_hub: String,
    /// Consumer group name
    pub consumer_group_name: String,
}

pub(crate) fn handle(cli: &Cli, args: ConsumerGroupArgs) -> anyhow::Result<()> {
    match args.command {
        ConsumerGroupCommand::Ls(args) => list_consumer_groups(cli, args),
        ConsumerGroupCommand::Get(args) => get_consumer_group(cli, args),
    }
}

fn list_consumer_groups(cli: &Cli, args: ConsumerGroupLsArgs) -> anyhow::Result<()> {
    let ConsumerGroupLsArgs {
        namespace,
        event_hub,
        limit,
    } = args;

    let ops = cli.client.consumer_groups()?;
    let name = if ops.binding().table().get("list_by_event_hub").is_some() {
        "list_by_event_hub"
    } else {
        "list_all"
    };

    let [rg, ns] = namespace.params();
    let params = [rg, ns, ("eventHubName", event_hub.as_str())];

    let items = ops.list_values(name, &params, limit)?;
    cli.print_list(
        items,
        &[
            ("NAME", "/name"),
            ("CREATED", "/properties/createdAt"),
            ("METADATA", "/properties/userMetadata"),
        ],
    )
}

fn get_consumer_group(cli: &Cli, args: ConsumerGroupGetArgs) -> anyhow::Result<()> {
    let ConsumerGroupGetArgs {
        namespace,
        event_hub,
        consumer_group_name,
    } = args;

    let ops = cli.client.consumer_groups()?;
    let [rg, ns] = namespace.params();
    let params = [
        rg,
        ns,
        ("eventHubName", event_hub.as_str()),
        ("consumerGroupName", consumer_group_name.as_str()),
    ];

    let Some(group) = ops.call_value("get", &params, None)? else {
        bail!("Empty response for consumer group {consumer_group_name:?}");
    };

    cli.print_resource(
        &group,
        &[
            ("Name", "/name"),
            ("Id", "/id"),
            ("Created", "/properties/createdAt"),
            ("Updated", "/properties/updatedAt"),
            ("User Metadata", "/properties/userMetadata"),
        ],
    )
}
