use anyhow::bail;

use crate::cli::{Cli, color::*, is_not_found};

#[derive(Debug, clap::Args)]
pub(crate) struct EventhubArgs {
    #[command(subcommand)]
    pub command: EventhubCommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum EventhubCommand {
    /// List the event hubs in a namespace
    #[clap(alias = "list")]
    Ls(EventhubLsArgs),
    /// Get information about an event hub
    Get(EventhubGetArgs),
    /// Delete an event hub
    #[clap(alias = "delete")]
    Rm(EventhubRmArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct NamespaceRef {
    /// Resource group
    #[arg(short = 'g', long)]
    pub resource_group: String,
    /// Namespace name
    #[arg(short, long)]
    pub namespace: String,
}

impl NamespaceRef {
    pub(crate) fn params(&self) -> [(&str, &str); 2] {
        [
            ("resourceGroupName", self.resource_group.as_str()),
            ("namespaceName", self.namespace.as_str()),
        ]
    }
}

#[derive(Debug, clap::Args)]
#[command(after_long_help = CliExamples("
  # List event hubs in a namespace
  ehmgmt eventhub ls -g my-rg -n my-namespace

  # Same, against the 2015 API
  ehmgmt --api-version 2015-08-01 eh ls -g my-rg -n my-namespace
"))]
pub(crate) struct EventhubLsArgs {
    #[command(flatten)]
    pub namespace: NamespaceRef,
    /// Limit the number of event hubs to show
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, clap::Args)]
pub(crate) struct EventhubGetArgs {
    #[command(flatten)]
    pub namespace: NamespaceRef,
    /// Event hub name
    pub event_hub_name: String,
}

#[derive(Debug, clap::Args)]
pub(crate) struct EventhubRmArgs {
    #[command(flatten)]
    pub namespace: NamespaceRef,
    /// Do not fail if the event hub does not exist
    #[arg(long)]
    pub if_exists: bool,
    /// Event hub name
    pub event_hub_name: String,
}

pub(crate) fn handle(cli: &Cli, args: EventhubArgs) -> anyhow::Result<()> {
    match args.command {
        EventhubCommand::Ls(args) => list_event_hubs(cli, args),
        EventhubCommand::Get(args) => get_event_hub(cli, args),
        EventhubCommand::Rm(args) => delete_event_hub(cli, args),
    }
}

fn list_event_hubs(cli: &Cli, args: EventhubLsArgs) -> anyhow::Result<()> {
    let EventhubLsArgs { namespace, limit } = args;

    let ops = cli.client.event_hubs()?;

    // The listing was renamed after 2015-08-01.
    let name = if ops.binding().table().get("list_by_namespace").is_some() {
        "list_by_namespace"
    } else {
        "list_all"
    };

    let items = ops.list_values(name, &namespace.params(), limit)?;
    cli.print_list(
        items,
        &[
            ("NAME", "/name"),
            ("STATUS", "/properties/status"),
            ("PARTITIONS", "/properties/partitionCount"),
            ("RETENTION", "/properties/messageRetentionInDays"),
        ],
    )
}

fn get_event_hub(cli: &Cli, args: EventhubGetArgs) -> anyhow::Result<()> {
    let EventhubGetArgs {
        namespace,
        event_hub_name,
    } = args;

    let ops = cli.client.event_hubs()?;
    let [rg, ns] = namespace.params();
    let params = [rg, ns, ("eventHubName", event_hub_name.as_str())];

    let Some(hub) = ops.call_value("get", &params, None)? else {
        bail!("Empty response for event hub {event_hub_name:?}");
    };

    cli.print_resource(
        &hub,
        &[
            ("Name", "/name"),
            ("Id", "/id"),
            ("Status", "/properties/status"),
            ("Partitions", "/properties/partitionCount"),
            ("Partition Ids", "/properties/partitionIds"),
            ("Retention (days)", "/properties/messageRetentionInDays"),
            ("Capture", "/properties/captureDescription/enabled"),
            ("Updated", "/properties/updatedAt"),
        ],
    )
}

fn delete_event_hub(cli: &Cli, args: EventhubRmArgs) -> anyhow::Result<()> {
    let EventhubRmArgs {
        namespace,
        if_exists,
        event_hub_name,
    } = args;

    let ops = cli.client.event_hubs()?;
    let [rg, ns] = namespace.params();
    let params = [rg, ns, ("eventHubName", event_hub_name.as_str())];

    match ops.call::<()>("delete", &params) {
        Ok(()) => eprintln!("Deleted event hub \"{event_hub_name}\""),
        Err(e) if if_exists && is_not_found(&e) => {
            eprintln!("Event hub \"{event_hub_name}\" does not exist")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
