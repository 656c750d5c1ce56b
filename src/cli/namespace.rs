use anyhow::bail;
use serde_json::json;

use crate::cli::{Cli, Output, color::*, field, is_not_found};

const COLUMNS: &[(&str, &str)] = &[
    ("NAME", "/name"),
    ("LOCATION", "/location"),
    ("SKU", "/sku/name"),
    ("STATE", "/properties/provisioningState"),
];

#[derive(Debug, clap::Args)]
pub(crate) struct NamespaceArgs {
    #[command(subcommand)]
    pub command: NamespaceCommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum NamespaceCommand {
    /// List namespaces in the subscription or a resource group
    #[clap(alias = "list")]
    Ls(NamespaceLsArgs),
    /// Get information about a namespace
    Get(NamespaceGetArgs),
    /// Create or update a namespace
    Create(NamespaceCreateArgs),
    /// Delete a namespace
    #[clap(alias = "delete")]
    Rm(NamespaceRmArgs),
    /// Check whether a namespace name is available
    CheckName(NamespaceCheckNameArgs),
}

#[derive(Debug, clap::Args)]
#[command(after_long_help = CliExamples("
  # List every namespace in the subscription
  ehmgmt namespace ls

  # List namespaces in a resource group, using the preview API
  ehmgmt --api-version 2018-01-01-preview namespace ls -g my-rg
"))]
pub(crate) struct NamespaceLsArgs {
    /// Resource group to list namespaces from
    #[arg(short = 'g', long)]
    pub resource_group: Option<String>,
    /// Limit the number of namespaces to show
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, clap::Args)]
pub(crate) struct NamespaceGetArgs {
    /// Resource group
    #[arg(short = 'g', long)]
    pub resource_group: String,
    /// Namespace name
    pub namespace_name: String,
}

#[derive(Debug, clap::Args)]
pub(crate) struct NamespaceCreateArgs {
    /// Resource group
    #[arg(short = 'g', long)]
    pub resource_group: String,
    /// Region to create the namespace in
    #[arg(short, long)]
    pub location: String,
    /// Pricing tier
    #[arg(long, default_value = "Standard")]
    pub sku: String,
    /// Namespace name
    pub namespace_name: String,
}

#[derive(Debug, clap::Args)]
pub(crate) struct NamespaceRmArgs {
    /// Resource group
    #[arg(short = 'g', long)]
    pub resource_group: String,
    /// Do not fail if the namespace does not exist
    #[arg(long)]
    pub if_exists: bool,
    /// Namespace name
    pub namespace_name: String,
}

#[derive(Debug, clap::Args)]
pub(crate) struct NamespaceCheckNameArgs {
    /// Namespace name
    pub namespace_name: String,
}

pub(crate) fn handle(cli: &Cli, args: NamespaceArgs) -> anyhow::Result<()> {
    match args.command {
        NamespaceCommand::Ls(args) => list_namespaces(cli, args),
        NamespaceCommand::Get(args) => get_namespace(cli, args),
        NamespaceCommand::Create(args) => create_namespace(cli, args),
        NamespaceCommand::Rm(args) => delete_namespace(cli, args),
        NamespaceCommand::CheckName(args) => check_name(cli, args),
    }
}

fn list_namespaces(cli: &Cli, args: NamespaceLsArgs) -> anyhow::Result<()> {
    let NamespaceLsArgs {
        resource_group,
        limit,
    } = args;

    let ops = cli.client.namespaces()?;
    let items = match resource_group.as_deref() {
        Some(rg) => ops.list_values(
            "list_by_resource_group",
            &[("resourceGroupName", rg)],
            limit,
        )?,
        None => ops.list_values("list", &[], limit)?,
    };

    cli.print_list(items, COLUMNS)
}

fn get_namespace(cli: &Cli, args: NamespaceGetArgs) -> anyhow::Result<()> {
    let NamespaceGetArgs {
        resource_group,
        namespace_name,
    } = args;

    let ops = cli.client.namespaces()?;
    let Some(ns) = ops.call_value(
        "get",
        &[
            ("resourceGroupName", resource_group.as_str()),
            ("namespaceName", namespace_name.as_str()),
        ],
        None,
    )?
    else {
        bail!("Empty response for namespace {namespace_name:?}");
    };

    cli.print_resource(
        &ns,
        &[
            ("Name", "/name"),
            ("Id", "/id"),
            ("Location", "/location"),
            ("Sku", "/sku/name"),
            ("Provisioning State", "/properties/provisioningState"),
            ("Service Bus Endpoint", "/properties/serviceBusEndpoint"),
            ("Created", "/properties/createdAt"),
        ],
    )
}

fn create_namespace(cli: &Cli, args: NamespaceCreateArgs) -> anyhow::Result<()> {
    let NamespaceCreateArgs {
        resource_group,
        location,
        sku,
        namespace_name,
    } = args;

    let ops = cli.client.namespaces()?;
    let body = json!({
        "location": location,
        "sku": { "name": sku, "tier": sku },
    });

    let ns = ops.call_value(
        "create_or_update",
        &[
            ("resourceGroupName", resource_group.as_str()),
            ("namespaceName", namespace_name.as_str()),
        ],
        Some(&body),
    )?;

    match (cli.output(), ns) {
        (Output::Json, Some(ns)) => {
            serde_json::to_writer(std::io::stdout(), &ns)?;
            println!();
        }
        (_, ns) => {
            let state = ns.map_or_else(
                || "-".to_owned(),
                |ns| field(&ns, "/properties/provisioningState"),
            );
            eprintln!("Created namespace \"{namespace_name}\" ({state})");
        }
    }

    Ok(())
}

fn delete_namespace(cli: &Cli, args: NamespaceRmArgs) -> anyhow::Result<()> {
    let NamespaceRmArgs {
        resource_group,
        if_exists,
        namespace_name,
    } = args;

    let ops = cli.client.namespaces()?;
    let res = ops.call::<()>(
        "delete",
        &[
            ("resourceGroupName", resource_group.as_str()),
            ("namespaceName", namespace_name.as_str()),
        ],
    );

    match res {
        Ok(()) => eprintln!("Deleted namespace \"{namespace_name}\""),
        Err(e) if if_exists && is_not_found(&e) => {
            eprintln!("Namespace \"{namespace_name}\" does not exist")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn check_name(cli: &Cli, args: NamespaceCheckNameArgs) -> anyhow::Result<()> {
    let ops = cli.client.namespaces()?;
    let body = json!({ "name": args.namespace_name });

    let Some(result) = ops.call_value("check_name_availability", &[], Some(&body))? else {
        bail!("Empty response from name availability check");
    };

    cli.print_resource(
        &result,
        &[
            ("Available", "/nameAvailable"),
            ("Reason", "/reason"),
            ("Message", "/message"),
        ],
    )
}
