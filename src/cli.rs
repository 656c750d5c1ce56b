mod cluster;
mod color;
mod config;
mod consumer_group;
mod eventhub;
mod namespace;
mod operation;
mod region;
mod versions;
mod yaml;

use std::{
    io::{Write as _, stdout},
    time,
};

use anyhow::bail;
use clap::{Parser, Subcommand};
use eventhub_mgmt::{
    ApiErrorKind, ConfigError, ManagementClient, OperationRegistry, Settings, VersionResolver,
    VersionSettings,
};
use serde_json::Value;
use tabwriter::TabWriter;
use tracing::debug;

use color::*;

#[derive(Debug, Parser)]
#[command(
    name = "ehmgmt",
    about = "Manage Event Hubs namespaces, event hubs and clusters across API versions",
    version = env!("EHM_VERSION"),
    propagate_version = true
)]
pub(crate) struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// How to format output.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Output {
    Json,
    #[default]
    Tty,
}

#[derive(Debug, clap::Args)]
#[command(next_help_heading = "Global Options")]
pub(crate) struct GlobalArgs {
    /// Name of the config context to use
    #[arg(long, short = 'C', global = true)]
    pub context: Option<String>,
    /// Output format
    #[arg(long, short = 'O', global = true)]
    pub output: Option<Output>,
    /// Use this API version for every operation group
    #[arg(long, global = true)]
    pub api_version: Option<String>,
    /// API profile to resolve versions with: default, latest, or a path to a profile file
    #[arg(long, global = true)]
    pub api_profile: Option<String>,
    /// Timeout (in seconds) for client operations (-1 = no timeout)
    #[arg(long, global = true)]
    pub client_timeout: Option<i64>,
    /// Print verbose logs
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print version.
    Version,
    /// Print information about the current context and resolved API versions
    Info,
    /// Show the API versions available for each operation group
    Versions(versions::VersionsArgs),
    /// List the models defined by an API version
    Models(versions::ModelsArgs),
    /// Manage namespaces
    Namespace(namespace::NamespaceArgs),
    /// Manage event hubs
    #[clap(alias = "eh")]
    Eventhub(eventhub::EventhubArgs),
    /// Manage consumer groups
    #[clap(alias = "cg")]
    ConsumerGroup(consumer_group::ConsumerGroupArgs),
    /// Manage dedicated clusters
    Cluster(cluster::ClusterArgs),
    /// List regions
    Region(region::RegionArgs),
    /// List the operations supported by the provider
    Operation(operation::OperationArgs),
    /// Configure ehmgmt settings
    Config(config::ConfigArgs),
}

pub(crate) struct Cli {
    pub(crate) settings: Settings,
    pub(crate) global: GlobalArgs,
    pub(crate) client: ManagementClient,
}

pub(crate) fn run(args: Args) -> anyhow::Result<()> {
    // Some commands don't require any config.
    match args.command {
        Command::Version => {
            println!("ehmgmt {}", env!("EHM_VERSION"));
            return Ok(());
        }
        Command::Config(config_args) => return config::handle(config_args, args.global),
        Command::Versions(versions_args) => return versions::versions(versions_args, &args.global),
        Command::Models(models_args) => return versions::models(models_args, &args.global),
        _ => (),
    }

    let mut settings = load_settings(&args.global)?.with_ua_product("ehmgmt");
    if let Some(version) = &args.global.api_version {
        settings.api_version = Some(version.clone());
    }

    if let Some(profile) = &args.global.api_profile {
        settings.api_profile = Some(profile.clone());
    }

    let timeout = match args.global.client_timeout {
        Some(-1) | None => None,
        Some(v) if v > 0 => Some(time::Duration::from_secs(v as _)),
        Some(v) => bail!("Invalid timeout value: {v}"),
    };

    let mut builder = settings.client_builder()?;
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    let client = builder.build()?;
    debug!(context = %settings.name, command = ?args.command, "cli invocation");

    let cli = Cli {
        settings,
        global: args.global,
        client,
    };

    match args.command {
        Command::Version | Command::Config(_) | Command::Versions(_) | Command::Models(_) => {
            unreachable!()
        }
        Command::Info => handle_info(&cli),
        Command::Namespace(args) => namespace::handle(&cli, args),
        Command::Eventhub(args) => eventhub::handle(&cli, args),
        Command::ConsumerGroup(args) => consumer_group::handle(&cli, args),
        Command::Cluster(args) => cluster::handle(&cli, args),
        Command::Region(args) => region::handle(&cli, args),
        Command::Operation(args) => operation::handle(&cli, args),
    }
}

pub(crate) fn load_settings(global: &GlobalArgs) -> anyhow::Result<Settings> {
    let settings = match global.context.as_deref() {
        Some(name) => Settings::from_env(name)?,
        None => Settings::from_default_env()?,
    };

    Ok(settings)
}

/// Resolve versions the way a client for the selected context would,
/// without needing its credentials. The command-line flags win over the
/// context and environment.
pub(crate) fn offline_resolver(global: &GlobalArgs) -> anyhow::Result<VersionResolver> {
    let name = global
        .context
        .clone()
        .unwrap_or_else(Settings::default_context_name);

    let mut versions = match VersionSettings::from_env(&name) {
        Err(ConfigError::ContextNotFound(_)) if global.context.is_none() => {
            VersionSettings::from_env_vars()
        }
        res => res?,
    };

    if let Some(version) = &global.api_version {
        versions.api_version = Some(version.clone());
    }

    if let Some(profile) = &global.api_profile {
        versions.api_profile = Some(profile.clone());
    }

    Ok(versions.resolver(&OperationRegistry::builtin())?)
}

pub(crate) fn api_err_kind(err: &eventhub_mgmt::Error) -> Option<&ApiErrorKind> {
    err.api_kind()
}

/// Whether an error means the resource doesn't exist.
pub(crate) fn is_not_found(err: &eventhub_mgmt::Error) -> bool {
    matches!(
        api_err_kind(err),
        Some(
            ApiErrorKind::NotFound
                | ApiErrorKind::ResourceNotFound
                | ApiErrorKind::ParentResourceNotFound
                | ApiErrorKind::ResourceGroupNotFound
        )
    )
}

/// Render a field of a JSON resource for a table cell.
pub(crate) fn field(value: &Value, pointer: &str) -> String {
    match value.pointer(pointer) {
        None | Some(Value::Null) => "-".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl Cli {
    pub(crate) fn output(&self) -> Output {
        self.global.output.unwrap_or_default()
    }

    /// Print a listing as a table of `columns`, each a header and a JSON
    /// pointer into the item.
    pub(crate) fn print_list(
        &self,
        items: impl Iterator<Item = Result<Value, eventhub_mgmt::Error>>,
        columns: &[(&str, &str)],
    ) -> anyhow::Result<()> {
        match self.output() {
            Output::Json => {
                let all = items.collect::<Result<Vec<_>, _>>()?;
                serde_json::to_writer(stdout(), &all)?;
                println!();
            }
            Output::Tty => {
                let mut tw = TabWriter::new(stdout());
                let headers: Vec<_> = columns.iter().map(|(h, _)| *h).collect();
                writeln!(&mut tw, "{}", headers.join("\t"))?;

                for item in items {
                    let item = item?;
                    let cells: Vec<_> = columns.iter().map(|(_, p)| field(&item, p)).collect();
                    writeln!(&mut tw, "{}", cells.join("\t"))?;
                }

                tw.flush()?;
            }
        }

        Ok(())
    }

    /// Print a single resource as labeled `fields`.
    pub(crate) fn print_resource(
        &self,
        value: &Value,
        fields: &[(&str, &str)],
    ) -> anyhow::Result<()> {
        let mut out = anstream::stdout().lock();

        match self.output() {
            Output::Json => {
                serde_json::to_writer(&mut out, value)?;
                writeln!(&mut out)?;
            }
            Output::Tty => {
                let mut tw = TabWriter::new(&mut out).ansi(true);
                for (label, pointer) in fields {
                    writeln!(&mut tw, "{GREEN}{label}{GREEN:#}\t{}", field(value, pointer))?;
                }

                tw.flush()?;
            }
        }

        Ok(())
    }
}

fn handle_info(cli: &Cli) -> anyhow::Result<()> {
    let mut out = anstream::stdout().lock();
    let settings = &cli.settings;

    match cli.output() {
        Output::Json => {
            let resolved: serde_json::Map<String, Value> = cli
                .client
                .dispatcher()
                .catalog()
                .groups()
                .map(|group| {
                    let v = cli.client.get_api_version(group).ok().map(str::to_owned);
                    (group.to_owned(), v.map_or(Value::Null, Value::String))
                })
                .collect();

            let info = serde_json::json!({
                "context": settings,
                "client_version": env!("EHM_VERSION"),
                "api_versions": resolved,
            });

            serde_json::to_writer(&mut out, &info)?;
            writeln!(&mut out)?;
        }
        Output::Tty => {
            let mut tw = TabWriter::new(&mut out).ansi(true);
            writeln!(&mut tw, "{GREEN}Context{GREEN:#}\t{}", settings.name)?;
            writeln!(
                &mut tw,
                "{GREEN}Subscription{GREEN:#}\t{}",
                settings.subscription_id
            )?;
            writeln!(&mut tw, "{GREEN}Endpoint{GREEN:#}\t{}", settings.base_url)?;
            writeln!(
                &mut tw,
                "{GREEN}Config File{GREEN:#}\t{}",
                settings.config_path.display()
            )?;
            writeln!(
                &mut tw,
                "{GREEN}Client Version{GREEN:#}\t{}",
                env!("EHM_VERSION")
            )?;

            writeln!(&mut tw, "\n{HEADER}API Versions{HEADER:#}")?;
            for group in cli.client.dispatcher().catalog().groups() {
                let resolved = cli.client.get_api_version(group);
                writeln!(
                    &mut tw,
                    "{BLUE}{group}{BLUE:#}\t{}",
                    ResolvedVersion(&resolved)
                )?;
            }

            tw.flush()?;
        }
    }

    Ok(())
}
