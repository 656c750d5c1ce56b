use std::io::Write;

use eventhub_mgmt::Settings;
use tabwriter::TabWriter;
use tracing::debug;

use crate::cli::{GlobalArgs, Output, color::*, load_settings, yaml};

#[derive(Debug, clap::Args)]
pub(crate) struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum ConfigCommand {
    /// Set a configuration value
    Set(ConfigSetArgs),
    /// Get the current configuration
    Get(ConfigGetArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[clap(rename_all = "snake_case")]
pub(crate) enum ConfigSetting {
    SubscriptionId,
    AccessToken,
    BaseUrl,
    ApiVersion,
    ApiProfile,
    Catalog,
}

impl std::fmt::Display for ConfigSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ConfigSetting::SubscriptionId => "subscription_id",
            ConfigSetting::AccessToken => "access_token",
            ConfigSetting::BaseUrl => "base_url",
            ConfigSetting::ApiVersion => "api_version",
            ConfigSetting::ApiProfile => "api_profile",
            ConfigSetting::Catalog => "catalog",
        })
    }
}

#[derive(Debug, clap::Args)]
#[command(after_long_help = CliExamples("
  # Set the subscription for the default context
  ehmgmt config set subscription_id 00000000-0000-0000-0000-000000000000

  # Pin a context to the preview API
  ehmgmt -C preview config set api_version 2018-01-01-preview
"))]
pub(crate) struct ConfigSetArgs {
    /// Setting name
    pub name: ConfigSetting,
    /// Value to set
    pub value: String,
}

#[derive(Debug, clap::Args)]
#[command(after_long_help = CliExamples("
  # Show the current context
  ehmgmt config get

  # Show all contexts
  ehmgmt config get --all
"))]
pub(crate) struct ConfigGetArgs {
    /// Show all the available contexts
    #[arg(short, long)]
    pub all: bool,
}

pub(crate) fn handle(args: ConfigArgs, global: GlobalArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Set(args) => config_set(args, global),
        ConfigCommand::Get(args) => config_get(args, global),
    }
}

fn config_set(args: ConfigSetArgs, global: GlobalArgs) -> anyhow::Result<()> {
    let key = args.name.to_string();
    let context = global
        .context
        .unwrap_or_else(Settings::default_context_name);
    let path = Settings::config_path()?;

    if path.exists() {
        yaml::edit_yaml(&path, |doc| {
            let mut m = yaml::mapping_at_path(doc, &["contexts", &context])?;
            yaml::upsert_str(&mut m, &key, &args.value);
            Ok(())
        })?;
    } else {
        debug!(path = %path.display(), "creating config file");
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let doc = serde_json::json!({
            "contexts": { (context.as_str()): { (key.as_str()): args.value } }
        });
        std::fs::write(&path, serde_yaml::to_string(&doc)?)?;
    }

    eprintln!("Set {key} for context {context:?}");
    Ok(())
}

fn config_get(args: ConfigGetArgs, global: GlobalArgs) -> anyhow::Result<()> {
    let mut out = anstream::stdout().lock();

    match (global.output.unwrap_or_default(), args.all) {
        (Output::Tty, false) => {
            let settings = load_settings(&global)?;
            let mut tw = TabWriter::new(&mut out).ansi(true);
            print_context(&mut tw, &settings)?;
            tw.flush()?;
        }
        (Output::Tty, true) => {
            let mut tw = TabWriter::new(&mut out).ansi(true);
            for (i, settings) in Settings::load_all()?.enumerate() {
                if i > 0 {
                    writeln!(&mut tw)?;
                }
                print_context(&mut tw, &settings)?;
            }
            tw.flush()?;
        }
        (Output::Json, false) => {
            let settings = load_settings(&global)?;
            serde_json::to_writer(&mut out, &settings)?;
            writeln!(&mut out)?;
        }
        (Output::Json, true) => {
            let all: Vec<_> = Settings::load_all()?.collect();
            serde_json::to_writer(&mut out, &all)?;
            writeln!(&mut out)?;
        }
    }

    Ok(())
}

fn print_context(out: &mut impl Write, settings: &Settings) -> anyhow::Result<()> {
    let unset = || "-".to_owned();

    writeln!(out, "{HEADER}Context {:?}{HEADER:#}", settings.name)?;
    writeln!(
        out,
        "{GREEN}Subscription{GREEN:#}\t{}",
        settings.subscription_id
    )?;
    writeln!(out, "{GREEN}Access Token{GREEN:#}\t*********")?;
    writeln!(out, "{GREEN}Endpoint{GREEN:#}\t{}", settings.base_url)?;
    writeln!(
        out,
        "{GREEN}API Version{GREEN:#}\t{}",
        settings.api_version.clone().unwrap_or_else(unset)
    )?;
    writeln!(
        out,
        "{GREEN}API Profile{GREEN:#}\t{}",
        settings.api_profile.as_deref().unwrap_or("default")
    )?;
    writeln!(
        out,
        "{GREEN}Catalog{GREEN:#}\t{}",
        settings
            .catalog
            .as_ref()
            .map_or_else(unset, |p| p.display().to_string())
    )?;

    Ok(())
}
