use std::io::{Write as _, stdout};

use eventhub_mgmt::{DEFAULT_API_VERSION, DispatchError, OperationRegistry};
use serde_json::json;
use tabwriter::TabWriter;

use crate::cli::{GlobalArgs, Output, color::*, offline_resolver};

#[derive(Debug, clap::Args)]
#[command(after_long_help = CliExamples("
  # Show the version each operation group resolves to
  ehmgmt versions

  # Show the versions clusters exist at, pinned to the preview
  ehmgmt --api-version 2018-01-01-preview versions clusters
"))]
pub(crate) struct VersionsArgs {
    /// Operation group to show
    pub group: Option<String>,
}

#[derive(Debug, clap::Args)]
#[command(after_long_help = CliExamples("
  # List the models of the preview API
  ehmgmt models 2018-01-01-preview
"))]
pub(crate) struct ModelsArgs {
    /// API version [default: the pinned API version, or the default version]
    pub api_version: Option<String>,
}

pub(crate) fn versions(args: VersionsArgs, global: &GlobalArgs) -> anyhow::Result<()> {
    let resolver = offline_resolver(global)?;
    let catalog = resolver.catalog();

    if let Some(version) = resolver.api_version() {
        if !catalog.has_version(version) {
            return Err(DispatchError::UnsupportedVersion {
                version: version.to_owned(),
                group: None,
            }
            .into());
        }
    }

    let groups: Vec<&str> = match args.group.as_deref() {
        Some(group) if catalog.versions(group).is_none() => {
            return Err(DispatchError::UnknownOperationGroup(group.to_owned()).into());
        }
        Some(group) => vec![group],
        None => catalog.groups().collect(),
    };

    match global.output.unwrap_or_default() {
        Output::Json => {
            let rows: Vec<_> = groups
                .iter()
                .map(|&group| {
                    json!({
                        "group": group,
                        "api_version": resolver.get_api_version(group).ok(),
                        "available": catalog.versions(group),
                    })
                })
                .collect();

            serde_json::to_writer(stdout(), &rows)?;
            println!();
        }
        Output::Tty => {
            let mut out = anstream::stdout().lock();
            let mut tw = TabWriter::new(&mut out).ansi(true);
            writeln!(&mut tw, "GROUP\tAPI VERSION\tAVAILABLE")?;

            for group in groups {
                let available = catalog
                    .versions(group)
                    .into_iter()
                    .flatten()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");

                let resolved = resolver.get_api_version(group);
                writeln!(
                    &mut tw,
                    "{group}\t{}\t{available}",
                    ResolvedVersion(&resolved)
                )?;
            }

            tw.flush()?;
        }
    }

    Ok(())
}

pub(crate) fn models(args: ModelsArgs, global: &GlobalArgs) -> anyhow::Result<()> {
    let version = match args.api_version {
        Some(version) => version,
        None => offline_resolver(global)?
            .api_version()
            .unwrap_or(DEFAULT_API_VERSION)
            .to_owned(),
    };

    let registry = OperationRegistry::builtin();
    let Some(models) = registry.models(&version) else {
        return Err(DispatchError::UnsupportedVersion {
            version,
            group: None,
        }
        .into());
    };

    match global.output.unwrap_or_default() {
        Output::Json => {
            let names: Vec<_> = models.names().collect();
            serde_json::to_writer(stdout(), &names)?;
            println!();
        }
        Output::Tty => {
            let mut out = anstream::stdout().lock();
            writeln!(
                &mut out,
                "{HEADER}{} models in {}{HEADER:#}",
                models.len(),
                models.api_version()
            )?;

            for name in models.names() {
                writeln!(&mut out, "{name}")?;
            }
        }
    }

    Ok(())
}
