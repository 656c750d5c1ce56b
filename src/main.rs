mod cli;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let level = if args.global.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("EHMGMT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("eventhub_mgmt={level},ehmgmt={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    cli::run(args)
}
