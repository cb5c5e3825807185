use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use crate::command::CommandArgs;

mod command;
mod model;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    command::run(args)
}

/// Logs go to stderr so that reports and JSON on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
