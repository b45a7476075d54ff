//! Entry point for the `hourhand` CLI.

use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use hourhand::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Results go to stdout, so keep log output on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hourhand=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run(Cli::parse())
}
