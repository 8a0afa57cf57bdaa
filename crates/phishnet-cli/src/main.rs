//! PhishNet CLI
//!
//! Submit emails and screenshots to the PhishNet analysis service and
//! render the verdict as a confidence gauge.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing on stderr so stdout stays clean for `--json` output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "phishnet=debug,phishnet_client=debug,phishnet_core=debug"
    } else {
        "phishnet=info,phishnet_client=warn,phishnet_core=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
