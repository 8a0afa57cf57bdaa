//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishnet_client::{ClientConfig, ClientError};
use phishnet_core::PhishnetError;
use std::future::Future;
use std::path::PathBuf;

use crate::output::{self, IconSet};

pub mod analyze;
pub mod count;
pub mod gauge;
pub mod upload;

/// PhishNet - phishing analysis from the command line
#[derive(Parser)]
#[command(name = "phishnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with client settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service (overrides config and PHISHNET_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Use plain ASCII glyphs instead of unicode icons
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze an email or a screenshot
    #[command(subcommand)]
    Analyze(analyze::AnalyzeCommands),

    /// Contribute a labeled sample to the PhishBowl
    #[command(subcommand)]
    Upload(upload::UploadCommands),

    /// Show how many samples the PhishBowl holds
    Count,

    /// Render a gauge for a label and confidence without calling the service
    Gauge(gauge::GaugeArgs),

    /// Render the gauge for a result-page location
    Result(gauge::ResultArgs),
}

/// Settings every command receives.
pub struct Context {
    pub config: ClientConfig,
    pub icons: IconSet,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let icons = IconSet::select(self.ascii);

        let mut config = ClientConfig::load(self.config.as_deref())?;
        if let Some(url) = &self.api_url {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        let ctx = Context { config, icons };

        match self.command {
            Commands::Analyze(cmd) => analyze::execute(cmd, &ctx).await,
            Commands::Upload(cmd) => upload::execute(cmd, &ctx).await,
            Commands::Count => count::execute(&ctx).await,
            Commands::Gauge(args) => gauge::execute_gauge(args, &ctx),
            Commands::Result(args) => gauge::execute_result(args, &ctx),
        }
    }
}

/// Await a request behind a spinner and turn client errors into the
/// message the user should see.
pub(crate) async fn run_request<T, F>(ctx: &Context, message: &str, request: F) -> Result<T>
where
    F: Future<Output = Result<T, ClientError>>,
{
    let spinner = output::spinner(&ctx.icons, message);
    let outcome = request.await;
    spinner.finish_and_clear();

    outcome.map_err(|err| {
        if !err.is_validation() {
            tracing::debug!(error = %err, "Request failed");
        }
        anyhow::anyhow!(err.user_message())
    })
}

/// Read a file the user pointed at, with the path in the error.
pub(crate) async fn read_input(path: &std::path::Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))
}

/// Form problems are shown as their inline message.
pub(crate) fn form_error(err: PhishnetError) -> anyhow::Error {
    match err.inline_message() {
        Some(msg) => anyhow::anyhow!(msg.to_string()),
        None => err.into(),
    }
}
