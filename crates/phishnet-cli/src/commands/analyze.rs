//! Analysis commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use phishnet_client::AnalysisClient;
use phishnet_core::form::{EmailForm, ImageSelection};
use phishnet_core::{routes, AnalysisRequest, AnalysisResult, GaugeConfig};
use std::path::PathBuf;
use tracing::debug;

use super::{form_error, read_input, run_request, Context};
use crate::output;

#[derive(Subcommand)]
pub enum AnalyzeCommands {
    /// Analyze email text
    Email(EmailArgs),

    /// Analyze an email screenshot (png, jpeg or tiff)
    Image(ImageArgs),
}

#[derive(Args)]
pub struct EmailArgs {
    /// Sender, e.g. "Jane <jane@example.com>"
    #[arg(long, default_value = "")]
    pub sender: String,

    /// Subject line
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Email body
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the email body from a file ("-" for stdin)
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// Print the verdict as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ImageArgs {
    /// Screenshot file
    pub path: PathBuf,

    /// Print the verdict as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(cmd: AnalyzeCommands, ctx: &Context) -> Result<()> {
    match cmd {
        AnalyzeCommands::Email(args) => cmd_email(args, ctx).await,
        AnalyzeCommands::Image(args) => cmd_image(args, ctx).await,
    }
}

async fn cmd_email(args: EmailArgs, ctx: &Context) -> Result<()> {
    let body = read_body(args.body, args.body_file.as_deref()).await?;
    let request = EmailForm::new(args.sender, args.subject, body)
        .into_request()
        .map_err(form_error)?;

    submit(request, args.json, ctx).await
}

async fn cmd_image(args: ImageArgs, ctx: &Context) -> Result<()> {
    let bytes = read_input(&args.path).await?;
    let name = args.path.to_string_lossy();
    let selection = ImageSelection::from_file(&name, bytes)
        .map_err(form_error)?;

    submit(selection.into_request(), args.json, ctx).await
}

async fn submit(request: AnalysisRequest, json: bool, ctx: &Context) -> Result<()> {
    let client = AnalysisClient::new(ctx.config.clone());
    let result = run_request(ctx, "Analyzing...", client.submit(request)).await?;

    debug!(location = %routes::result_location(&result), "Navigating to result");
    show(&result, json, ctx)
}

pub(crate) fn show(result: &AnalysisResult, json: bool, ctx: &Context) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    output::print_gauge(&ctx.icons, &GaugeConfig::for_result(result), result);
    Ok(())
}

pub(crate) async fn read_body(body: Option<String>, file: Option<&std::path::Path>) -> Result<String> {
    if let Some(body) = body {
        return Ok(body);
    }
    match file {
        Some(path) if path.as_os_str() == "-" => read_stdin().await,
        Some(path) => decode_body(path, read_input(path).await?),
        None => Ok(String::new()),
    }
}

/// Email bodies must be UTF-8 text.
fn decode_body(path: &std::path::Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))
}

async fn read_stdin() -> Result<String> {
    use tokio::io::AsyncReadExt;

    let mut body = String::new();
    tokio::io::stdin().read_to_string(&mut body).await?;
    Ok(body)
}
