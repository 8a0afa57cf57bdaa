//! PhishBowl upload commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use phishnet_client::UploadClient;
use phishnet_core::form::{EmailForm, ImageSelection};
use phishnet_core::{SampleLabel, UploadRequest};
use std::path::PathBuf;

use super::analyze::read_body;
use super::{form_error, read_input, run_request, Context};

#[derive(Subcommand)]
pub enum UploadCommands {
    /// Upload email text
    Email(UploadEmailArgs),

    /// Upload an email screenshot (png, jpeg or tiff)
    Image(UploadImageArgs),
}

#[derive(Args)]
pub struct LabelArgs {
    /// Mark the sample as legitimate instead of phishing
    #[arg(long)]
    pub legitimate: bool,

    /// Store the sample without anonymizing it
    #[arg(long)]
    pub no_anonymize: bool,
}

impl LabelArgs {
    fn label(&self) -> SampleLabel {
        if self.legitimate {
            SampleLabel::Legitimate
        } else {
            SampleLabel::Phishing
        }
    }
}

#[derive(Args)]
pub struct UploadEmailArgs {
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

    #[command(flatten)]
    pub label: LabelArgs,
}

#[derive(Args)]
pub struct UploadImageArgs {
    /// Screenshot file
    pub path: PathBuf,

    #[command(flatten)]
    pub label: LabelArgs,
}

pub async fn execute(cmd: UploadCommands, ctx: &Context) -> Result<()> {
    match cmd {
        UploadCommands::Email(args) => {
            let body = read_body(args.body, args.body_file.as_deref()).await?;
            let request = EmailForm::new(args.sender, args.subject, body)
                .into_upload(args.label.label())
                .map_err(form_error)?;
            send(request, &args.label, ctx).await
        }
        UploadCommands::Image(args) => {
            let bytes = read_input(&args.path).await?;
            let selection = ImageSelection::from_file(&args.path.to_string_lossy(), bytes)
                .map_err(form_error)?;
            send(selection.into_upload(args.label.label()), &args.label, ctx).await
        }
    }
}

async fn send(request: UploadRequest, flags: &LabelArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if flags.no_anonymize {
        config.anonymize = false;
    }
    let client = UploadClient::new(config);
    let kind = request.kind();
    let label = request.label();

    let receipt = run_request(ctx, "Uploading...", client.upload(request)).await?;

    let label_text = match label {
        SampleLabel::Phishing => "phishing".red(),
        SampleLabel::Legitimate => "legitimate".cyan(),
    };
    println!(
        "{} Added {} sample to the PhishBowl as {}",
        ctx.icons.success.green().bold(),
        kind,
        label_text
    );
    if !receipt.is_empty() {
        println!("  {}", receipt.0.to_string().dimmed());
    }
    Ok(())
}
