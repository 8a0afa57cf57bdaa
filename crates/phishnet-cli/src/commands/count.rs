//! PhishBowl size.

use anyhow::Result;
use colored::Colorize;
use phishnet_client::UploadClient;

use super::{run_request, Context};

pub async fn execute(ctx: &Context) -> Result<()> {
    let client = UploadClient::new(ctx.config.clone());
    let count = run_request(ctx, "Counting...", client.count()).await?;

    println!(
        "{} The PhishBowl holds {} sample(s)",
        ctx.icons.info.blue().bold(),
        count.to_string().bold()
    );
    Ok(())
}
