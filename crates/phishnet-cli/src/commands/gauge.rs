//! Offline gauge rendering.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use phishnet_core::routes::{self, Route};
use phishnet_core::{AnalysisLabel, AnalysisResult, GaugeConfig};
use tracing::warn;

use super::Context;
use crate::output;

#[derive(Args)]
pub struct GaugeArgs {
    /// Verdict label: PHISHING or LEGITIMATE
    #[arg(long, value_parser = parse_label)]
    pub label: AnalysisLabel,

    /// Confidence in [0, 1]; values outside are clamped
    #[arg(long, allow_negative_numbers = true)]
    pub confidence: f64,

    /// Print the chart options as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ResultArgs {
    /// Result-page location, e.g. /analyze/result/?response={...}
    pub location: String,

    /// Print the chart options as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_label(s: &str) -> Result<AnalysisLabel, String> {
    AnalysisLabel::parse(s).ok_or_else(|| format!("expected PHISHING or LEGITIMATE, got '{}'", s))
}

pub fn execute_gauge(args: GaugeArgs, ctx: &Context) -> Result<()> {
    if !(0.0..=1.0).contains(&args.confidence) {
        warn!(confidence = args.confidence, "Confidence outside [0, 1], clamping");
    }
    let result = AnalysisResult {
        label: args.label,
        confidence: args.confidence,
    };
    render(&result, args.json, ctx)
}

pub fn execute_result(args: ResultArgs, ctx: &Context) -> Result<()> {
    match routes::parse_result_location(&args.location) {
        Some(result) => render(&result, args.json, ctx),
        None => {
            println!(
                "{} No result to show, returning to {}",
                ctx.icons.warning.yellow(),
                Route::Home.path().bold()
            );
            Ok(())
        }
    }
}

fn render(result: &AnalysisResult, json: bool, ctx: &Context) -> Result<()> {
    let gauge = GaugeConfig::for_result(result);
    if json {
        println!("{}", serde_json::to_string_pretty(&gauge)?);
        return Ok(());
    }
    output::print_gauge(&ctx.icons, &gauge, result);
    Ok(())
}
