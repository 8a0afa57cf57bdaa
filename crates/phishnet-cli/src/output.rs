//! Terminal output formatting.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use phishnet_core::gauge::{self, GaugeConfig};
use phishnet_core::{AnalysisLabel, AnalysisResult};

/// Glyphs used in terminal output. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub success: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub bar_fill: &'static str,
    pub bar_track: &'static str,
    pub spinner: &'static str,
}

impl IconSet {
    pub const UNICODE: IconSet = IconSet {
        success: "✓",
        info: "ℹ",
        warning: "!",
        bar_fill: "█",
        bar_track: "░",
        spinner: "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ",
    };

    pub const ASCII: IconSet = IconSet {
        success: "+",
        info: "i",
        warning: "!",
        bar_fill: "#",
        bar_track: ".",
        spinner: "|/-\\ ",
    };

    pub fn select(ascii: bool) -> Self {
        if ascii {
            Self::ASCII
        } else {
            Self::UNICODE
        }
    }
}

/// Spinner on stderr while a request is pending.
pub fn spinner(icons: &IconSet, message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(icons.spinner);
    bar.set_style(style);
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Print the verdict with a horizontal rendering of the gauge.
pub fn print_gauge(icons: &IconSet, gauge: &GaugeConfig, result: &AnalysisResult) {
    let fill = gauge::fill_color(result);
    let label = match result.label {
        AnalysisLabel::Phishing => result.label.as_str().red().bold(),
        AnalysisLabel::Legitimate => result.label.as_str().cyan().bold(),
    };

    let width = bar_width(term_width());
    let (filled, track) = gauge_cells(gauge.percent(), width);

    println!();
    println!(
        "  {}{}  {}",
        icons.bar_fill.repeat(filled).truecolor(fill.r, fill.g, fill.b),
        icons.bar_track.repeat(track).dimmed(),
        gauge.value_text().bold()
    );
    println!("  {}", label);
    println!(
        "  {}",
        format!(
            "fill {} ({})  animation {:.0} ms",
            fill,
            fill.to_hex(),
            gauge.animation_ms()
        )
        .dimmed()
    );
    println!();
}

/// Split a bar of `width` cells into filled and empty cells for a percentage.
pub fn gauge_cells(percent: f64, width: usize) -> (usize, usize) {
    let share = (percent / 100.0).clamp(0.0, 1.0);
    let filled = ((width as f64) * share).round() as usize;
    let filled = filled.min(width);
    (filled, width - filled)
}

fn bar_width(term_width: usize) -> usize {
    term_width.saturating_sub(16).clamp(10, 50)
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}
