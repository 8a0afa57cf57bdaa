//! Confidence gauge for an analysis verdict.

pub mod model;

pub use model::GaugeConfig;

use crate::analysis::model::AnalysisResult;
use crate::color::{self, Color};
use model::*;

pub const START_ANGLE: i32 = -145;
pub const END_ANGLE: i32 = 145;
pub const TRACK_BACKGROUND: &str = "#1E1F1C";
pub const VALUE_COLOR: &str = "#ADA6A0";
const FONT_FAMILY: &str = "eurostile";

/// Value label formatter: two decimals and a percent sign.
pub fn format_value(value: f64) -> String {
    format!("{:.2}%", value)
}

impl GaugeConfig {
    /// Build the gauge options for a verdict.
    pub fn for_result(result: &AnalysisResult) -> Self {
        let confidence = color::clamp_unit(result.confidence);
        let fill = color::label_color(result.label, confidence);

        Self {
            chart: ChartOptions {
                chart_type: "radialBar".to_string(),
                font_family: FONT_FAMILY.to_string(),
                animations: Animations {
                    enabled: true,
                    speed: color::animation_duration_ms(confidence),
                },
                sparkline: Toggle { enabled: true },
            },
            plot_options: PlotOptions {
                radial_bar: RadialBar {
                    start_angle: START_ANGLE,
                    end_angle: END_ANGLE,
                    hollow: Hollow {
                        size: "40%".to_string(),
                    },
                    track: Track {
                        background: TRACK_BACKGROUND.to_string(),
                        drop_shadow: DropShadow {
                            enabled: true,
                            opacity: 0.15,
                        },
                    },
                    data_labels: DataLabels {
                        name: NameLabel {
                            offset_y: 120,
                            font_size: "1.5rem".to_string(),
                        },
                        value: ValueLabel {
                            offset_y: 76,
                            color: VALUE_COLOR.to_string(),
                            font_size: "1rem".to_string(),
                        },
                    },
                },
            },
            series: vec![confidence * 100.0],
            labels: vec![result.label.to_string()],
            colors: vec![fill.to_string()],
        }
    }

    /// Percentage shown in the gauge.
    pub fn percent(&self) -> f64 {
        self.series.first().copied().unwrap_or_default()
    }

    /// Formatted value label.
    pub fn value_text(&self) -> String {
        format_value(self.percent())
    }

    /// Animation length in milliseconds.
    pub fn animation_ms(&self) -> f64 {
        self.chart.animations.speed
    }

    /// Share of the arc that is filled, in degrees.
    pub fn sweep_degrees(&self) -> f64 {
        f64::from(END_ANGLE - START_ANGLE) * self.percent() / 100.0
    }
}

/// Fill color for a verdict, as a value rather than a CSS string.
pub fn fill_color(result: &AnalysisResult) -> Color {
    color::label_color(result.label, result.confidence)
}
