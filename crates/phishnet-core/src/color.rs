//! Color interpolation for the confidence gauge.
//!
//! The gauge fill starts at a neutral yellow and moves toward a
//! label-specific endpoint as confidence grows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::model::AnalysisLabel;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form, e.g. `#FFD866`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// CSS `rgb(r, g, b)` form, as consumed by the chart options.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Neutral start color shared by both labels.
pub const NEUTRAL: Color = Color::new(255, 216, 102);

/// Endpoint for phishing verdicts.
pub const PHISHING: Color = Color::new(255, 97, 136);

/// Endpoint for legitimate verdicts.
pub const LEGITIMATE: Color = Color::new(120, 220, 232);

/// Clamp a confidence into [0, 1]. NaN maps to 0.
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Linearly interpolate between two colors, channel by channel.
///
/// `t` is clamped to [0, 1], so the result always stays between the endpoints.
pub fn interpolate(start: Color, end: Color, t: f64) -> Color {
    let t = clamp_unit(t);
    let channel = |s: u8, e: u8| -> u8 {
        let value = f64::from(s) + (f64::from(e) - f64::from(s)) * t;
        value.round().clamp(0.0, 255.0) as u8
    };

    Color {
        r: channel(start.r, end.r),
        g: channel(start.g, end.g),
        b: channel(start.b, end.b),
    }
}

/// Endpoint color for a verdict label.
pub fn endpoint(label: AnalysisLabel) -> Color {
    match label {
        AnalysisLabel::Phishing => PHISHING,
        AnalysisLabel::Legitimate => LEGITIMATE,
    }
}

/// Gauge fill color for a verdict.
pub fn label_color(label: AnalysisLabel, confidence: f64) -> Color {
    interpolate(NEUTRAL, endpoint(label), confidence)
}

/// Gauge fill animation length in milliseconds.
///
/// Cube-root easing: low-confidence results animate faster.
pub fn animation_duration_ms(confidence: f64) -> f64 {
    1000.0 * clamp_unit(confidence).cbrt()
}
