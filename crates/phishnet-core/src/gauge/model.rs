//! Radial gauge options.
//!
//! Field names serialize to the camelCase shape of the radial-bar chart
//! options the result page was drawn with.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeConfig {
    pub chart: ChartOptions,
    pub plot_options: PlotOptions,
    pub series: Vec<f64>,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub font_family: String,
    pub animations: Animations,
    pub sparkline: Toggle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animations {
    pub enabled: bool,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptions {
    pub radial_bar: RadialBar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialBar {
    pub start_angle: i32,
    pub end_angle: i32,
    pub hollow: Hollow,
    pub track: Track,
    pub data_labels: DataLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hollow {
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub background: String,
    pub drop_shadow: DropShadow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropShadow {
    pub enabled: bool,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataLabels {
    pub name: NameLabel,
    pub value: ValueLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLabel {
    pub offset_y: i32,
    pub font_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueLabel {
    pub offset_y: i32,
    pub color: String,
    pub font_size: String,
}
