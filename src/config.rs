//! Edge style and throughput policy configuration.
//!
//! Everything the edge model reads from the host application's theme lives
//! here: default wired and wireless line styles, the label font and inset,
//! the throughput escalation policy and the application scale.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::canvas::{LabelFont, LineStyle};

/// Default wired line colour
pub const EDGE_COLOR: &str = "#ff0000";
/// Default wired line width
pub const EDGE_WIDTH: f64 = 3.0;
/// Resolved wireless link colour
pub const WIRELESS_COLOR: &str = "#009933";
/// Resolved wireless link width
pub const WIRELESS_WIDTH: f64 = 1.5;
/// Fraction of the line vector endpoint labels are inset by
pub const TEXT_DISTANCE: f64 = 0.30;

/// Match: "#rrggbb"
static COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("Invalid colour regex"));

/// Top-level configuration structure that mirrors the YAML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Default style of wired links
    pub edge: LineStyle,
    /// Style of resolved wireless links
    pub wireless: LineStyle,
    /// Endpoint and throughput label settings
    pub labels: LabelConfig,
    /// Throughput style escalation policy
    pub throughput: ThroughputPolicy,
    /// Application scale applied to drawn line widths
    pub scale: f64,
}

/// Label settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub font: LabelFont,
    /// Inset of endpoint labels as a fraction of the line vector
    pub text_distance: f64,
}

/// Throughput escalation policy.
///
/// Samples whose kbps value is strictly above `threshold` switch the line to
/// the escalated colour and width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThroughputPolicy {
    /// Threshold in kbps
    pub threshold: f64,
    pub color: String,
    pub width: f64,
}

impl ThroughputPolicy {
    /// Line style for a throughput sample already scaled to kbps
    pub fn style_for(&self, kbps: f64, default: &LineStyle) -> LineStyle {
        if kbps > self.threshold {
            LineStyle::new(self.color.clone(), self.width)
        } else {
            default.clone()
        }
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid colour '{value}' for {field}: expected #rrggbb")]
    InvalidColor { field: &'static str, value: String },
    #[error("Invalid width {value} for {field}: must be positive")]
    InvalidWidth { field: &'static str, value: f64 },
    #[error("Invalid label configuration: {0}")]
    InvalidLabels(String),
    #[error("Invalid throughput configuration: {0}")]
    InvalidThroughput(String),
    #[error("Invalid scale {0}: must be positive")]
    InvalidScale(f64),
}

impl EdgeConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let styles = [
            ("edge", &self.edge.color, self.edge.width),
            ("wireless", &self.wireless.color, self.wireless.width),
            ("throughput", &self.throughput.color, self.throughput.width),
        ];
        for (field, value, width) in styles {
            if !COLOR_PATTERN.is_match(value) {
                return Err(ValidationError::InvalidColor {
                    field,
                    value: value.clone(),
                });
            }
            if !(width > 0.0) {
                return Err(ValidationError::InvalidWidth { field, value: width });
            }
        }

        if self.labels.font.family.trim().is_empty() {
            return Err(ValidationError::InvalidLabels(
                "font family cannot be empty".to_string(),
            ));
        }
        if !(0.0..0.5).contains(&self.labels.text_distance) {
            return Err(ValidationError::InvalidLabels(format!(
                "text_distance {} must be within [0, 0.5)",
                self.labels.text_distance
            )));
        }

        if !(self.throughput.threshold >= 0.0) {
            return Err(ValidationError::InvalidThroughput(format!(
                "threshold {} cannot be negative",
                self.throughput.threshold
            )));
        }

        if !(self.scale > 0.0) {
            return Err(ValidationError::InvalidScale(self.scale));
        }

        Ok(())
    }

    /// Default wired style with the application scale applied
    pub fn edge_style(&self) -> LineStyle {
        self.edge.scaled(self.scale)
    }

    /// Wireless style with the application scale applied
    pub fn wireless_style(&self) -> LineStyle {
        self.wireless.scaled(self.scale)
    }

    /// Style for a kbps throughput sample with the application scale applied
    pub fn throughput_style(&self, kbps: f64) -> LineStyle {
        self.throughput.style_for(kbps, &self.edge).scaled(self.scale)
    }
}

/// Default implementations
impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            edge: LineStyle::new(EDGE_COLOR, EDGE_WIDTH),
            wireless: LineStyle::new(WIRELESS_COLOR, WIRELESS_WIDTH),
            labels: LabelConfig::default(),
            throughput: ThroughputPolicy::default(),
            scale: 1.0,
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font: LabelFont::default(),
            text_distance: TEXT_DISTANCE,
        }
    }
}

impl Default for ThroughputPolicy {
    fn default() -> Self {
        Self {
            threshold: 250.0,
            color: "#ff0000".to_string(),
            width: 10.0,
        }
    }
}
