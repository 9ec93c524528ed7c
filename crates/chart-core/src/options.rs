// File: crates/chart-core/src/options.rs
// Summary: Presentation option records for each chart and the JSON-loadable console config.
// Notes:
// - Keys are camelCase (`showAxis`, `showLegend`, ...) so configs written for the
//   web console load unchanged. Every field has a default; partial files are valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_DURATION_MS;
use crate::color::ColorSpec;
use crate::error::Result;
use crate::theme::{self, Theme};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineOptions {
    /// Logical height; width comes from the host.
    pub height: f32,
    pub color: ColorSpec,
    pub show_axis: bool,
    /// Tick labels laid out under the chart, spread edge to edge.
    pub labels: Vec<String>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            height: 60.0,
            color: ColorSpec::rgb(26, 115, 232),
            show_axis: false,
            labels: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DonutOptions {
    /// Logical diameter of the square surface.
    pub size: f32,
    pub thickness: f32,
    pub show_legend: bool,
    pub animate: bool,
    pub duration_ms: f64,
}

impl Default for DonutOptions {
    fn default() -> Self {
        Self {
            size: 120.0,
            thickness: 20.0,
            show_legend: false,
            animate: true,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Top,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressOptions {
    pub height: f32,
    /// Theme token (`primary`, `warning`, ...) or a literal color spec.
    pub color: String,
    pub show_label: bool,
    pub label_position: LabelPosition,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            height: 8.0,
            color: "primary".to_string(),
            show_label: false,
            label_position: LabelPosition::Right,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub theme: String,
    pub dpr: f32,
    pub line: LineOptions,
    pub donut: DonutOptions,
    pub progress: ProgressOptions,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            dpr: 1.0,
            line: LineOptions::default(),
            donut: DonutOptions::default(),
            progress: ProgressOptions::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_json_str(&text)?;
        log::debug!("loaded console config from {}", path.as_ref().display());
        Ok(cfg)
    }

    /// Named preset; unknown names fall back to light.
    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
