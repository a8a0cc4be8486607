//! User preference record and font-scale arithmetic.
use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;

/// Font scales are kept on a 1e-4 grid so repeated steps never drift.
pub const SCALE_QUANTUM: f64 = 10_000.0;
/// Two scales closer than this are the same scale.
pub const FONT_SIZE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Ratio against the page's own text size; 1.0 leaves it untouched.
    pub font_size: f64,
    pub contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: 1.0,
            contrast: false,
        }
    }
}

/// Direction of a font-size step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Down,
    Up,
}

#[must_use]
pub fn quantize_scale(value: f64) -> f64 {
    (value * SCALE_QUANTUM).round() / SCALE_QUANTUM
}

#[must_use]
pub fn same_scale(a: f64, b: f64) -> bool {
    (a - b).abs() < FONT_SIZE_TOLERANCE
}

impl Settings {
    /// Font scale one step away from the current one, clamped to the configured bounds.
    #[must_use]
    pub fn stepped_font_size(&self, step: Step, config: &WidgetConfig) -> f64 {
        let delta = match step {
            Step::Down => -config.font_size_step,
            Step::Up => config.font_size_step,
        };
        config.clamp_font_size(quantize_scale(self.font_size + delta))
    }

    /// CSS percentage for the current scale, e.g. `1.3` renders as `130%`.
    #[must_use]
    pub fn font_scale_css(&self) -> String {
        let pct = (self.font_size * 100.0 * 100.0).round() / 100.0;
        format!("{pct}%")
    }

    /// Overwrite fields from a stored record.
    ///
    /// Only a JSON object is considered. `fontSize` is taken when it is a
    /// finite positive number and is clamped to the configured bounds;
    /// `contrast` is taken when it is a boolean. Anything else is ignored.
    pub fn merge_persisted(&mut self, record: &serde_json::Value, config: &WidgetConfig) {
        let Some(fields) = record.as_object() else {
            return;
        };
        if let Some(size) = fields
            .get("fontSize")
            .and_then(serde_json::Value::as_f64)
            .filter(|size| size.is_finite() && *size > 0.0)
        {
            self.font_size = config.clamp_font_size(quantize_scale(size));
        }
        if let Some(contrast) = fields.get("contrast").and_then(serde_json::Value::as_bool) {
            self.contrast = contrast;
        }
    }
}
