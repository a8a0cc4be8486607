//! Widget configuration supplied by the host page.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::SCALE_QUANTUM;

/// Where the toolbar is anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopRight,
    BottomRight,
    TopLeft,
    BottomLeft,
}

impl Position {
    /// Inline style anchoring the toolbar 20px from the two edges of its corner.
    #[must_use]
    pub const fn inline_style(self) -> &'static str {
        match self {
            Self::TopRight => "top:20px;right:20px;",
            Self::BottomRight => "bottom:20px;right:20px;",
            Self::TopLeft => "top:20px;left:20px;",
            Self::BottomLeft => "bottom:20px;left:20px;",
        }
    }
}

/// Glyphs shown on the three controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    pub decrease: String,
    pub increase: String,
    pub contrast: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            decrease: "\u{2212}A".to_string(),
            increase: "+A".to_string(),
            contrast: "\u{263C}".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub font_size_step: f64,
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub storage_key: String,
    /// Any CSS length; applied to both width and height of each button.
    pub button_size: String,
    pub position: Position,
    pub icons: Icons,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            font_size_step: 0.1,
            min_font_size: 0.5,
            max_font_size: 2.0,
            storage_key: "a11ySettings".to_string(),
            button_size: "40px".to_string(),
            position: Position::default(),
            icons: Icons::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration is not valid JSON for this widget: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("fontSizeStep must be positive (got {0})")]
    NonPositiveStep(f64),
    #[error("fontSizeStep must be a whole multiple of 0.0001 (got {0})")]
    StepResolution(f64),
    #[error("font size bounds must satisfy 0 < min <= 1.0 <= max (got min {min}, max {max})")]
    Bounds { min: f64, max: f64 },
    #[error("storageKey must not be empty")]
    EmptyStorageKey,
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration object.
    ///
    /// Omitted fields fall back to their defaults and unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is not a compatible object or the
    /// resulting configuration fails [`WidgetConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`WidgetConfig::from_json`] for an already parsed value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the value does not describe a valid configuration.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric invariants the rest of the widget relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("fontSizeStep", self.font_size_step),
            ("minFontSize", self.min_font_size),
            ("maxFontSize", self.max_font_size),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if self.font_size_step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.font_size_step));
        }
        // Scales live on the 1e-4 grid; a step off that grid would be rounded away.
        let grid_steps = self.font_size_step * SCALE_QUANTUM;
        if grid_steps.round() < 1.0 || (grid_steps - grid_steps.round()).abs() > 1e-6 {
            return Err(ConfigError::StepResolution(self.font_size_step));
        }
        if self.min_font_size <= 0.0 || self.min_font_size > 1.0 || self.max_font_size < 1.0 {
            return Err(ConfigError::Bounds {
                min: self.min_font_size,
                max: self.max_font_size,
            });
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }

    /// Clamp a font scale into the configured bounds.
    ///
    /// Bounds must have passed [`WidgetConfig::validate`]; [`crate::Widget`]
    /// never holds a configuration that has not.
    #[must_use]
    pub fn clamp_font_size(&self, value: f64) -> f64 {
        value.clamp(self.min_font_size, self.max_font_size)
    }
}
