//! Tunable thresholds for the scroll controller.
//!
//! Defaults come from [`crate::consts`]. A page may override any subset by
//! embedding a JSON object (for example in a `data-scroll-config` attribute);
//! missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{PARALLAX_X_SPAN_PX, PARALLAX_Y_SPAN_PX, SECTION_LOOKAHEAD_PX, STICKY_THRESHOLD_PX};

/// Error returned by [`ScrollConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override string is not a valid JSON object of known fields.
    #[error("failed to parse scroll config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds a value the controller cannot use.
    #[error("invalid scroll config value for {field}: {value}")]
    Invalid { field: &'static str, value: f64 },
}

/// Controller thresholds, all in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Header becomes sticky when `scroll_top` is strictly greater than this.
    pub sticky_threshold_px: f64,
    /// Bias subtracted from each section's range during active detection.
    pub section_lookahead_px: f64,
    /// Full-range horizontal parallax travel.
    pub parallax_x_span_px: f64,
    /// Full-range vertical parallax travel.
    pub parallax_y_span_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            sticky_threshold_px: STICKY_THRESHOLD_PX,
            section_lookahead_px: SECTION_LOOKAHEAD_PX,
            parallax_x_span_px: PARALLAX_X_SPAN_PX,
            parallax_y_span_px: PARALLAX_Y_SPAN_PX,
        }
    }
}

impl ScrollConfig {
    /// Parse a JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] for negative values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("sticky_threshold_px", self.sticky_threshold_px),
            ("section_lookahead_px", self.section_lookahead_px),
            ("parallax_x_span_px", self.parallax_x_span_px),
            ("parallax_y_span_px", self.parallax_y_span_px),
        ];
        for (field, value) in fields {
            if value < 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }
}
