//! Output of a single scroll update.
//!
//! A [`DerivedViewState`] has no identity beyond the update that produced
//! it. Formatting helpers here turn numbers into the CSS strings the sink
//! writes, so every sink renders the same text.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::consts::{BLOB1_X_PROPERTY, BLOB1_Y_PROPERTY, BLOB2_X_PROPERTY, BLOB2_Y_PROPERTY};

/// Offsets for the two decorative background blobs, in CSS pixels.
///
/// Blob 1 drifts right and down as the page scrolls; blob 2 mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffsets {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ParallaxOffsets {
    pub const ZERO: Self = Self { x1: 0.0, y1: 0.0, x2: 0.0, y2: 0.0 };

    /// Offsets for a scroll `ratio`, centred horizontally at `ratio == 0.5`.
    #[must_use]
    pub fn from_ratio(ratio: f64, x_span: f64, y_span: f64) -> Self {
        Self {
            x1: (ratio - 0.5) * x_span,
            y1: ratio * y_span,
            x2: (0.5 - ratio) * x_span,
            y2: -ratio * y_span,
        }
    }

    /// Custom property name/value pairs for the root element.
    #[must_use]
    pub fn css_properties(&self) -> [(&'static str, String); 4] {
        [
            (BLOB1_X_PROPERTY, format_px(self.x1)),
            (BLOB1_Y_PROPERTY, format_px(self.y1)),
            (BLOB2_X_PROPERTY, format_px(self.x2)),
            (BLOB2_Y_PROPERTY, format_px(self.y2)),
        ]
    }
}

/// Everything the page shows as a function of scroll position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedViewState {
    /// Scroll progress in `[0, 100]`.
    pub progress_percent: f64,
    /// Header is past the sticky threshold.
    pub is_scrolled: bool,
    pub parallax: ParallaxOffsets,
    /// Id of the active section, empty when none matches.
    pub active_section_id: String,
    /// One entry per nav link, in link order; at most one is `true`.
    pub nav_link_active: Vec<bool>,
}

impl DerivedViewState {
    /// Width value for the progress bar, e.g. `"37.5%"`.
    #[must_use]
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent)
    }

    /// Index of the nav link marked active, if any.
    #[must_use]
    pub fn active_link_index(&self) -> Option<usize> {
        self.nav_link_active.iter().position(|active| *active)
    }
}

/// Format a pixel offset with one decimal place, e.g. `"-12.5px"`.
///
/// Rounds like `Number.prototype.toFixed(1)`: a value sitting exactly
/// halfway between two tenths goes away from zero (`11.25` → `"11.3px"`),
/// everything else goes to the nearest tenth. `-0.0` renders as `"0.0px"`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_px(value: f64) -> String {
    let magnitude = value.abs();
    let twentieths = magnitude * 20.0;
    // Exact only when the product lost no bits and landed on an odd integer.
    let is_tie = magnitude.mul_add(20.0, -twentieths) == 0.0
        && twentieths.fract() == 0.0
        && twentieths % 2.0 == 1.0;
    let magnitude = if is_tie { (twentieths + 1.0) / 20.0 } else { magnitude };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{magnitude:.1}px")
}
