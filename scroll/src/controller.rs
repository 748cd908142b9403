//! Scroll state controller.
//!
//! [`ScrollStateController::recompute`] is a pure function of the current
//! geometry and the reduced-motion flag. It keeps no state between calls, so
//! running it redundantly (every scroll event, every resize, once at start)
//! always converges on the same output.
//!
//! [`ScrollStateController::update`] is the full cycle used by the browser:
//! read layout, read the motion flag, recompute, write to the sink. The
//! motion flag is read lazily on each update; a preference change with no
//! following scroll or resize leaves the page as it was.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;

use crate::config::ScrollConfig;
use crate::layout::{LayoutProvider, NavLinkBinding, SectionDescriptor, ViewportMetrics};
use crate::sink::{ViewSink, view_commands};
use crate::state::{DerivedViewState, ParallaxOffsets};

/// Source of the user's reduced-motion preference.
pub trait MotionSource {
    fn reduced_motion(&self) -> bool;
}

impl MotionSource for bool {
    fn reduced_motion(&self) -> bool {
        *self
    }
}

impl MotionSource for Cell<bool> {
    fn reduced_motion(&self) -> bool {
        self.get()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollStateController {
    config: ScrollConfig,
}

impl ScrollStateController {
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Derive the view state for one frame.
    #[must_use]
    pub fn recompute(
        &self,
        metrics: &ViewportMetrics,
        sections: &[SectionDescriptor],
        nav_links: &[NavLinkBinding],
        reduced_motion: bool,
    ) -> DerivedViewState {
        let progress_percent = if metrics.document_height > 0.0 {
            (metrics.scroll_top / metrics.document_height * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let is_scrolled = metrics.scroll_top > self.config.sticky_threshold_px;

        let parallax = if reduced_motion {
            ParallaxOffsets::ZERO
        } else {
            ParallaxOffsets::from_ratio(
                metrics.scroll_ratio(),
                self.config.parallax_x_span_px,
                self.config.parallax_y_span_px,
            )
        };

        // Last match in document order wins when ranges overlap.
        let active_section_id = sections
            .iter()
            .rev()
            .find(|section| section.contains(metrics.scroll_top, self.config.section_lookahead_px))
            .map_or_else(String::new, |section| section.id.clone());

        let nav_link_active = nav_links
            .iter()
            .map(|link| !active_section_id.is_empty() && link.target_section_id == active_section_id)
            .collect();

        DerivedViewState { progress_percent, is_scrolled, parallax, active_section_id, nav_link_active }
    }

    /// Read `layout` and `motion`, recompute, and write every resulting
    /// command to `sink`. Returns the state that was applied.
    pub fn update<L, M, S>(&self, layout: &L, motion: &M, sink: &mut S) -> DerivedViewState
    where
        L: LayoutProvider + ?Sized,
        M: MotionSource + ?Sized,
        S: ViewSink + ?Sized,
    {
        let metrics = layout.metrics();
        let sections = layout.sections();
        let nav_links = layout.nav_links();
        let state = self.recompute(&metrics, &sections, &nav_links, motion.reduced_motion());
        for command in view_commands(&state) {
            sink.apply(&command);
        }
        state
    }
}

/// [`ScrollStateController::recompute`] with default thresholds.
#[must_use]
pub fn recompute(
    metrics: &ViewportMetrics,
    sections: &[SectionDescriptor],
    nav_links: &[NavLinkBinding],
    reduced_motion: bool,
) -> DerivedViewState {
    ScrollStateController::default().recompute(metrics, sections, nav_links, reduced_motion)
}
