#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Scroll geometry for a single update.
///
/// `document_height` is the scrollable distance (`scrollHeight` minus the
/// viewport height), so `scroll_top == document_height` at the bottom of the
/// page. Values are read fresh on every update and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ViewportMetrics {
    #[must_use]
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self { scroll_top, viewport_height, document_height }
    }

    /// Fraction of the scrollable distance covered, or 0 when the page cannot
    /// scroll. Not clamped: overscroll may push it slightly outside `[0, 1]`.
    #[must_use]
    pub fn scroll_ratio(&self) -> f64 {
        if self.document_height > 0.0 {
            self.scroll_top / self.document_height
        } else {
            0.0
        }
    }
}

/// Pick the document scroll offset from the two places browsers report it.
///
/// The window offset wins unless it is `0` or `NaN`, in which case the root
/// element's `scrollTop` is used. A negative window offset (elastic
/// overscroll) is kept as is.
#[must_use]
pub fn scroll_offset(window_scroll_y: f64, root_scroll_top: f64) -> f64 {
    if window_scroll_y == 0.0 || window_scroll_y.is_nan() {
        root_scroll_top
    } else {
        window_scroll_y
    }
}

/// A navigable page section with document-relative geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDescriptor {
    pub id: String,
    pub top_offset: f64,
    pub height: f64,
}

impl SectionDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self { id: id.into(), top_offset, height }
    }

    /// Whether `scroll_top` lies in this section's range, shifted up by
    /// `lookahead`. The range is half-open: `[top - lookahead, top + height - lookahead)`.
    #[must_use]
    pub fn contains(&self, scroll_top: f64, lookahead: f64) -> bool {
        let start = self.top_offset - lookahead;
        let end = self.top_offset + self.height - lookahead;
        scroll_top >= start && scroll_top < end
    }
}

/// Binds a nav link to the section it activates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkBinding {
    pub target_section_id: String,
}

impl NavLinkBinding {
    #[must_use]
    pub fn new(target_section_id: impl Into<String>) -> Self {
        Self { target_section_id: target_section_id.into() }
    }

    /// Build a binding from an anchor `href` by dropping the first `#`.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        Self { target_section_id: href.replacen('#', "", 1) }
    }
}

/// Read-only page geometry consumed by the controller.
pub trait LayoutProvider {
    fn scroll_top(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Scrollable height; see [`ViewportMetrics::document_height`].
    fn document_height(&self) -> f64;
    /// Sections in document order.
    fn sections(&self) -> Vec<SectionDescriptor>;
    fn nav_links(&self) -> Vec<NavLinkBinding>;

    fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics::new(self.scroll_top(), self.viewport_height(), self.document_height())
    }
}
