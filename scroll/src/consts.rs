//! Shared constants for the scroll crate.

// ── Thresholds ──────────────────────────────────────────────────

/// Scroll offset in pixels past which the header counts as scrolled.
pub const STICKY_THRESHOLD_PX: f64 = 10.0;

/// Lookahead bias in pixels for active-section detection. Matches the height
/// of the fixed header that covers the top of each section.
pub const SECTION_LOOKAHEAD_PX: f64 = 140.0;

/// Horizontal parallax travel in pixels across the full scroll range.
pub const PARALLAX_X_SPAN_PX: f64 = 40.0;

/// Vertical parallax travel in pixels across the full scroll range.
pub const PARALLAX_Y_SPAN_PX: f64 = 60.0;

// ── Presentation hooks ──────────────────────────────────────────

/// Class toggled on the header once the page has scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Class toggled on the nav link of the active section.
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Value written to `aria-current` on the active nav link.
pub const ARIA_CURRENT_PAGE: &str = "page";

/// Root custom properties driven by the parallax offsets.
pub const BLOB1_X_PROPERTY: &str = "--blob1-x";
pub const BLOB1_Y_PROPERTY: &str = "--blob1-y";
pub const BLOB2_X_PROPERTY: &str = "--blob2-x";
pub const BLOB2_Y_PROPERTY: &str = "--blob2-y";
