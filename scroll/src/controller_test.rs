#![allow(clippy::float_cmp)]

use super::*;
use crate::sink::ViewCommand;

fn three_sections() -> Vec<SectionDescriptor> {
    vec![
        SectionDescriptor::new("home", 0.0, 800.0),
        SectionDescriptor::new("about", 800.0, 800.0),
        SectionDescriptor::new("projects", 1600.0, 800.0),
    ]
}

fn three_links() -> Vec<NavLinkBinding> {
    vec![NavLinkBinding::from_href("#home"), NavLinkBinding::from_href("#about"), NavLinkBinding::from_href("#projects")]
}

fn at(scroll_top: f64, document_height: f64) -> ViewportMetrics {
    ViewportMetrics::new(scroll_top, 900.0, document_height)
}

struct FakeLayout {
    metrics: ViewportMetrics,
    sections: Vec<SectionDescriptor>,
    links: Vec<NavLinkBinding>,
}

impl LayoutProvider for FakeLayout {
    fn scroll_top(&self) -> f64 {
        self.metrics.scroll_top
    }
    fn viewport_height(&self) -> f64 {
        self.metrics.viewport_height
    }
    fn document_height(&self) -> f64 {
        self.metrics.document_height
    }
    fn sections(&self) -> Vec<SectionDescriptor> {
        self.sections.clone()
    }
    fn nav_links(&self) -> Vec<NavLinkBinding> {
        self.links.clone()
    }
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_is_zero_when_page_cannot_scroll() {
    for document_height in [0.0, -1.0, -500.0] {
        let state = recompute(&at(300.0, document_height), &[], &[], false);
        assert_eq!(state.progress_percent, 0.0);
    }
}

#[test]
fn progress_is_percentage_of_scrollable_height() {
    let state = recompute(&at(600.0, 2400.0), &[], &[], false);
    assert_eq!(state.progress_percent, 25.0);
}

#[test]
fn progress_is_clamped_on_overscroll() {
    assert_eq!(recompute(&at(2500.0, 2400.0), &[], &[], false).progress_percent, 100.0);
    assert_eq!(recompute(&at(-30.0, 2400.0), &[], &[], false).progress_percent, 0.0);
}

#[test]
fn progress_is_monotonic_in_scroll_top() {
    let mut previous = -1.0;
    for step in 0..=50 {
        let scroll_top = f64::from(step) * 50.0;
        let progress = recompute(&at(scroll_top, 2400.0), &[], &[], false).progress_percent;
        assert!(progress >= previous, "progress dropped at scroll_top={scroll_top}");
        assert!((0.0..=100.0).contains(&progress));
        previous = progress;
    }
}

// =============================================================
// Sticky header
// =============================================================

#[test]
fn header_sticks_strictly_above_threshold() {
    assert!(!recompute(&at(0.0, 2400.0), &[], &[], false).is_scrolled);
    assert!(!recompute(&at(10.0, 2400.0), &[], &[], false).is_scrolled);
    assert!(recompute(&at(10.5, 2400.0), &[], &[], false).is_scrolled);
}

#[test]
fn header_unsticks_when_scrolling_back_up() {
    let down = recompute(&at(11.0, 2400.0), &[], &[], false);
    let up = recompute(&at(9.0, 2400.0), &[], &[], false);
    assert!(down.is_scrolled);
    assert!(!up.is_scrolled);
}

#[test]
fn sticky_threshold_comes_from_config() {
    let controller = ScrollStateController::new(ScrollConfig { sticky_threshold_px: 64.0, ..ScrollConfig::default() });
    assert_eq!(controller.config().sticky_threshold_px, 64.0);
    assert!(!controller.recompute(&at(50.0, 2400.0), &[], &[], false).is_scrolled);
    assert!(controller.recompute(&at(65.0, 2400.0), &[], &[], false).is_scrolled);
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn reduced_motion_zeroes_parallax_everywhere() {
    for scroll_top in [0.0, 300.0, 1200.0, 2400.0, 5000.0] {
        let state = recompute(&at(scroll_top, 2400.0), &[], &[], true);
        assert_eq!(state.parallax, ParallaxOffsets::ZERO);
    }
}

#[test]
fn parallax_is_centred_at_half_scroll() {
    let state = recompute(&at(1200.0, 2400.0), &[], &[], false);
    assert_eq!(state.parallax.x1, 0.0);
    assert_eq!(state.parallax.x2, 0.0);
    assert_eq!(state.parallax.y1, 30.0);
    assert_eq!(state.parallax.y2, -30.0);
}

#[test]
fn parallax_properties_round_exact_halves_up() {
    let state = recompute(&ViewportMetrics::new(300.0, 900.0, 1600.0), &[], &[], false);
    assert_eq!(
        state.parallax.css_properties(),
        [
            ("--blob1-x", "-12.5px".to_owned()),
            ("--blob1-y", "11.3px".to_owned()),
            ("--blob2-x", "12.5px".to_owned()),
            ("--blob2-y", "-11.3px".to_owned()),
        ]
    );
}

#[test]
fn parallax_uses_zero_ratio_for_unscrollable_page() {
    let state = recompute(&at(100.0, 0.0), &[], &[], false);
    assert_eq!(state.parallax, ParallaxOffsets::from_ratio(0.0, 40.0, 60.0));
}

#[test]
fn parallax_spans_come_from_config() {
    let controller = ScrollStateController::new(ScrollConfig {
        parallax_x_span_px: 10.0,
        parallax_y_span_px: 20.0,
        ..ScrollConfig::default()
    });
    let state = controller.recompute(&at(2400.0, 2400.0), &[], &[], false);
    assert_eq!(state.parallax, ParallaxOffsets { x1: 5.0, y1: 20.0, x2: -5.0, y2: -20.0 });
}

// =============================================================
// Active section + nav links
// =============================================================

#[test]
fn middle_section_active_with_header_bias() {
    let state = recompute(&at(940.0, 1500.0), &three_sections(), &three_links(), false);
    assert_eq!(state.active_section_id, "about");
    assert_eq!(state.nav_link_active, vec![false, true, false]);
    assert_eq!(state.nav_link_active.iter().filter(|a| **a).count(), 1);
}

#[test]
fn lookahead_activates_next_section_early() {
    let state = recompute(&at(660.0, 1500.0), &three_sections(), &three_links(), false);
    assert_eq!(state.active_section_id, "about");
    let state = recompute(&at(659.0, 1500.0), &three_sections(), &three_links(), false);
    assert_eq!(state.active_section_id, "home");
}

#[test]
fn no_section_matches_above_first_range() {
    let sections = vec![SectionDescriptor::new("about", 800.0, 800.0)];
    let links = vec![NavLinkBinding::new("about")];
    let state = recompute(&at(100.0, 1500.0), &sections, &links, false);
    assert_eq!(state.active_section_id, "");
    assert_eq!(state.nav_link_active, vec![false]);
}

#[test]
fn past_last_section_clears_every_link() {
    let state = recompute(&at(2300.0, 2400.0), &three_sections(), &three_links(), false);
    assert_eq!(state.active_section_id, "");
    assert!(state.nav_link_active.iter().all(|a| !a));
}

#[test]
fn overlapping_sections_resolve_to_last_in_order() {
    let sections = vec![SectionDescriptor::new("first", 0.0, 1000.0), SectionDescriptor::new("second", 500.0, 1000.0)];
    let links = vec![NavLinkBinding::new("first"), NavLinkBinding::new("second")];
    let state = recompute(&at(600.0, 2000.0), &sections, &links, false);
    assert_eq!(state.active_section_id, "second");
    assert_eq!(state.nav_link_active, vec![false, true]);
}

#[test]
fn empty_link_target_never_matches_missing_section() {
    let links = vec![NavLinkBinding::from_href("#"), NavLinkBinding::new("about")];
    let state = recompute(&at(5000.0, 2400.0), &three_sections(), &links, false);
    assert_eq!(state.nav_link_active, vec![false, false]);
}

#[test]
fn links_to_same_section_both_activate() {
    let links = vec![NavLinkBinding::new("about"), NavLinkBinding::new("about")];
    let state = recompute(&at(940.0, 2400.0), &three_sections(), &links, false);
    assert_eq!(state.nav_link_active, vec![true, true]);
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn recompute_twice_is_identical() {
    let metrics = at(1234.5, 2400.0);
    let first = recompute(&metrics, &three_sections(), &three_links(), false);
    let second = recompute(&metrics, &three_sections(), &three_links(), false);
    assert_eq!(first, second);
}

#[test]
fn update_twice_writes_identical_commands() {
    let controller = ScrollStateController::default();
    let layout = FakeLayout { metrics: at(940.0, 2400.0), sections: three_sections(), links: three_links() };
    let mut first: Vec<ViewCommand> = Vec::new();
    let mut second: Vec<ViewCommand> = Vec::new();
    controller.update(&layout, &false, &mut first);
    controller.update(&layout, &false, &mut second);
    assert_eq!(first, second);
}

// =============================================================
// update + motion preference
// =============================================================

#[test]
fn update_returns_applied_state() {
    let controller = ScrollStateController::default();
    let layout = FakeLayout { metrics: at(940.0, 2400.0), sections: three_sections(), links: three_links() };
    let mut sink: Vec<ViewCommand> = Vec::new();
    let state = controller.update(&layout, &false, &mut sink);
    assert_eq!(state.active_section_id, "about");
    assert!(sink.contains(&ViewCommand::NavLink { index: 1, active: true }));
    assert!(sink.contains(&ViewCommand::ProgressWidth(state.progress_width())));
}

#[test]
fn motion_change_is_lazy_until_next_update() {
    let controller = ScrollStateController::default();
    let layout = FakeLayout { metrics: at(1800.0, 2400.0), sections: three_sections(), links: three_links() };
    let reduced = Cell::new(false);
    let mut sink: Vec<ViewCommand> = Vec::new();

    let before = controller.update(&layout, &reduced, &mut sink);
    assert_ne!(before.parallax, ParallaxOffsets::ZERO);
    let written = sink.len();

    // Flipping the preference alone writes nothing.
    reduced.set(true);
    assert_eq!(sink.len(), written);

    let after = controller.update(&layout, &reduced, &mut sink);
    assert_eq!(after.parallax, ParallaxOffsets::ZERO);
    assert!(sink[written..].contains(&ViewCommand::RootProperty { name: "--blob1-x", value: "0.0px".to_owned() }));
}

#[test]
fn motion_source_bool_and_cell_agree() {
    assert!(true.reduced_motion());
    assert!(!Cell::new(false).reduced_motion());
}
