#![allow(clippy::float_cmp)]

use super::*;

// --- format_px ---

#[test]
fn format_px_uses_one_decimal() {
    assert_eq!(format_px(12.345), "12.3px");
    assert_eq!(format_px(-20.0), "-20.0px");
}

#[test]
fn format_px_rounds_exact_halves_away_from_zero() {
    assert_eq!(format_px(11.25), "11.3px");
    assert_eq!(format_px(-11.25), "-11.3px");
    assert_eq!(format_px(0.25), "0.3px");
    assert_eq!(format_px(12.5), "12.5px");
}

#[test]
fn format_px_keeps_sign_of_values_rounding_to_zero() {
    assert_eq!(format_px(-0.04), "-0.0px");
    assert_eq!(format_px(0.04), "0.0px");
}

#[test]
fn format_px_normalizes_negative_zero() {
    assert_eq!(format_px(-0.0), "0.0px");
    assert_eq!(format_px(0.0), "0.0px");
}

// --- ParallaxOffsets ---

#[test]
fn from_ratio_at_top_of_page() {
    let p = ParallaxOffsets::from_ratio(0.0, 40.0, 60.0);
    assert_eq!(p.x1, -20.0);
    assert_eq!(p.y1, 0.0);
    assert_eq!(p.x2, 20.0);
    assert_eq!(p.y2, 0.0);
}

#[test]
fn from_ratio_at_midpoint_is_horizontally_centred() {
    let p = ParallaxOffsets::from_ratio(0.5, 40.0, 60.0);
    assert_eq!(p.x1, 0.0);
    assert_eq!(p.x2, 0.0);
    assert_eq!(p.y1, 30.0);
    assert_eq!(p.y2, -30.0);
}

#[test]
fn from_ratio_blobs_mirror_each_other() {
    let p = ParallaxOffsets::from_ratio(0.8, 40.0, 60.0);
    assert!((p.x1 + p.x2).abs() < 1e-12);
    assert!((p.y1 + p.y2).abs() < 1e-12);
}

#[test]
fn css_properties_cover_both_blobs() {
    let props = ParallaxOffsets::from_ratio(1.0, 40.0, 60.0).css_properties();
    assert_eq!(props[0], ("--blob1-x", "20.0px".to_owned()));
    assert_eq!(props[1], ("--blob1-y", "60.0px".to_owned()));
    assert_eq!(props[2], ("--blob2-x", "-20.0px".to_owned()));
    assert_eq!(props[3], ("--blob2-y", "-60.0px".to_owned()));
}

#[test]
fn zero_offsets_render_as_zero_pixels() {
    for (_, value) in ParallaxOffsets::ZERO.css_properties() {
        assert_eq!(value, "0.0px");
    }
}

// --- DerivedViewState ---

#[test]
fn progress_width_drops_trailing_zero_fraction() {
    let state = DerivedViewState { progress_percent: 50.0, ..DerivedViewState::default() };
    assert_eq!(state.progress_width(), "50%");
}

#[test]
fn progress_width_keeps_fraction() {
    let state = DerivedViewState { progress_percent: 37.5, ..DerivedViewState::default() };
    assert_eq!(state.progress_width(), "37.5%");
}

#[test]
fn active_link_index_finds_marked_link() {
    let state = DerivedViewState {
        nav_link_active: vec![false, true, false],
        ..DerivedViewState::default()
    };
    assert_eq!(state.active_link_index(), Some(1));
}

#[test]
fn active_link_index_none_when_unmarked() {
    let state = DerivedViewState {
        nav_link_active: vec![false, false],
        ..DerivedViewState::default()
    };
    assert_eq!(state.active_link_index(), None);
}
