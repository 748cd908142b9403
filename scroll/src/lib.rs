//! Scroll-driven view state for the portfolio page.
//!
//! This crate is platform-agnostic: it never touches the DOM. The browser
//! adapter in `site` reads layout geometry, hands it to
//! [`controller::ScrollStateController`], and applies the returned
//! [`state::DerivedViewState`] through a [`sink::ViewSink`]. Everything here
//! runs natively under `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | `recompute` and the layout → state → sink cycle |
//! | [`layout`] | Viewport metrics, section and nav link descriptors |
//! | [`state`] | Derived view state and parallax offsets |
//! | [`sink`] | View commands and the output sink trait |
//! | [`config`] | Tunable thresholds with JSON overrides |
//! | [`consts`] | Default thresholds, class names, CSS property names |

pub mod config;
pub mod consts;
pub mod controller;
pub mod layout;
pub mod sink;
pub mod state;
