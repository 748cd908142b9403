//! Page configuration.
//!
//! Every hook the adapter looks up in the DOM (element ids, selectors,
//! storage key, fallback address) lives here with the page's defaults. A
//! page can override any field with a JSON object in the root element's
//! `data-site-config` attribute, and tune the scroll thresholds with
//! `data-scroll-config`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use scroll::config::ScrollConfig;
use serde::Deserialize;

use crate::error::SetupError;

/// Ids of the elements the adapter binds to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub header: String,
    pub scroll_progress: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    pub theme_toggle: String,
    pub contact_form: String,
    pub contact_status: String,
    pub year: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            header: "header".to_owned(),
            scroll_progress: "scroll-progress".to_owned(),
            nav_toggle: "nav-toggle".to_owned(),
            nav_menu: "nav-menu".to_owned(),
            theme_toggle: "theme-toggle".to_owned(),
            contact_form: "contact-form".to_owned(),
            contact_status: "contact-status".to_owned(),
            year: "year".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub ids: ElementIds,
    /// Sections eligible for nav highlighting, in document order.
    pub section_selector: String,
    pub nav_link_selector: String,
    pub reveal_selector: String,
    pub reveal_class: String,
    /// Fraction of a `.reveal` element that must be visible to reveal it.
    pub reveal_threshold: f64,
    pub theme_storage_key: String,
    /// Recipient of the mailto fallback when the form has no `data-mailto`.
    pub contact_address: String,
    pub reduced_motion_query: String,
    #[serde(skip)]
    pub scroll: ScrollConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            section_selector: "main section[id]".to_owned(),
            nav_link_selector: "#nav-menu a".to_owned(),
            reveal_selector: ".reveal".to_owned(),
            reveal_class: "in-view".to_owned(),
            reveal_threshold: 0.15,
            theme_storage_key: "theme".to_owned(),
            contact_address: "hello@example.com".to_owned(),
            reduced_motion_query: "(prefers-reduced-motion: reduce)".to_owned(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Build the config from the root element's optional override attributes.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::SiteConfig`] or [`SetupError::ScrollConfig`] when
    /// an attribute is present but malformed. Blank attributes are ignored.
    pub fn load(site_json: Option<&str>, scroll_json: Option<&str>) -> Result<Self, SetupError> {
        let mut config = match non_blank(site_json) {
            Some(raw) => serde_json::from_str::<Self>(raw)?,
            None => Self::default(),
        };
        if let Some(raw) = non_blank(scroll_json) {
            config.scroll = ScrollConfig::from_json(raw)?;
        }
        Ok(config)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
