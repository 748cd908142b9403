//! Dark/light theme toggle.
//!
//! The active theme is the `data-theme` attribute on `<html>` (missing means
//! dark). Clicking the toggle flips it, persists the choice to `localStorage`,
//! and swaps the toggle's icon and label. Storage is best-effort: private
//! browsing or a full quota only loses persistence.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, LogJsErr};
#[cfg(feature = "hydrate")]
use crate::error::SetupError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interpret a `data-theme` value. Anything other than missing, empty, or
    /// `"dark"` counts as light.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("" | "dark") => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon shown on the toggle: the theme a click switches to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fa-sun",
            Self::Light => "fa-moon",
        }
    }

    /// Icon to remove when showing [`Self::icon_class`].
    #[must_use]
    pub fn stale_icon_class(self) -> &'static str {
        self.toggled().icon_class()
    }

    /// `aria-label` and `title` for the toggle.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

/// Read the persisted theme, if any.
#[cfg(feature = "hydrate")]
fn stored(window: &web_sys::Window, key: &str) -> Option<Theme> {
    let Ok(Some(storage)) = window.local_storage() else {
        return None;
    };
    let Ok(Some(raw)) = storage.get_item(key) else {
        return None;
    };
    Some(Theme::parse(Some(&raw)))
}

#[cfg(feature = "hydrate")]
fn current(root: &web_sys::Element) -> Theme {
    Theme::parse(root.get_attribute("data-theme").as_deref())
}

#[cfg(feature = "hydrate")]
fn sync_toggle(toggle: &web_sys::Element, theme: Theme) {
    if let Ok(Some(icon)) = toggle.query_selector("i") {
        dom::swap_class(&icon, theme.stale_icon_class(), theme.icon_class());
    }
    toggle.set_attribute("aria-label", theme.toggle_label()).log_err("theme: aria-label");
    toggle.set_attribute("title", theme.toggle_label()).log_err("theme: title");
}

#[cfg(feature = "hydrate")]
fn set(window: &web_sys::Window, root: &web_sys::Element, toggle: &web_sys::Element, key: &str, theme: Theme) {
    root.set_attribute("data-theme", theme.as_str()).log_err("theme: data-theme");
    if let Ok(Some(storage)) = window.local_storage() {
        storage.set_item(key, theme.as_str()).log_err("theme: persist");
    }
    sync_toggle(toggle, theme);
}

/// Restore a persisted theme, sync the toggle, and listen for clicks.
///
/// # Errors
///
/// Returns [`SetupError::Bind`] if the click listener cannot be attached.
#[cfg(feature = "hydrate")]
pub fn bind(window: &web_sys::Window, document: &web_sys::Document, config: &SiteConfig) -> Result<(), SetupError> {
    let root = document.document_element().ok_or(SetupError::NoRootElement)?;
    if let Some(theme) = stored(window, &config.theme_storage_key) {
        root.set_attribute("data-theme", theme.as_str()).log_err("theme: restore");
    }
    let Some(toggle) = document.get_element_by_id(&config.ids.theme_toggle) else {
        log::debug!("theme: no #{} on page", config.ids.theme_toggle);
        return Ok(());
    };
    sync_toggle(&toggle, current(&root));

    let window = window.clone();
    let key = config.theme_storage_key.clone();
    let target = toggle.clone();
    dom::listen(&target, "click", "theme toggle", move |_| {
        let next = current(&root).toggled();
        set(&window, &root, &toggle, &key, next);
        log::debug!("theme: switched to {}", next.as_str());
    })
}
