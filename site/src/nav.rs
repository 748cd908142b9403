//! Mobile navigation menu.
//!
//! The toggle button opens and closes `#nav-menu`. An open menu also closes
//! when one of its links is followed or when Escape is pressed. The DOM's
//! `open` class is the source of truth; [`NavMenu`] is rebuilt from it on
//! every event.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, LogJsErr};
#[cfg(feature = "hydrate")]
use crate::error::SetupError;

/// Class marking the menu as open.
pub const OPEN_CLASS: &str = "open";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip open/closed and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `false` when it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Toggle icon: a close mark while open, the hamburger otherwise.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        if self.open { "fa-xmark" } else { "fa-bars" }
    }

    #[must_use]
    pub fn stale_icon_class(self) -> &'static str {
        if self.open { "fa-bars" } else { "fa-xmark" }
    }
}

/// Whether a keydown with this `key` dismisses the menu.
#[must_use]
pub fn closes_on_key(key: &str) -> bool {
    key == "Escape"
}

#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct NavElements {
    toggle: web_sys::Element,
    menu: web_sys::Element,
}

#[cfg(feature = "hydrate")]
impl NavElements {
    fn state(&self) -> NavMenu {
        NavMenu::new(self.menu.class_list().contains(OPEN_CLASS))
    }

    fn render(&self, state: NavMenu) {
        self.menu
            .class_list()
            .toggle_with_force(OPEN_CLASS, state.is_open())
            .log_err("nav: open class");
        self.toggle
            .set_attribute("aria-expanded", state.aria_expanded())
            .log_err("nav: aria-expanded");
        if let Ok(Some(icon)) = self.toggle.query_selector("i") {
            dom::swap_class(&icon, state.stale_icon_class(), state.icon_class());
        }
    }

    fn close(&self) {
        let mut state = self.state();
        if state.close() {
            self.render(state);
        }
    }
}

/// Wire the toggle button, link clicks, and Escape.
///
/// # Errors
///
/// Returns [`SetupError::Bind`] if a listener cannot be attached.
#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document, config: &SiteConfig) -> Result<(), SetupError> {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id(&config.ids.nav_toggle),
        document.get_element_by_id(&config.ids.nav_menu),
    ) else {
        log::debug!("nav: toggle or menu missing, mobile nav disabled");
        return Ok(());
    };
    let nav = NavElements { toggle, menu };

    let on_toggle = nav.clone();
    dom::listen(&nav.toggle, "click", "nav toggle", move |_| {
        let mut state = on_toggle.state();
        state.toggle();
        on_toggle.render(state);
    })?;

    for link in dom::query_within(&nav.menu, "a") {
        let on_link = nav.clone();
        dom::listen(&link, "click", "nav link", move |_| on_link.close())?;
    }

    let on_key = nav;
    dom::listen(document, "keydown", "nav escape", move |event| {
        let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        if closes_on_key(&key_event.key()) {
            on_key.close();
        }
    })
}
