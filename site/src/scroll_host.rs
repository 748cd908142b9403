//! Browser side of the scroll controller.
//!
//! [`DomLayout`] reads geometry from the live document and [`DomSink`]
//! writes view commands back to it. Elements are resolved once in [`bind`]:
//! a page without a progress bar or header gets a sink whose writes to those
//! targets do nothing.
//!
//! The controller runs on every `scroll` and `resize` and once at bind time,
//! with no throttling. The reduced-motion flag is refreshed by the media
//! query's `change` event but only read on the next update.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scroll::consts::{ACTIVE_LINK_CLASS, ARIA_CURRENT_PAGE};
use scroll::controller::ScrollStateController;
use scroll::layout::{self, LayoutProvider, NavLinkBinding, SectionDescriptor};
use scroll::sink::{ViewCommand, ViewSink};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::dom::{self, LogJsErr};
use crate::error::SetupError;

pub struct DomLayout {
    window: Window,
    root: Element,
    sections: Vec<HtmlElement>,
    links: Vec<NavLinkBinding>,
}

impl DomLayout {
    fn window_scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

impl LayoutProvider for DomLayout {
    fn scroll_top(&self) -> f64 {
        layout::scroll_offset(self.window_scroll_y(), f64::from(self.root.scroll_top()))
    }

    fn viewport_height(&self) -> f64 {
        self.window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0))
    }

    fn document_height(&self) -> f64 {
        f64::from(self.root.scroll_height()) - self.viewport_height()
    }

    fn sections(&self) -> Vec<SectionDescriptor> {
        let scroll_y = self.window_scroll_y();
        self.sections
            .iter()
            .map(|el| {
                let top = el.get_bounding_client_rect().top() + scroll_y;
                SectionDescriptor::new(el.id(), top, f64::from(el.offset_height()))
            })
            .collect()
    }

    fn nav_links(&self) -> Vec<NavLinkBinding> {
        self.links.clone()
    }
}

pub struct DomSink {
    root_style: CssStyleDeclaration,
    progress_style: Option<CssStyleDeclaration>,
    header: Option<Element>,
    links: Vec<Element>,
}

impl ViewSink for DomSink {
    fn apply(&mut self, command: &ViewCommand) {
        match command {
            ViewCommand::ProgressWidth(width) => {
                if let Some(style) = &self.progress_style {
                    style.set_property("width", width).log_err("scroll: progress width");
                }
            }
            ViewCommand::RootProperty { name, value } => {
                self.root_style.set_property(name, value).log_err("scroll: root property");
            }
            ViewCommand::HeaderClass { class, enabled } => {
                if let Some(header) = &self.header {
                    header
                        .class_list()
                        .toggle_with_force(class, *enabled)
                        .log_err("scroll: header class");
                }
            }
            ViewCommand::NavLink { index, active } => {
                let Some(link) = self.links.get(*index) else {
                    return;
                };
                link.class_list()
                    .toggle_with_force(ACTIVE_LINK_CLASS, *active)
                    .log_err("scroll: link class");
                if *active {
                    link.set_attribute("aria-current", ARIA_CURRENT_PAGE)
                        .log_err("scroll: aria-current");
                } else {
                    link.remove_attribute("aria-current").log_err("scroll: aria-current");
                }
            }
        }
    }
}

struct ScrollHost {
    controller: ScrollStateController,
    layout: DomLayout,
    sink: RefCell<DomSink>,
    reduced_motion: Rc<Cell<bool>>,
    active_link: Cell<Option<usize>>,
}

impl ScrollHost {
    fn refresh(&self) {
        let mut sink = self.sink.borrow_mut();
        let state = self.controller.update(&self.layout, &*self.reduced_motion, &mut *sink);
        let active = state.active_link_index();
        if self.active_link.replace(active) != active {
            log::debug!("scroll: section {:?} active, link {active:?}", state.active_section_id);
        }
    }
}

/// Track the reduced-motion media query in a shared flag.
fn watch_reduced_motion(window: &Window, query: &str) -> Result<Rc<Cell<bool>>, SetupError> {
    let flag = Rc::new(Cell::new(false));
    let Ok(Some(list)) = window.match_media(query) else {
        log::debug!("scroll: media query {query} unsupported, motion enabled");
        return Ok(flag);
    };
    flag.set(list.matches());

    let on_change = Rc::clone(&flag);
    let source = list.clone();
    dom::listen(&list, "change", "reduced motion query", move |_| {
        on_change.set(source.matches());
        log::debug!("scroll: reduced motion now {}", source.matches());
    })?;
    Ok(flag)
}

fn style_of(el: &Element) -> Option<CssStyleDeclaration> {
    el.dyn_ref::<HtmlElement>().map(HtmlElement::style)
}

/// Resolve scroll targets, run the first update, and follow scroll/resize.
///
/// # Errors
///
/// Returns [`SetupError::NoRootElement`] if `<html>` is missing or not an
/// HTML element, and [`SetupError::Bind`] if a listener cannot be attached.
pub fn bind(window: &Window, document: &web_sys::Document, config: &SiteConfig) -> Result<(), SetupError> {
    let root = document.document_element().ok_or(SetupError::NoRootElement)?;
    let root_style = style_of(&root).ok_or(SetupError::NoRootElement)?;

    let sections: Vec<HtmlElement> = dom::query_all(document, &config.section_selector)
        .into_iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
        .collect();
    let link_elements = dom::query_all(document, &config.nav_link_selector);
    let links = link_elements
        .iter()
        .map(|a| NavLinkBinding::from_href(&a.get_attribute("href").unwrap_or_default()))
        .collect();
    log::info!("scroll: tracking {} sections, {} nav links", sections.len(), link_elements.len());

    let sink = DomSink {
        root_style,
        progress_style: document.get_element_by_id(&config.ids.scroll_progress).as_ref().and_then(style_of),
        header: document.get_element_by_id(&config.ids.header),
        links: link_elements,
    };
    let host = Rc::new(ScrollHost {
        controller: ScrollStateController::new(config.scroll),
        layout: DomLayout { window: window.clone(), root, sections, links },
        sink: RefCell::new(sink),
        reduced_motion: watch_reduced_motion(window, &config.reduced_motion_query)?,
        active_link: Cell::new(None),
    });
    let thresholds = host.controller.config();
    log::debug!(
        "scroll: header sticks past {}px, sections activate {}px early",
        thresholds.sticky_threshold_px,
        thresholds.section_lookahead_px
    );

    for event in ["scroll", "resize"] {
        let on_event = Rc::clone(&host);
        dom::listen(window, event, "scroll host", move |_| on_event.refresh())?;
    }
    host.refresh();
    Ok(())
}
