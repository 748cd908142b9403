//! Small web-sys helpers shared by the page features.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, NodeList};

use crate::error::SetupError;

/// Log a failed DOM call at debug level instead of dropping it.
pub trait LogJsErr {
    fn log_err(self, context: &str);
}

impl<T> LogJsErr for Result<T, JsValue> {
    fn log_err(self, context: &str) {
        if let Err(e) = self {
            log::debug!("{context}: {e:?}");
        }
    }
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`SetupError::Bind`] naming `what` if the browser rejects the
/// listener.
pub fn listen(
    target: &EventTarget,
    event: &str,
    what: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SetupError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| SetupError::Bind { what, detail: format!("{e:?}") })?;
    // The page never unbinds; the closure lives as long as the listener.
    closure.forget();
    Ok(())
}

/// All elements matching `selector`, in document order. An invalid
/// selector yields nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    elements(document.query_selector_all(selector), selector)
}

/// Descendants of `parent` matching `selector`, in document order.
pub fn query_within(parent: &Element, selector: &str) -> Vec<Element> {
    elements(parent.query_selector_all(selector), selector)
}

fn elements(result: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let Ok(list) = result else {
        log::warn!("invalid selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Replace class `remove` with `add` on `el`.
pub fn swap_class(el: &Element, remove: &str, add: &str) {
    let classes = el.class_list();
    classes.remove_1(remove).log_err("swap class: remove");
    classes.add_1(add).log_err("swap class: add");
}
