//! Reveal-on-scroll: `.reveal` elements gain `in-view` the first time they
//! intersect the viewport, then stop being observed.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::dom::{self, LogJsErr};
use crate::error::SetupError;

/// Observe every reveal target on the page.
///
/// # Errors
///
/// Returns [`SetupError::Bind`] if the observer cannot be created.
pub fn bind(document: &web_sys::Document, config: &SiteConfig) -> Result<(), SetupError> {
    let targets = dom::query_all(document, &config.reveal_selector);
    if targets.is_empty() {
        return Ok(());
    }

    let class = config.reveal_class.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                target.class_list().add_1(&class).log_err("reveal: add class");
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| SetupError::Bind { what: "reveal observer", detail: format!("{e:?}") })?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    log::debug!("reveal: observing {} elements", targets.len());
    Ok(())
}
