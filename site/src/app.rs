//! Page bootstrap: resolve the document, load config, bind every feature.

use crate::config::SiteConfig;
use crate::error::SetupError;
use crate::{contact, nav, reveal, scroll_host, theme};

/// Bind all page features.
///
/// Features bind independently: one failing is logged and the rest still
/// run.
///
/// # Errors
///
/// Returns an error only when the document itself or the config attributes
/// are unusable.
pub fn mount() -> Result<(), SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    let root = document.document_element().ok_or(SetupError::NoRootElement)?;
    let config = SiteConfig::load(
        root.get_attribute("data-site-config").as_deref(),
        root.get_attribute("data-scroll-config").as_deref(),
    )?;

    let features = [
        ("theme", theme::bind(&window, &document, &config)),
        ("nav", nav::bind(&document, &config)),
        ("reveal", reveal::bind(&document, &config)),
        ("scroll", scroll_host::bind(&window, &document, &config)),
        ("contact", contact::bind(&window, &document, &config)),
    ];
    for (name, result) in features {
        if let Err(e) = result {
            log::error!("{name}: {e}");
        }
    }

    if let Some(year) = document.get_element_by_id(&config.ids.year) {
        year.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
    }
    log::info!("site mounted");
    Ok(())
}
