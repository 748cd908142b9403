//! Contact form submission.
//!
//! On submit the form posts `{name, email, message}` as JSON to the URL in
//! its `data-endpoint` attribute. Without an endpoint, or when the post fails,
//! it falls back to opening the visitor's mail client with a prefilled
//! `mailto:` link.
//!
//! ERROR HANDLING
//! ==============
//! A failed post is never fatal: [`crate::error::ContactError`] is logged and the form
//! moves on to the mailto fallback, so the visitor always has a way to send.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, LogJsErr};
#[cfg(feature = "hydrate")]
use crate::error::{ContactError, SetupError};

/// JSON body posted to the contact endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    /// Build a payload from raw field values, trimming each.
    #[must_use]
    pub fn from_fields(name: &str, email: &str, message: &str) -> Self {
        Self { name: name.trim().to_owned(), email: email.trim().to_owned(), message: message.trim().to_owned() }
    }
}

/// Endpoint from a `data-endpoint` value; blank means none.
#[must_use]
pub fn endpoint_from_attr(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

/// Percent-encode like JavaScript's `encodeURIComponent`: everything except
/// ASCII alphanumerics and `-_.!~*'()` becomes `%XX` per UTF-8 byte.
#[must_use]
pub fn encode_uri_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Prefilled `mailto:` link for the fallback path.
#[must_use]
pub fn mailto_href(address: &str, payload: &ContactPayload) -> String {
    let name = encode_uri_component(&payload.name);
    let email = encode_uri_component(&payload.email);
    let message = encode_uri_component(&payload.message);
    let sender = if name.is_empty() { "visitor" } else { name.as_str() };
    format!(
        "mailto:{address}?subject=Portfolio contact from {sender}\
         &body=Name: {name}%0D%0AEmail: {email}%0D%0A%0D%0AMessage:%0D%0A{message}"
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Neutral,
    Success,
    Error,
}

impl StatusKind {
    /// Full `class` attribute for the status element.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Neutral => "form-status",
            Self::Success => "form-status success",
            Self::Error => "form-status error",
        }
    }
}

/// Text and styling shown in the status element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl FormStatus {
    #[must_use]
    pub fn sending() -> Self {
        Self { message: "Sending...".to_owned(), kind: StatusKind::Neutral }
    }

    #[must_use]
    pub fn sent() -> Self {
        Self { message: "Thanks! I received your message and will reply soon.".to_owned(), kind: StatusKind::Success }
    }

    #[must_use]
    pub fn send_failed() -> Self {
        Self { message: "Couldn't send via form. Opening your mail app instead…".to_owned(), kind: StatusKind::Error }
    }

    #[must_use]
    pub fn mail_app_hint(address: &str) -> Self {
        Self {
            message: format!("If your mail app didn't open, please email me directly at {address}."),
            kind: StatusKind::Success,
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct ContactForm {
    window: web_sys::Window,
    form: web_sys::HtmlFormElement,
    status: Option<web_sys::Element>,
    address: String,
}

#[cfg(feature = "hydrate")]
impl ContactForm {
    fn show(&self, status: &FormStatus) {
        let Some(el) = &self.status else {
            return;
        };
        el.set_text_content(Some(&status.message));
        el.set_attribute("class", status.kind.class_name()).log_err("contact: status class");
    }

    fn field(&self, name: &str) -> String {
        use wasm_bindgen::JsCast;

        let Ok(Some(el)) = self.form.query_selector(&format!("[name=\"{name}\"]")) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn payload(&self) -> ContactPayload {
        ContactPayload::from_fields(&self.field("name"), &self.field("email"), &self.field("message"))
    }

    async fn submit(self, payload: ContactPayload, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint {
            match post(&endpoint, &payload).await {
                Ok(()) => {
                    self.form.reset();
                    self.show(&FormStatus::sent());
                    return;
                }
                Err(e) => {
                    log::warn!("contact: {e}; falling back to mailto");
                    self.show(&FormStatus::send_failed());
                }
            }
        }
        let href = mailto_href(&self.address, &payload);
        self.window.location().set_href(&href).log_err("contact: open mailto");
        self.show(&FormStatus::mail_app_hint(&self.address));
    }
}

#[cfg(feature = "hydrate")]
async fn post(endpoint: &str, payload: &ContactPayload) -> Result<(), ContactError> {
    let response = gloo_net::http::Request::post(endpoint)
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ContactError::Status(response.status()));
    }
    Ok(())
}

/// Intercept submits on the contact form.
///
/// # Errors
///
/// Returns [`SetupError::Bind`] if the submit listener cannot be attached.
#[cfg(feature = "hydrate")]
pub fn bind(window: &web_sys::Window, document: &web_sys::Document, config: &SiteConfig) -> Result<(), SetupError> {
    use wasm_bindgen::JsCast;

    let Some(form) = document
        .get_element_by_id(&config.ids.contact_form)
        .and_then(|el| el.dyn_ref::<web_sys::HtmlFormElement>().cloned())
    else {
        log::debug!("contact: no #{} form on page", config.ids.contact_form);
        return Ok(());
    };
    let address = form
        .get_attribute("data-mailto")
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
        .unwrap_or_else(|| config.contact_address.clone());
    let contact = ContactForm {
        window: window.clone(),
        form,
        status: document.get_element_by_id(&config.ids.contact_status),
        address,
    };

    let target = contact.form.clone();
    dom::listen(&target, "submit", "contact form", move |event| {
        event.prevent_default();
        contact.show(&FormStatus::sending());
        let payload = contact.payload();
        let endpoint = endpoint_from_attr(contact.form.get_attribute("data-endpoint").as_deref());
        wasm_bindgen_futures::spawn_local(contact.clone().submit(payload, endpoint));
    })
}
