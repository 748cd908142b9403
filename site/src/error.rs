//! Error types for page setup and contact submission.
//!
//! Setup errors surface once from `app::mount` and are logged; nothing on
//! the scroll or click paths returns an error. Contact errors never reach the
//! user as-is: any of them switches the form to the mailto fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use scroll::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    /// The `data-site-config` attribute is not a valid config object.
    #[error("invalid site config: {0}")]
    SiteConfig(#[from] serde_json::Error),
    /// The `data-scroll-config` attribute was rejected by the scroll core.
    #[error(transparent)]
    ScrollConfig(#[from] ConfigError),
    /// A DOM call needed to wire a feature failed.
    #[error("failed to bind {what}: {detail}")]
    Bind { what: &'static str, detail: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// The payload could not be serialized or the request never completed.
    #[error("contact request failed: {0}")]
    Network(String),
    /// The endpoint answered with a non-2xx status.
    #[error("contact endpoint responded with status {0}")]
    Status(u16),
}
