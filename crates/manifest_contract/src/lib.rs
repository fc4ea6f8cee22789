//! Web app manifest model and pure helpers shared by the simulator runtime and its host adapters.
//!
//! The crate owns the editable manifest document, a lenient typed view over it, icon and
//! screenshot URL resolution, site URL sanitizing, the built-in manifest template, and the
//! construction-time simulator configuration. It has no UI dependency so every rule here is
//! testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod document;
pub mod site_url;
pub mod template;

pub use config::{
    ConfigError, ExplanationKind, ExplanationOverrides, Explanations, ManifestSource,
    SimulatorConfig, DEFAULT_DISCOVERY_ENDPOINT, DEFAULT_EDITOR_DEBOUNCE_MS,
    DEFAULT_EDITOR_STATUS_DISPLAY_MS, DEFAULT_EXPLANATION_DISPLAY_MS, DEFAULT_INVALID_JSON_MESSAGE,
    DEFAULT_SAFE_URL_ENDPOINT,
};
pub use document::{
    Display, ImageResource, Manifest, ManifestDocument, RelatedApplication, Shortcut,
    DEFAULT_APP_NAME, DEFAULT_STORE_DESCRIPTION,
};
pub use site_url::{derive_site_url, sanitize_site_url, ImageUrlResolver, UrlError};
pub use template::{default_manifest_document, MANIFEST_TEMPLATE};
