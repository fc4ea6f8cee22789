//! Site URL sanitizing and image URL resolution through the safe-URL proxy.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

const HTTPS_PREFIX: &str = "https://";
const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Errors raised while normalizing or resolving URLs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The user-entered site URL does not look like a URL after adding a scheme.
    #[error("You have a bad https certificate or the url is incorrect.")]
    InvalidUrl,
    /// An image `src` could not be joined against the base URL.
    #[error("cannot resolve `{url}`: {reason}")]
    Unresolvable {
        /// The offending URL or base.
        url: String,
        /// Parser message.
        reason: String,
    },
}

fn url_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)^(https?://)?",
            r"((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|",
            r"((\d{1,3}\.){3}\d{1,3}))",
            r"(:\d+)?(/[-a-z\d%_.~+]*)*",
            r"(\?[;&a-z\d%_.~+=-]*)?",
            r"(#[-a-z\d_]*)?$",
        ))
        .expect("static url pattern compiles")
    })
}

/// Returns whether the text has the general shape of an absolute web URL.
pub fn is_valid_url(text: &str) -> bool {
    url_shape().is_match(text)
}

/// Normalizes a user-entered site identifier into an absolute URL with a scheme.
///
/// Empty input and input starting with `http` are returned unchanged. Anything else gets
/// `https://` prepended and is shape-checked; a failed check is an error unless the input
/// (case-insensitively) started with `http://`, in which case the prefixed value is still
/// returned.
///
/// # Errors
///
/// Returns [`UrlError::InvalidUrl`] when the prefixed value fails the shape check.
pub fn sanitize_site_url(input: &str) -> Result<String, UrlError> {
    if input.is_empty() || input.starts_with("http") {
        return Ok(input.to_string());
    }

    let cleaned = format!("{HTTPS_PREFIX}{input}");
    if !is_valid_url(&cleaned) && !input.to_lowercase().starts_with("http://") {
        return Err(UrlError::InvalidUrl);
    }
    Ok(cleaned)
}

/// Derives the site URL from a manifest URL by cutting at the last `manifest.json`.
pub fn derive_site_url(manifest_url: &str) -> String {
    match manifest_url.rfind(MANIFEST_FILE_NAME) {
        Some(index) => manifest_url[..index].to_string(),
        None => manifest_url.to_string(),
    }
}

/// Resolves manifest image sources into renderable URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlResolver {
    base: Url,
    safe_url_endpoint: Option<String>,
}

impl ImageUrlResolver {
    /// Creates a resolver for images relative to `base`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::Unresolvable`] when `base` is not an absolute URL.
    pub fn new(base: &str, safe_url_endpoint: Option<&str>) -> Result<Self, UrlError> {
        let base = Url::parse(base).map_err(|err| UrlError::Unresolvable {
            url: base.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            base,
            safe_url_endpoint: safe_url_endpoint
                .filter(|endpoint| !endpoint.is_empty())
                .map(str::to_string),
        })
    }

    /// Returns the absolute form of `src` without proxying.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::Unresolvable`] when `src` cannot be joined against the base.
    pub fn absolute(&self, src: &str) -> Result<Url, UrlError> {
        self.base.join(src).map_err(|err| UrlError::Unresolvable {
            url: src.to_string(),
            reason: err.to_string(),
        })
    }

    /// Returns the URL to put in an `<img src>` for `src`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::Unresolvable`] when `src` cannot be joined against the base.
    pub fn resolve(&self, src: &str) -> Result<String, UrlError> {
        let absolute = self.absolute(src)?;
        let Some(endpoint) = self.safe_url_endpoint.as_deref() else {
            return Ok(absolute.into());
        };
        let encoded: String = url::form_urlencoded::byte_serialize(absolute.as_str().as_bytes())
            .collect();
        Ok(format!("{endpoint}?url={encoded}"))
    }
}
