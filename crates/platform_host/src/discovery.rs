//! Manifest discovery service contracts, wire decoding, and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Object-safe boxed future used by [`ManifestDiscoveryService`].
pub type ManifestDiscoveryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Result of one manifest lookup for a site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ManifestDiscoveryResponse {
    /// Manifest contents found for the site.
    pub manifest: Option<Value>,
    /// Where the manifest was found; used as the base for relative image URLs.
    pub manifest_url: Option<String>,
    /// Service-reported error (the lookup completed but found nothing usable).
    pub error: Option<String>,
}

impl ManifestDiscoveryResponse {
    /// Builds a successful response.
    pub fn found(manifest: Value, manifest_url: Option<String>) -> Self {
        Self {
            manifest: Some(manifest),
            manifest_url,
            error: None,
        }
    }

    /// Builds a service-reported failure.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    content: Option<WireContent>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct WireContent {
    #[serde(default, alias = "manifestContents")]
    json: Option<Value>,
    #[serde(default)]
    url: Option<String>,
}

/// Decodes a manifest-finder response body.
///
/// The service answers `{ "content": { "json": {...}, "url": "..." }, "error": ... }`. A
/// non-null `error` wins over any content.
///
/// # Errors
///
/// Returns an error when the body is not JSON of that shape.
pub fn decode_discovery_payload(raw: &str) -> Result<ManifestDiscoveryResponse, String> {
    let wire: WireResponse = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let error = match wire.error {
        None | Some(Value::Null) => None,
        Some(Value::String(message)) => Some(message),
        Some(other) => Some(other.to_string()),
    };
    if let Some(error) = error {
        return Ok(ManifestDiscoveryResponse::failed(error));
    }

    let content = wire
        .content
        .ok_or_else(|| "manifest finder response has no content".to_string())?;
    let manifest = content
        .json
        .ok_or_else(|| "manifest finder response has no manifest".to_string())?;
    Ok(ManifestDiscoveryResponse::found(manifest, content.url))
}

/// Host service that looks up the web app manifest of a site.
pub trait ManifestDiscoveryService {
    /// Issues exactly one lookup for `site_url`.
    ///
    /// `Err` means the request itself failed (network, decoding); a completed lookup that found
    /// nothing is reported through [`ManifestDiscoveryResponse::error`].
    fn find_manifest<'a>(
        &'a self,
        site_url: &'a str,
    ) -> ManifestDiscoveryFuture<'a, Result<ManifestDiscoveryResponse, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Discovery service for hosts without network access.
pub struct NoopManifestDiscoveryService;

impl ManifestDiscoveryService for NoopManifestDiscoveryService {
    fn find_manifest<'a>(
        &'a self,
        _site_url: &'a str,
    ) -> ManifestDiscoveryFuture<'a, Result<ManifestDiscoveryResponse, String>> {
        Box::pin(async { Err("manifest discovery is unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory discovery service with scripted responses per site URL.
pub struct MemoryManifestDiscoveryService {
    responses: Rc<RefCell<HashMap<String, Result<ManifestDiscoveryResponse, String>>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MemoryManifestDiscoveryService {
    /// Scripts the outcome returned for `site_url`.
    pub fn insert(
        &self,
        site_url: impl Into<String>,
        outcome: Result<ManifestDiscoveryResponse, String>,
    ) {
        self.responses.borrow_mut().insert(site_url.into(), outcome);
    }

    /// Returns every site URL looked up so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ManifestDiscoveryService for MemoryManifestDiscoveryService {
    fn find_manifest<'a>(
        &'a self,
        site_url: &'a str,
    ) -> ManifestDiscoveryFuture<'a, Result<ManifestDiscoveryResponse, String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(site_url.to_string());
            self.responses
                .borrow()
                .get(site_url)
                .cloned()
                .unwrap_or_else(|| Err(format!("no scripted response for {site_url}")))
        })
    }
}
