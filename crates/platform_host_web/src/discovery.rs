//! Manifest discovery adapter backed by an HTTP manifest-finder service.

use platform_host::{
    decode_discovery_payload, ManifestDiscoveryFuture, ManifestDiscoveryResponse,
    ManifestDiscoveryService,
};
use url::Url;

use crate::bridge;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser discovery adapter that asks a manifest-finder endpoint via `fetch`.
pub struct WebManifestDiscoveryService {
    endpoint: String,
}

impl WebManifestDiscoveryService {
    /// Creates an adapter for the manifest-finder `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Returns the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the lookup request URL for `site_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint is not an absolute URL.
    pub fn request_url(&self, site_url: &str) -> Result<String, String> {
        Url::parse_with_params(&self.endpoint, &[("url", site_url)])
            .map(String::from)
            .map_err(|err| format!("invalid manifest finder endpoint `{}`: {err}", self.endpoint))
    }
}

impl ManifestDiscoveryService for WebManifestDiscoveryService {
    fn find_manifest<'a>(
        &'a self,
        site_url: &'a str,
    ) -> ManifestDiscoveryFuture<'a, Result<ManifestDiscoveryResponse, String>> {
        Box::pin(async move {
            let request = self.request_url(site_url)?;
            let body = bridge::fetch_text(&request).await?;
            decode_discovery_payload(&body)
        })
    }
}
