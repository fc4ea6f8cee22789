//! Typed host-domain contracts shared by the simulator runtime and its browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the manifest
//! discovery contract, scoped context-menu suppression, and the host bundle, while concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod context_menu;
pub mod discovery;
pub mod host;

pub use context_menu::{
    ContextMenuSuppressor, MemoryContextMenuSuppressor, NoopContextMenuSuppressor,
    SuppressionGuard,
};
pub use discovery::{
    decode_discovery_payload, ManifestDiscoveryFuture, ManifestDiscoveryResponse,
    ManifestDiscoveryService, MemoryManifestDiscoveryService, NoopManifestDiscoveryService,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
