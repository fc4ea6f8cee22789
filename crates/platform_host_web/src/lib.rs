//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for manifest discovery and
//! context-menu suppression. Native builds compile the same adapters against a non-wasm shim
//! that reports the browser APIs as unavailable.
//!
//! Bridge bindings live under `bridge/`, with `bridge::interop` holding the shared
//! wasm/non-wasm transport glue.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod context_menu;
pub mod discovery;

pub use adapters::{
    build_host_services, context_menu_suppressor, host_capabilities, host_strategy_name,
    manifest_discovery_service, selected_host_strategy,
};
pub use context_menu::WebContextMenuSuppressor;
pub use discovery::WebManifestDiscoveryService;
