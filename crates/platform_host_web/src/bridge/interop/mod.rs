//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge facade.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_text(url: &str) -> Result<String, String> {
    imp::fetch_text(url).await
}

pub fn install_context_menu_blocker() -> Result<u32, String> {
    imp::install_context_menu_blocker()
}

pub fn remove_context_menu_blocker(handle: u32) {
    imp::remove_context_menu_blocker(handle);
}
