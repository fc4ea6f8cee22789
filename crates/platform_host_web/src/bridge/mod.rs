//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! Callers see one stable async API; target-specific transport lives in `interop`.

mod interop;

pub async fn fetch_text(url: &str) -> Result<String, String> {
    interop::fetch_text(url).await
}

pub fn install_context_menu_blocker() -> Result<u32, String> {
    interop::install_context_menu_blocker()
}

pub fn remove_context_menu_blocker(handle: u32) {
    interop::remove_context_menu_blocker(handle);
}
