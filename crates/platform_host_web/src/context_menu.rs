//! Document-level context-menu suppression for the browser.

use platform_host::{ContextMenuSuppressor, SuppressionGuard};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser suppressor that cancels `contextmenu` events on the document while a guard lives.
pub struct WebContextMenuSuppressor;

impl ContextMenuSuppressor for WebContextMenuSuppressor {
    fn suppress(&self) -> SuppressionGuard {
        // Without a document there is no native menu to suppress.
        match bridge::install_context_menu_blocker() {
            Ok(handle) => SuppressionGuard::new(move || bridge::remove_context_menu_blocker(handle)),
            Err(_) => SuppressionGuard::inert(),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_builds_hand_out_inert_guards() {
        let guard = WebContextMenuSuppressor.suppress();
        assert!(format!("{guard:?}").contains("false"));
    }
}
