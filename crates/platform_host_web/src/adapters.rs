use std::rc::Rc;

use manifest_contract::SimulatorConfig;
use platform_host::{
    ContextMenuSuppressor, HostCapabilities, HostServices, HostStrategy, ManifestDiscoveryService,
    NoopManifestDiscoveryService,
};

use crate::{WebContextMenuSuppressor, WebManifestDiscoveryService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Returns the capability posture of the selected host strategy.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        HostStrategy::Headless => HostCapabilities::headless(),
    }
}

/// Builds the manifest discovery adapter for `config`.
///
/// An empty discovery endpoint disables lookups.
pub fn manifest_discovery_service(config: &SimulatorConfig) -> Rc<dyn ManifestDiscoveryService> {
    let endpoint = config.discovery_endpoint.trim();
    if endpoint.is_empty() {
        Rc::new(NoopManifestDiscoveryService)
    } else {
        Rc::new(WebManifestDiscoveryService::new(endpoint))
    }
}

/// Builds the context-menu suppressor for the selected host strategy.
pub fn context_menu_suppressor() -> Rc<dyn ContextMenuSuppressor> {
    Rc::new(WebContextMenuSuppressor)
}

/// Builds the host bundle injected into the simulator runtime.
pub fn build_host_services(config: &SimulatorConfig) -> HostServices {
    let mut capabilities = host_capabilities();
    if config.discovery_endpoint.trim().is_empty() {
        capabilities.manifest_discovery = platform_host::CapabilityStatus::Unavailable;
    }
    HostServices {
        discovery: manifest_discovery_service(config),
        context_menu: context_menu_suppressor(),
        capabilities,
        host_strategy: selected_host_strategy(),
    }
}
