//! Shared host-bundle and capability models for browser and headless simulator composition.

use std::rc::Rc;

use crate::{
    ContextMenuSuppressor, ManifestDiscoveryService, MemoryContextMenuSuppressor,
    MemoryManifestDiscoveryService, NoopContextMenuSuppressor, NoopManifestDiscoveryService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Headless composition (native builds and tests) with in-memory or no-op adapters.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not implemented or not supported on the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Host capability snapshot exposed to runtime wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Outbound manifest lookups.
    pub manifest_discovery: CapabilityStatus,
    /// Suppressing the native context menu.
    pub context_menu_suppression: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser-default capability posture.
    pub const fn browser() -> Self {
        Self {
            manifest_discovery: CapabilityStatus::Available,
            context_menu_suppression: CapabilityStatus::Available,
        }
    }

    /// Headless capability posture.
    pub const fn headless() -> Self {
        Self {
            manifest_discovery: CapabilityStatus::Unavailable,
            context_menu_suppression: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle injected into the simulator runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `simulator_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Manifest lookup service used by the site URL form.
    pub discovery: Rc<dyn ManifestDiscoveryService>,
    /// Native context-menu suppression.
    pub context_menu: Rc<dyn ContextMenuSuppressor>,
    /// Host availability snapshot.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Headless bundle with no-op adapters.
    pub fn headless() -> Self {
        Self {
            discovery: Rc::new(NoopManifestDiscoveryService),
            context_menu: Rc::new(NoopContextMenuSuppressor),
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        }
    }

    /// Headless bundle backed by the supplied in-memory adapters.
    pub fn in_memory(
        discovery: MemoryManifestDiscoveryService,
        context_menu: MemoryContextMenuSuppressor,
    ) -> Self {
        Self {
            discovery: Rc::new(discovery),
            context_menu: Rc::new(context_menu),
            capabilities: HostCapabilities {
                manifest_discovery: CapabilityStatus::Available,
                context_menu_suppression: CapabilityStatus::Available,
            },
            host_strategy: HostStrategy::Headless,
        }
    }

    /// Returns the stable host strategy token.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy.as_str()
    }
}
