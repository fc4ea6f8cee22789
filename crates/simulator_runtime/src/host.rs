//! Host-side runtime helpers for executing reducer effects.
//!
//! Timers, manifest lookups, and DOM focus live behind [`SimulatorHostContext`] so reducer
//! semantics stay pure and the injected [`HostServices`] bundle can be swapped for in-memory
//! adapters in tests.

mod host_ui;
mod lookup;
mod timers;

use std::rc::Rc;

use leptos::SignalSet;
use platform_host::{
    ContextMenuSuppressor, HostCapabilities, HostServices, ManifestDiscoveryService,
    SuppressionGuard,
};

use crate::{
    reducer::{RuntimeEffect, SimulatorAction},
    runtime_context::SimulatorRuntimeContext,
};

use self::timers::TimerSlot;

#[derive(Clone)]
/// Host service bundle for simulator runtime side effects.
pub struct SimulatorHostContext {
    discovery: Rc<dyn ManifestDiscoveryService>,
    context_menu: Rc<dyn ContextMenuSuppressor>,
    capabilities: HostCapabilities,
    host_strategy_name: &'static str,
    explanation_timer: TimerSlot,
    editor_status_timer: TimerSlot,
}

impl Default for SimulatorHostContext {
    fn default() -> Self {
        Self::new(HostServices::headless())
    }
}

impl SimulatorHostContext {
    /// Wraps the injected host services.
    pub fn new(services: HostServices) -> Self {
        Self {
            host_strategy_name: services.host_strategy_name(),
            discovery: services.discovery,
            context_menu: services.context_menu,
            capabilities: services.capabilities,
            explanation_timer: TimerSlot::default(),
            editor_status_timer: TimerSlot::default(),
        }
    }

    /// Returns the configured manifest discovery service.
    pub fn discovery_service(&self) -> Rc<dyn ManifestDiscoveryService> {
        self.discovery.clone()
    }

    /// Returns the host availability snapshot.
    pub fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Suppresses the native context menu until the returned guard drops.
    pub fn suppress_context_menu(&self) -> SuppressionGuard {
        self.context_menu.suppress()
    }

    /// Clears every pending timer.
    pub fn cancel_timers(&self) {
        self.explanation_timer.cancel();
        self.editor_status_timer.cancel();
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: SimulatorRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleExplanationStep {
                generation,
                step,
                delay_ms,
            } => self.explanation_timer.schedule(delay_ms, move || {
                runtime.dispatch_action(SimulatorAction::ExplanationElapsed { generation, step });
            }),
            RuntimeEffect::ScheduleEditorStatusHide {
                generation,
                delay_ms,
            } => self.editor_status_timer.schedule(delay_ms, move || {
                runtime.dispatch_action(SimulatorAction::EditorStatusElapsed { generation });
            }),
            RuntimeEffect::SyncEditor(sync) => runtime.editor_sync.set(Some(sync)),
            RuntimeEffect::LookupManifest {
                request_id,
                site_url,
            } => lookup::lookup_manifest(self.clone(), runtime, request_id, site_url),
            RuntimeEffect::FocusSiteInput => host_ui::focus_site_input(),
        }
    }
}
