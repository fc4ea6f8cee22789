//! Runtime provider and context wiring for the simulator.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the editor resync
//! channel, and host lifetime hooks. UI composition stays in [`crate::components`].

use code_editor::EditorSync;
use leptos::*;
use manifest_contract::SimulatorConfig;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::SimulatorHostContext,
    model::SimulatorState,
    reducer::{reduce_simulator, RuntimeEffect, SimulatorAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading simulator state and dispatching [`SimulatorAction`] values.
pub struct SimulatorRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<SimulatorHostContext>,
    /// Reactive simulator state signal.
    pub state: RwSignal<SimulatorState>,
    /// Queue of runtime effects emitted by the reducer and processed by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Latest authoritative editor text; consumed by the editor panel.
    pub editor_sync: RwSignal<Option<EditorSync>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<SimulatorAction>,
}

impl SimulatorRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: SimulatorAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: SimulatorRuntimeContext) {
    let host = runtime.host.get_value();
    logging::log!("simulator runtime using {} host", host.host_strategy_name());

    let guard = host.suppress_context_menu();
    on_cleanup(move || {
        drop(guard);
        host.cancel_timers();
    });

    effect_executor::install(runtime);
}

/// Creates the reducer container under the current owner and installs host orchestration.
fn mount_runtime(config: SimulatorConfig, host_services: HostServices) -> SimulatorRuntimeContext {
    let bootstrap = SimulatorState::bootstrap(&config);
    for err in &bootstrap.errors {
        logging::warn!("simulator config: {err}");
    }

    let host = store_value(SimulatorHostContext::new(host_services));
    let state = create_rw_signal(bootstrap.state);
    let effects = create_rw_signal(bootstrap.effects);
    let editor_sync = create_rw_signal(None::<EditorSync>);

    let dispatch = Callback::new(move |action: SimulatorAction| {
        let mut simulator = state.get_untracked();
        let previous = simulator.clone();

        match reduce_simulator(&mut simulator, action) {
            Ok(new_effects) => {
                if simulator != previous {
                    state.set(simulator);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("simulator reducer error: {err}"),
        }
    });

    let runtime = SimulatorRuntimeContext {
        host,
        state,
        effects,
        editor_sync,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    runtime
}

#[component]
/// Provides [`SimulatorRuntimeContext`] to descendant components and bootstraps simulator state.
pub fn SimulatorProvider(
    /// Construction-time options.
    config: SimulatorConfig,
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    mount_runtime(config, host_services);

    children().into_view()
}

/// Returns the current [`SimulatorRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`SimulatorProvider`].
pub fn use_simulator_runtime() -> SimulatorRuntimeContext {
    use_context::<SimulatorRuntimeContext>().expect("SimulatorRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryContextMenuSuppressor, MemoryManifestDiscoveryService};

    use super::*;

    #[test]
    fn context_menu_stays_suppressed_while_runtime_is_mounted() {
        let reactive = create_runtime();
        let suppressor = MemoryContextMenuSuppressor::default();
        let services = HostServices::in_memory(
            MemoryManifestDiscoveryService::default(),
            suppressor.clone(),
        );

        let mount = as_child_of_current_owner(|services: HostServices| {
            mount_runtime(SimulatorConfig::default(), services)
        });
        let (runtime, disposer) = mount(services);

        assert!(suppressor.is_suppressed());
        assert!(!runtime.state.get_untracked().is_manifest_known());
        assert!(use_context::<SimulatorRuntimeContext>().is_none());

        drop(disposer);
        assert!(!suppressor.is_suppressed());
        assert_eq!(suppressor.active_count(), 0);

        reactive.dispose();
    }
}
