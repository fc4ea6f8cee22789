use leptos::{logging, spawn_local};

use crate::{
    host::SimulatorHostContext, reducer::SimulatorAction,
    runtime_context::SimulatorRuntimeContext,
};

pub(super) fn lookup_manifest(
    host: SimulatorHostContext,
    runtime: SimulatorRuntimeContext,
    request_id: u64,
    site_url: String,
) {
    if !host.capabilities().manifest_discovery.is_available() {
        runtime.dispatch_action(SimulatorAction::LookupResolved {
            request_id,
            outcome: Err(format!(
                "manifest discovery is unavailable on the {} host",
                host.host_strategy_name()
            )),
        });
        return;
    }

    spawn_local(async move {
        let outcome = host.discovery_service().find_manifest(&site_url).await;
        if let Err(err) = &outcome {
            logging::warn!(
                "manifest lookup via {} host failed for `{site_url}`: {err}",
                host.host_strategy_name()
            );
        }
        runtime.dispatch_action(SimulatorAction::LookupResolved {
            request_id,
            outcome,
        });
    });
}
