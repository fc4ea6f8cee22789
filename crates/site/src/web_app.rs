use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use manifest_contract::SimulatorConfig;
use platform_host_web::build_host_services;
use simulator_runtime::{PwaSimulator, SimulatorProvider};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="PWA Desktop Simulator" />
        <Meta
            name="description"
            content="Preview how a web app manifest looks once the app is installed on a desktop."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=SimulatorEntry />
                </Routes>
            </main>
        </Router>
    }
}

/// Reads simulator options from the page query (`?site=…&manifest_url=…&hide_editor=1`).
#[component]
pub fn SimulatorEntry() -> impl IntoView {
    let query = use_query_map();
    let (config, errors) = query.with_untracked(|query| {
        SimulatorConfig::from_query_pairs(
            query
                .0
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        )
    });
    for err in &errors {
        logging::warn!("ignoring simulator option: {err}");
    }
    let host_services = build_host_services(&config);

    view! {
        <SimulatorProvider config=config host_services=host_services>
            <PwaSimulator />
        </SimulatorProvider>
    }
}
