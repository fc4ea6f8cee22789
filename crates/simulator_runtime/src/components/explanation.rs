use leptos::*;

use crate::{model::ExplanationPhase, runtime_context::use_simulator_runtime};

fn phase_class(phase: ExplanationPhase) -> &'static str {
    match phase {
        ExplanationPhase::Idle => "explanation",
        ExplanationPhase::FadingOutOld => "explanation fade-out",
        ExplanationPhase::ShowingNew => "explanation fade-in",
    }
}

#[component]
/// Helper text under the desktop; the text stays in the DOM while faded out.
pub fn ExplanationText() -> impl IntoView {
    let runtime = use_simulator_runtime();
    let explanation = create_memo(move |_| runtime.state.with(|state| state.explanation.clone()));

    view! {
        <p
            class=move || explanation.with(|explanation| phase_class(explanation.phase))
            aria-live="polite"
            data-ui-kind="explanation"
        >
            {move || explanation.with(|explanation| explanation.message.clone())}
        </p>
    }
}
