//! Explanation message sequencing.
//!
//! Showing a message fades the current one out, swaps the text after
//! [`EXPLANATION_SWAP_DELAY_MS`], then fades it out again after the configured display time.
//! Every request bumps the generation, so timers belonging to an older sequence are ignored
//! instead of interleaving with the newest one.

use manifest_contract::ExplanationKind;

use super::RuntimeEffect;
use crate::model::{
    ExplanationPhase, ExplanationStep, SimulatorState, EXPLANATION_SWAP_DELAY_MS,
};

pub(super) fn show_explanation(
    state: &mut SimulatorState,
    kind: ExplanationKind,
    effects: &mut Vec<RuntimeEffect>,
) {
    let text = state.settings.explanations.text(kind).to_string();
    let explanation = &mut state.explanation;
    explanation.generation = explanation.generation.wrapping_add(1);
    explanation.phase = ExplanationPhase::FadingOutOld;
    explanation.pending = Some(text);
    effects.push(RuntimeEffect::ScheduleExplanationStep {
        generation: explanation.generation,
        step: ExplanationStep::Swap,
        delay_ms: EXPLANATION_SWAP_DELAY_MS,
    });
}

pub(super) fn advance_explanation(
    state: &mut SimulatorState,
    generation: u64,
    step: ExplanationStep,
    effects: &mut Vec<RuntimeEffect>,
) {
    let display_ms = state.settings.explanation_display_ms;
    let explanation = &mut state.explanation;
    if generation != explanation.generation {
        return;
    }

    match step {
        ExplanationStep::Swap => {
            let Some(text) = explanation.pending.take() else {
                return;
            };
            explanation.message = text;
            explanation.phase = ExplanationPhase::ShowingNew;
            effects.push(RuntimeEffect::ScheduleExplanationStep {
                generation,
                step: ExplanationStep::FadeOut,
                delay_ms: display_ms,
            });
        }
        ExplanationStep::FadeOut => {
            if explanation.phase == ExplanationPhase::ShowingNew {
                explanation.phase = ExplanationPhase::FadingOutOld;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sequence_fades_out_swaps_and_fades_out_again() {
        let mut state = SimulatorState::default();
        state.settings.explanation_display_ms = 1_200;
        let mut effects = Vec::new();

        show_explanation(&mut state, ExplanationKind::StartMenu, &mut effects);
        assert_eq!(state.explanation.phase, ExplanationPhase::FadingOutOld);
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleExplanationStep {
                generation: 1,
                step: ExplanationStep::Swap,
                delay_ms: 400,
            }]
        );

        effects.clear();
        advance_explanation(&mut state, 1, ExplanationStep::Swap, &mut effects);
        assert_eq!(
            state.explanation.message,
            "The application's name and icon are used in the start menu."
        );
        assert!(state.explanation.is_fading_in());
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleExplanationStep {
                generation: 1,
                step: ExplanationStep::FadeOut,
                delay_ms: 1_200,
            }]
        );

        effects.clear();
        advance_explanation(&mut state, 1, ExplanationStep::FadeOut, &mut effects);
        assert!(state.explanation.is_fading_out());
        assert!(effects.is_empty());
    }

    #[test]
    fn newer_request_invalidates_pending_timers() {
        let mut state = SimulatorState::default();
        let mut effects = Vec::new();

        show_explanation(&mut state, ExplanationKind::AppWindow, &mut effects);
        show_explanation(&mut state, ExplanationKind::Store, &mut effects);
        effects.clear();

        advance_explanation(&mut state, 1, ExplanationStep::Swap, &mut effects);
        assert_eq!(state.explanation.message, "");
        assert!(effects.is_empty());

        advance_explanation(&mut state, 2, ExplanationStep::Swap, &mut effects);
        assert_eq!(
            state.explanation.message,
            state.settings.explanations.text(ExplanationKind::Store)
        );

        show_explanation(&mut state, ExplanationKind::JumpList, &mut effects);
        advance_explanation(&mut state, 2, ExplanationStep::FadeOut, &mut effects);
        assert_eq!(state.explanation.phase, ExplanationPhase::FadingOutOld);
        assert_eq!(
            state.explanation.pending.as_deref(),
            Some(state.settings.explanations.text(ExplanationKind::JumpList))
        );
    }
}
