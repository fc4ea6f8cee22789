//! Reducer actions, side-effect intents, and transition logic for the simulator runtime.

mod explanation;

use code_editor::EditorSync;
use manifest_contract::{
    default_manifest_document, derive_site_url, sanitize_site_url, ConfigError, ExplanationKind,
    ManifestDocument, SimulatorConfig,
};
use platform_host::ManifestDiscoveryResponse;
use thiserror::Error;

use self::explanation::{advance_explanation, show_explanation};
use crate::model::{
    EditorOutcome, ExplanationStep, SimulatorSettings, SimulatorState, LOOKUP_FALLBACK_ERROR,
};

/// Secondary button bit of `MouseEvent.buttons`.
const SECONDARY_BUTTON_ONLY: u16 = 2;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_simulator`] to mutate [`SimulatorState`].
pub enum SimulatorAction {
    /// Open the app window; closes the jump list and start menu.
    OpenAppWindow,
    /// Close the app window.
    CloseAppWindow,
    /// Open the start menu; closes the jump list.
    OpenStartMenu,
    /// Close the start menu.
    CloseStartMenu,
    /// Start-menu toggler: close when open, open otherwise.
    ToggleStartMenu,
    /// Activate the app tile in the start menu.
    LaunchFromStartMenu,
    /// Open the taskbar jump list without closing anything else.
    OpenJumpList,
    /// Close the jump list.
    CloseJumpList,
    /// Open the store listing; closes the jump list.
    OpenStore,
    /// Close the store listing.
    CloseStore,
    /// Pointer press on the taskbar app icon.
    TaskbarPress {
        /// `MouseEvent.buttons` at the moment of the press.
        buttons: u16,
    },
    /// Click on the desktop background; closes the jump list and start menu.
    BackdropClick,
    /// Debounced editor change carrying the full document text.
    EditorChanged {
        /// Flat editor text.
        text: String,
    },
    /// The editor status hide timer fired.
    EditorStatusElapsed {
        /// Status generation the timer was scheduled for.
        generation: u64,
    },
    /// An explanation sequence timer fired.
    ExplanationElapsed {
        /// Sequence generation the timer was scheduled for.
        generation: u64,
        /// Step to run.
        step: ExplanationStep,
    },
    /// The site URL input changed.
    SiteInputChanged {
        /// Raw input text.
        text: String,
    },
    /// The site URL form was submitted.
    SubmitSiteUrl,
    /// A manifest lookup finished.
    LookupResolved {
        /// Request id issued with [`RuntimeEffect::LookupManifest`].
        request_id: u64,
        /// Service outcome; `Err` is a network or decoding failure.
        outcome: Result<ManifestDiscoveryResponse, String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_simulator`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Replace the pending explanation timer.
    ScheduleExplanationStep {
        /// Sequence generation.
        generation: u64,
        /// Step to run when the timer fires.
        step: ExplanationStep,
        /// Delay before the step.
        delay_ms: u32,
    },
    /// Replace the pending editor status hide timer.
    ScheduleEditorStatusHide {
        /// Status generation.
        generation: u64,
        /// Delay before hiding.
        delay_ms: u32,
    },
    /// Push authoritative text into the editor.
    SyncEditor(EditorSync),
    /// Ask the discovery service for the manifest of `site_url`.
    LookupManifest {
        /// Monotonic request id.
        request_id: u64,
        /// Sanitized site URL.
        site_url: String,
    },
    /// Move focus back to the site URL input.
    FocusSiteInput,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not apply to the current state.
pub enum ReducerError {
    /// Desktop and editor actions need a known manifest.
    #[error("no manifest is loaded")]
    ManifestUnknown,
    /// A lookup response arrived after a newer request was issued.
    #[error("discarded stale manifest lookup response {request_id} (latest is {latest})")]
    StaleLookup {
        /// Id of the discarded response.
        request_id: u64,
        /// Id of the newest issued request.
        latest: u64,
    },
}

/// Result of [`SimulatorState::bootstrap`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    /// Initial state.
    pub state: SimulatorState,
    /// Effects to run once the runtime is mounted.
    pub effects: Vec<RuntimeEffect>,
    /// Configuration problems that fell back to defaults.
    pub errors: Vec<ConfigError>,
}

impl SimulatorState {
    /// Builds the initial state from construction-time options.
    ///
    /// A configured manifest is adopted as-is. With only a site URL (or manifest URL) the
    /// built-in template is adopted so the editor has something to edit. With neither, the
    /// manifest stays unknown and the site URL form is shown.
    pub fn bootstrap(config: &SimulatorConfig) -> Bootstrap {
        let mut state = SimulatorState::new(SimulatorSettings::from(config));
        let mut effects = Vec::new();
        let mut errors = Vec::new();

        state.manifest_url = non_empty(config.manifest_url.as_deref());
        state.site_url = non_empty(config.site_url.as_deref()).or_else(|| {
            state
                .manifest_url
                .as_deref()
                .map(derive_site_url)
                .filter(|url| !url.is_empty())
        });
        state.form.input = state.site_url.clone().unwrap_or_default();

        let configured = config
            .manifest
            .clone()
            .and_then(|source| match source.into_document() {
                Ok(document) => Some(document),
                Err(err) => {
                    errors.push(err);
                    None
                }
            });
        let has_location = state.site_url.is_some() || state.manifest_url.is_some();
        let initial = configured.or_else(|| has_location.then(default_manifest_document));

        if let Some(document) = initial {
            adopt_manifest(&mut state, document, &mut effects);
        }

        Bootstrap {
            state,
            effects,
            errors,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Applies a [`SimulatorAction`] to the simulator state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::ManifestUnknown`] for desktop or editor actions before a manifest is
/// known, and [`ReducerError::StaleLookup`] for lookup responses superseded by a newer request.
pub fn reduce_simulator(
    state: &mut SimulatorState,
    action: SimulatorAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        SimulatorAction::OpenAppWindow | SimulatorAction::LaunchFromStartMenu => {
            require_manifest(state)?;
            open_app_window(state, &mut effects);
        }
        SimulatorAction::CloseAppWindow => state.open.app_window = false,
        SimulatorAction::OpenStartMenu => {
            require_manifest(state)?;
            open_start_menu(state, &mut effects);
        }
        SimulatorAction::CloseStartMenu => state.open.start_menu = false,
        SimulatorAction::ToggleStartMenu => {
            if state.open.start_menu {
                state.open.start_menu = false;
            } else {
                require_manifest(state)?;
                open_start_menu(state, &mut effects);
            }
        }
        SimulatorAction::OpenJumpList => {
            require_manifest(state)?;
            open_jump_list(state, &mut effects);
        }
        SimulatorAction::CloseJumpList => state.open.jump_list = false,
        SimulatorAction::OpenStore => {
            require_manifest(state)?;
            show_explanation(state, ExplanationKind::Store, &mut effects);
            state.open.store_window = true;
            state.open.jump_list = false;
        }
        SimulatorAction::CloseStore => state.open.store_window = false,
        SimulatorAction::TaskbarPress { buttons } => {
            require_manifest(state)?;
            if buttons == SECONDARY_BUTTON_ONLY {
                open_jump_list(state, &mut effects);
            } else {
                open_app_window(state, &mut effects);
            }
        }
        SimulatorAction::BackdropClick => {
            state.open.jump_list = false;
            state.open.start_menu = false;
        }
        SimulatorAction::EditorChanged { text } => {
            require_manifest(state)?;
            let outcome = match ManifestDocument::parse(&text) {
                Ok(document) => {
                    adopt_manifest(state, document, &mut effects);
                    state.editor.invalid_json = false;
                    EditorOutcome::Applied
                }
                Err(_) => {
                    state.editor.invalid_json = true;
                    EditorOutcome::Rejected
                }
            };
            state.editor.outcome = Some(outcome);
            state.editor.generation = state.editor.generation.wrapping_add(1);
            state.open.editor_status = true;
            effects.push(RuntimeEffect::ScheduleEditorStatusHide {
                generation: state.editor.generation,
                delay_ms: state.settings.editor_status_display_ms,
            });
        }
        SimulatorAction::EditorStatusElapsed { generation } => {
            if generation == state.editor.generation {
                state.open.editor_status = false;
            }
        }
        SimulatorAction::ExplanationElapsed { generation, step } => {
            advance_explanation(state, generation, step, &mut effects);
        }
        SimulatorAction::SiteInputChanged { text } => {
            state.form.input = text;
            state.form.error = None;
        }
        SimulatorAction::SubmitSiteUrl => submit_site_url(state, &mut effects),
        SimulatorAction::LookupResolved {
            request_id,
            outcome,
        } => {
            if request_id != state.lookup.last_issued {
                return Err(ReducerError::StaleLookup {
                    request_id,
                    latest: state.lookup.last_issued,
                });
            }
            state.form.loading = false;
            apply_lookup_outcome(state, outcome, &mut effects);
        }
    }
    Ok(effects)
}

fn require_manifest(state: &SimulatorState) -> Result<(), ReducerError> {
    if state.is_manifest_known() {
        Ok(())
    } else {
        Err(ReducerError::ManifestUnknown)
    }
}

fn open_app_window(state: &mut SimulatorState, effects: &mut Vec<RuntimeEffect>) {
    show_explanation(state, ExplanationKind::AppWindow, effects);
    state.open.app_window = true;
    state.open.jump_list = false;
    state.open.start_menu = false;
}

fn open_start_menu(state: &mut SimulatorState, effects: &mut Vec<RuntimeEffect>) {
    show_explanation(state, ExplanationKind::StartMenu, effects);
    state.open.start_menu = true;
    state.open.jump_list = false;
}

fn open_jump_list(state: &mut SimulatorState, effects: &mut Vec<RuntimeEffect>) {
    show_explanation(state, ExplanationKind::JumpList, effects);
    state.open.jump_list = true;
}

/// Replaces the manifest wholesale. The unknown-to-known edge also resolves the preview icon
/// and starts the initial explanation.
fn adopt_manifest(
    state: &mut SimulatorState,
    document: ManifestDocument,
    effects: &mut Vec<RuntimeEffect>,
) {
    let arriving = state.manifest.is_none();
    state.manifest = Some(document);
    if arriving {
        state.icon_url = state.resolve_best_icon();
        show_explanation(state, ExplanationKind::Initial, effects);
    }
}

fn submit_site_url(state: &mut SimulatorState, effects: &mut Vec<RuntimeEffect>) {
    let site_url = match sanitize_site_url(state.form.input.trim()) {
        Ok(site_url) if !site_url.is_empty() => site_url,
        Ok(_) => {
            effects.push(RuntimeEffect::FocusSiteInput);
            return;
        }
        Err(err) => {
            state.form.error = Some(err.to_string());
            effects.push(RuntimeEffect::FocusSiteInput);
            return;
        }
    };

    let request_id = state.lookup.last_issued.wrapping_add(1);
    state.lookup.last_issued = request_id;
    state.form.error = None;
    state.form.loading = true;
    state.site_url = Some(site_url.clone());
    effects.push(RuntimeEffect::LookupManifest {
        request_id,
        site_url,
    });
}

fn apply_lookup_outcome(
    state: &mut SimulatorState,
    outcome: Result<ManifestDiscoveryResponse, String>,
    effects: &mut Vec<RuntimeEffect>,
) {
    let response = match outcome {
        Ok(response) => response,
        Err(_) => {
            state.form.error = Some(LOOKUP_FALLBACK_ERROR.to_string());
            effects.push(RuntimeEffect::FocusSiteInput);
            return;
        }
    };

    if let Some(error) = response.error {
        state.form.error = Some(error);
        effects.push(RuntimeEffect::FocusSiteInput);
        return;
    }

    let Some(manifest) = response.manifest else {
        state.form.error = Some(LOOKUP_FALLBACK_ERROR.to_string());
        effects.push(RuntimeEffect::FocusSiteInput);
        return;
    };

    if let Some(manifest_url) = non_empty(response.manifest_url.as_deref()) {
        state.manifest_url = Some(manifest_url);
    }
    state.form.error = None;
    adopt_manifest(state, ManifestDocument::from_value(manifest), effects);
    state.editor_revision = state.editor_revision.wrapping_add(1);
    effects.push(RuntimeEffect::SyncEditor(EditorSync {
        revision: state.editor_revision,
        text: state.manifest_text(),
    }));
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use manifest_contract::{ManifestSource, DEFAULT_INVALID_JSON_MESSAGE};
    use platform_host::{ManifestDiscoveryService, MemoryManifestDiscoveryService};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{ExplanationPhase, OpenFlags};

    fn loaded_state() -> SimulatorState {
        let config = SimulatorConfig {
            manifest: Some(ManifestSource::Object(json!({
                "name": "Foo",
                "icons": [{ "src": "/icon.png", "sizes": "512x512" }]
            }))),
            manifest_url: Some("https://foo.dev/manifest.json".to_string()),
            safe_url_endpoint: None,
            ..SimulatorConfig::default()
        };
        SimulatorState::bootstrap(&config).state
    }

    fn reduce(state: &mut SimulatorState, action: SimulatorAction) -> Vec<RuntimeEffect> {
        reduce_simulator(state, action).expect("action applies")
    }

    #[test]
    fn bootstrap_without_manifest_or_site_shows_form() {
        let bootstrap = SimulatorState::bootstrap(&SimulatorConfig::default());
        assert!(!bootstrap.state.is_manifest_known());
        assert!(bootstrap.effects.is_empty());
        assert!(bootstrap.errors.is_empty());
    }

    #[test]
    fn bootstrap_with_site_url_seeds_template_and_starts_initial_explanation() {
        let config = SimulatorConfig {
            site_url: Some("example.com".to_string()),
            safe_url_endpoint: None,
            ..SimulatorConfig::default()
        };
        let bootstrap = SimulatorState::bootstrap(&config);

        assert_eq!(
            bootstrap.state.manifest_view().name.as_deref(),
            Some("PWA Starter")
        );
        assert_eq!(
            bootstrap.state.icon_url.as_deref(),
            Some("https://www.pwabuilder.com/assets/icons/icon_512.png")
        );
        assert_eq!(
            bootstrap.state.explanation.pending.as_deref(),
            Some("Do you see something familiar on the taskbar?")
        );
        assert_eq!(bootstrap.effects.len(), 1);
    }

    #[test]
    fn bootstrap_derives_site_url_from_manifest_location() {
        let state = loaded_state();
        assert_eq!(state.site_url.as_deref(), Some("https://foo.dev/"));
        assert_eq!(state.icon_url.as_deref(), Some("https://foo.dev/icon.png"));
    }

    #[test]
    fn bootstrap_reports_invalid_manifest_text_and_falls_back() {
        let config = SimulatorConfig {
            manifest: Some(ManifestSource::Text("{\"name\":".to_string())),
            ..SimulatorConfig::default()
        };
        let bootstrap = SimulatorState::bootstrap(&config);
        assert!(!bootstrap.state.is_manifest_known());
        assert!(matches!(
            bootstrap.errors.as_slice(),
            [ConfigError::InvalidManifestJson(_)]
        ));
    }

    #[test]
    fn opening_app_window_always_closes_jump_list_and_start_menu() {
        for (jump_list, start_menu, store_window) in [
            (false, false, false),
            (true, false, true),
            (false, true, false),
            (true, true, true),
        ] {
            let mut state = loaded_state();
            state.open = OpenFlags {
                jump_list,
                start_menu,
                store_window,
                ..OpenFlags::default()
            };
            reduce(&mut state, SimulatorAction::OpenAppWindow);
            assert!(state.open.app_window);
            assert!(!state.open.jump_list);
            assert!(!state.open.start_menu);
            assert_eq!(state.open.store_window, store_window);
        }
    }

    #[test]
    fn start_menu_closes_jump_list_but_not_app_window() {
        let mut state = loaded_state();
        state.open.app_window = true;
        state.open.jump_list = true;

        reduce(&mut state, SimulatorAction::OpenStartMenu);
        assert!(state.open.start_menu);
        assert!(!state.open.jump_list);
        assert!(state.open.app_window);
    }

    #[test]
    fn toggler_closes_open_start_menu() {
        let mut state = loaded_state();
        reduce(&mut state, SimulatorAction::ToggleStartMenu);
        assert!(state.open.start_menu);
        let generation = state.explanation.generation;

        let effects = reduce(&mut state, SimulatorAction::ToggleStartMenu);
        assert!(!state.open.start_menu);
        assert!(effects.is_empty());
        assert_eq!(state.explanation.generation, generation);
    }

    #[test]
    fn store_closes_jump_list_and_jump_list_closes_nothing() {
        let mut state = loaded_state();
        state.open.start_menu = true;
        state.open.app_window = true;

        reduce(&mut state, SimulatorAction::OpenJumpList);
        assert_eq!(
            state.open,
            OpenFlags {
                app_window: true,
                start_menu: true,
                jump_list: true,
                ..OpenFlags::default()
            }
        );

        reduce(&mut state, SimulatorAction::OpenStore);
        assert!(state.open.store_window);
        assert!(!state.open.jump_list);
        assert!(state.open.start_menu);
    }

    #[test]
    fn backdrop_click_closes_menus_only() {
        let mut state = loaded_state();
        state.open = OpenFlags {
            app_window: true,
            start_menu: true,
            jump_list: true,
            store_window: true,
            editor_status: false,
        };
        reduce(&mut state, SimulatorAction::BackdropClick);
        assert!(!state.open.start_menu);
        assert!(!state.open.jump_list);
        assert!(state.open.app_window);
        assert!(state.open.store_window);
    }

    #[test]
    fn taskbar_press_distinguishes_secondary_button() {
        let mut state = loaded_state();
        reduce(&mut state, SimulatorAction::TaskbarPress { buttons: 2 });
        assert!(state.open.jump_list);
        assert!(!state.open.app_window);

        state.open.start_menu = true;
        reduce(&mut state, SimulatorAction::TaskbarPress { buttons: 1 });
        assert!(state.open.app_window);
        assert!(!state.open.jump_list);
        assert!(!state.open.start_menu);
    }

    #[test]
    fn launching_from_start_menu_opens_app_and_closes_menu() {
        let mut state = loaded_state();
        reduce(&mut state, SimulatorAction::OpenStartMenu);
        reduce(&mut state, SimulatorAction::LaunchFromStartMenu);
        assert!(state.open.app_window);
        assert!(!state.open.start_menu);
    }

    #[test]
    fn every_open_action_requests_its_explanation() {
        let mut state = loaded_state();
        for (action, kind) in [
            (SimulatorAction::OpenAppWindow, ExplanationKind::AppWindow),
            (SimulatorAction::OpenStartMenu, ExplanationKind::StartMenu),
            (SimulatorAction::OpenJumpList, ExplanationKind::JumpList),
            (SimulatorAction::OpenStore, ExplanationKind::Store),
        ] {
            let effects = reduce(&mut state, action);
            assert_eq!(
                state.explanation.pending.as_deref(),
                Some(state.settings.explanations.text(kind))
            );
            assert!(matches!(
                effects.as_slice(),
                [RuntimeEffect::ScheduleExplanationStep {
                    step: ExplanationStep::Swap,
                    ..
                }]
            ));
        }
    }

    #[test]
    fn widget_actions_need_a_known_manifest() {
        let mut state = SimulatorState::default();
        assert_eq!(
            reduce_simulator(&mut state, SimulatorAction::OpenAppWindow),
            Err(ReducerError::ManifestUnknown)
        );
        assert_eq!(
            reduce_simulator(
                &mut state,
                SimulatorAction::EditorChanged {
                    text: "{}".to_string()
                }
            ),
            Err(ReducerError::ManifestUnknown)
        );
    }

    #[test]
    fn valid_edit_replaces_manifest_wholesale() {
        let mut state = loaded_state();
        let icon_before = state.icon_url.clone();
        let text = r#"{"name": "Bar", "display": "browser", "extra": [1, 2]}"#;

        let effects = reduce(
            &mut state,
            SimulatorAction::EditorChanged {
                text: text.to_string(),
            },
        );

        assert_eq!(
            state.manifest.as_ref().map(ManifestDocument::value),
            Some(&serde_json::from_str::<serde_json::Value>(text).expect("json"))
        );
        assert!(!state.editor.invalid_json);
        assert_eq!(state.editor_status_message(), "Changes applied.");
        assert_eq!(state.invalid_json_message(), "");
        assert_eq!(state.icon_url, icon_before);
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleEditorStatusHide {
                generation: 1,
                delay_ms: 3_000,
            }]
        );
    }

    #[test]
    fn truncated_edit_keeps_previous_manifest() {
        let mut state = loaded_state();
        let before = state.manifest.clone();

        reduce(
            &mut state,
            SimulatorAction::EditorChanged {
                text: r#"{"name": "Foo""#.to_string(),
            },
        );

        assert_eq!(state.manifest, before);
        assert!(state.editor.invalid_json);
        assert_eq!(state.editor_status_message(), "Changes could not be applied.");
        assert_eq!(state.invalid_json_message(), DEFAULT_INVALID_JSON_MESSAGE);

        reduce(
            &mut state,
            SimulatorAction::EditorChanged {
                text: r#"{"name": "Foo"}"#.to_string(),
            },
        );
        assert!(!state.editor.invalid_json);
    }

    #[test]
    fn stale_status_timer_does_not_hide_newer_status() {
        let mut state = loaded_state();
        for _ in 0..2 {
            reduce(
                &mut state,
                SimulatorAction::EditorChanged {
                    text: "{}".to_string(),
                },
            );
        }

        reduce(&mut state, SimulatorAction::EditorStatusElapsed { generation: 1 });
        assert!(state.open.editor_status);
        reduce(&mut state, SimulatorAction::EditorStatusElapsed { generation: 2 });
        assert!(!state.open.editor_status);
    }

    #[test]
    fn explanation_timers_drive_the_visible_message() {
        let mut state = loaded_state();
        let generation = state.explanation.generation;
        reduce(
            &mut state,
            SimulatorAction::ExplanationElapsed {
                generation,
                step: ExplanationStep::Swap,
            },
        );
        assert_eq!(
            state.explanation.message,
            "Do you see something familiar on the taskbar?"
        );
        assert_eq!(state.explanation.phase, ExplanationPhase::ShowingNew);
    }

    #[test]
    fn invalid_site_url_is_rejected_and_input_refocused() {
        let mut state = SimulatorState::default();
        reduce(
            &mut state,
            SimulatorAction::SiteInputChanged {
                text: "not a url".to_string(),
            },
        );
        let effects = reduce(&mut state, SimulatorAction::SubmitSiteUrl);

        assert_eq!(effects, vec![RuntimeEffect::FocusSiteInput]);
        assert_eq!(
            state.form.error.as_deref(),
            Some("You have a bad https certificate or the url is incorrect.")
        );
        assert_eq!(state.lookup.last_issued, 0);
    }

    #[test]
    fn submission_issues_exactly_one_lookup() {
        let mut state = SimulatorState::default();
        reduce(
            &mut state,
            SimulatorAction::SiteInputChanged {
                text: "example.com".to_string(),
            },
        );
        let effects = reduce(&mut state, SimulatorAction::SubmitSiteUrl);

        assert_eq!(
            effects,
            vec![RuntimeEffect::LookupManifest {
                request_id: 1,
                site_url: "https://example.com".to_string(),
            }]
        );
        assert!(state.form.loading);
    }

    #[test]
    fn site_input_is_trimmed_before_submission() {
        let mut state = SimulatorState::default();
        state.form.input = "   ".to_string();
        let effects = reduce(&mut state, SimulatorAction::SubmitSiteUrl);
        assert_eq!(effects, vec![RuntimeEffect::FocusSiteInput]);
        assert_eq!(state.lookup.last_issued, 0);
        assert!(!state.form.loading);

        state.form.input = "  example.com \n".to_string();
        let effects = reduce(&mut state, SimulatorAction::SubmitSiteUrl);
        assert_eq!(
            effects,
            vec![RuntimeEffect::LookupManifest {
                request_id: 1,
                site_url: "https://example.com".to_string(),
            }]
        );
    }

    #[test]
    fn successful_lookup_adopts_manifest_and_resyncs_editor() {
        let mut state = SimulatorState::default();
        state.settings.safe_url_endpoint = None;
        state.form.input = "example.com".to_string();
        reduce(&mut state, SimulatorAction::SubmitSiteUrl);

        let effects = reduce(
            &mut state,
            SimulatorAction::LookupResolved {
                request_id: 1,
                outcome: Ok(ManifestDiscoveryResponse::found(
                    json!({ "name": "Found", "icons": [{ "src": "a.png" }] }),
                    Some("https://example.com/app/manifest.json".to_string()),
                )),
            },
        );

        assert!(state.is_manifest_known());
        assert!(!state.form.loading);
        assert_eq!(
            state.icon_url.as_deref(),
            Some("https://example.com/app/a.png")
        );
        assert!(matches!(
            effects.as_slice(),
            [
                RuntimeEffect::ScheduleExplanationStep { .. },
                RuntimeEffect::SyncEditor(EditorSync { revision: 1, .. })
            ]
        ));
    }

    #[test]
    fn service_error_is_surfaced_and_input_refocused() {
        let mut state = SimulatorState::default();
        state.form.input = "example.com".to_string();
        reduce(&mut state, SimulatorAction::SubmitSiteUrl);

        let effects = reduce(
            &mut state,
            SimulatorAction::LookupResolved {
                request_id: 1,
                outcome: Ok(ManifestDiscoveryResponse::failed("No manifest found")),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusSiteInput]);
        assert_eq!(state.form.error.as_deref(), Some("No manifest found"));
        assert!(!state.is_manifest_known());
    }

    #[test]
    fn network_failure_shows_fallback_message() {
        let mut state = SimulatorState::default();
        state.form.input = "example.com".to_string();
        reduce(&mut state, SimulatorAction::SubmitSiteUrl);

        reduce(
            &mut state,
            SimulatorAction::LookupResolved {
                request_id: 1,
                outcome: Err("failed to fetch".to_string()),
            },
        );
        assert_eq!(state.form.error.as_deref(), Some(LOOKUP_FALLBACK_ERROR));
    }

    #[test]
    fn stale_lookup_response_is_dropped() {
        let mut state = SimulatorState::default();
        state.form.input = "first.dev".to_string();
        reduce(&mut state, SimulatorAction::SubmitSiteUrl);
        state.form.input = "second.dev".to_string();
        reduce(&mut state, SimulatorAction::SubmitSiteUrl);

        let before = state.clone();
        assert_eq!(
            reduce_simulator(
                &mut state,
                SimulatorAction::LookupResolved {
                    request_id: 1,
                    outcome: Ok(ManifestDiscoveryResponse::found(json!({}), None)),
                },
            ),
            Err(ReducerError::StaleLookup {
                request_id: 1,
                latest: 2
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn lookup_effect_drives_discovery_service_once() {
        let service = MemoryManifestDiscoveryService::default();
        service.insert(
            "https://example.com",
            Ok(ManifestDiscoveryResponse::found(
                json!({ "name": "Remote" }),
                Some("https://example.com/manifest.json".to_string()),
            )),
        );
        let mut state = SimulatorState::default();
        state.form.input = "example.com".to_string();

        for effect in reduce(&mut state, SimulatorAction::SubmitSiteUrl) {
            if let RuntimeEffect::LookupManifest {
                request_id,
                site_url,
            } = effect
            {
                let outcome = block_on(service.find_manifest(&site_url));
                reduce(
                    &mut state,
                    SimulatorAction::LookupResolved {
                        request_id,
                        outcome,
                    },
                );
            }
        }

        assert_eq!(state.manifest_view().app_name(), "Remote");
        assert_eq!(
            state.manifest_url.as_deref(),
            Some("https://example.com/manifest.json")
        );
        assert_eq!(service.requests(), vec!["https://example.com".to_string()]);
    }
}
