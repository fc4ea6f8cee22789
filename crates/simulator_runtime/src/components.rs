//! Simulator UI composition: render-mode switch, site URL form, and the desktop mock.

mod app_window;
mod explanation;
mod widgets;

use code_editor::{CodeEditor, EditorChange};
use leptos::*;
use system_ui::prelude::*;

pub use self::{
    app_window::{AppChrome, AppWindow},
    explanation::ExplanationText,
    widgets::{JumpList, JumpListEntry, StartMenu, StoreListing, StoreWindow},
};

use crate::{
    model::{SimulatorState, SITE_URL_INPUT_ID},
    reducer::SimulatorAction,
    runtime_context::use_simulator_runtime,
};

/// Open/closed presentation of a desktop widget.
///
/// The CSS class and `aria-hidden` are both derived from this one value so they cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetVisibility {
    open: bool,
}

/// Builds the visibility for a widget from its open flag.
pub fn widget_visibility(open: bool) -> WidgetVisibility {
    WidgetVisibility { open }
}

impl WidgetVisibility {
    /// Whether the widget is open.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// `base` plus the `open` transition class while open.
    pub fn class(self, base: &str) -> String {
        if self.open {
            format!("{base} open")
        } else {
            base.to_string()
        }
    }

    /// Value for `aria-hidden`.
    pub fn aria_hidden(self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.stop_propagation();
}

/// A `click` with no preceding presses came from Enter or Space.
fn is_keyboard_activation(click_detail: i32) -> bool {
    click_detail == 0
}

/// Pinned taskbar entry for the app; absent while the manifest has no usable icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarApp {
    /// Display name used for the button label.
    pub name: String,
    /// Resolved app icon.
    pub icon_url: String,
}

impl TaskbarApp {
    /// Taskbar entry for the current manifest.
    pub fn from_state(state: &SimulatorState) -> Option<Self> {
        let icon_url = state.icon_url.clone()?;
        Some(Self {
            name: state.manifest_view().app_name().to_string(),
            icon_url,
        })
    }
}

#[component]
/// Simulator root: the site URL form until a manifest is known, then the desktop mock.
pub fn PwaSimulator() -> impl IntoView {
    let runtime = use_simulator_runtime();
    let manifest_known = create_memo(move |_| runtime.state.with(SimulatorState::is_manifest_known));

    view! {
        <div class="pwa-simulator" data-ui-kind="pwa-simulator">
            <Show when=move || manifest_known.get() fallback=|| view! { <SiteUrlForm /> }>
                <DesktopMock />
            </Show>
        </div>
    }
}

#[component]
/// Site URL entry form shown while no manifest is known.
pub fn SiteUrlForm() -> impl IntoView {
    let runtime = use_simulator_runtime();
    let form = create_memo(move |_| runtime.state.with(|state| state.form.clone()));

    let input = Signal::derive(move || form.with(|form| form.input.clone()));
    let error = Signal::derive(move || form.with(|form| form.error.clone().unwrap_or_default()));
    let loading = Signal::derive(move || form.with(|form| form.loading));

    let on_input = Callback::new(move |ev: web_sys::Event| {
        runtime.dispatch_action(SimulatorAction::SiteInputChanged {
            text: event_target_value(&ev),
        });
    });
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        runtime.dispatch_action(SimulatorAction::SubmitSiteUrl);
    };

    view! {
        <form class="site-url-form" on:submit=on_submit>
            <Heading>"Preview your PWA on a desktop"</Heading>
            <FieldGroup
                title="Site URL"
                description="We'll look up the site's web app manifest."
            >
                <TextField
                    id=SITE_URL_INPUT_ID
                    layout_class="site-url-input"
                    placeholder="https://example.com"
                    aria_label="Site URL"
                    value=input
                    invalid=Signal::derive(move || !error.get().is_empty())
                    disabled=loading
                    on_input=on_input
                />
            </FieldGroup>
            <Button variant=ButtonVariant::Primary button_type="submit" disabled=loading>
                {move || if loading.get() { "Looking up..." } else { "Simulate" }}
            </Button>
            <InlineMessage message=error />
        </form>
    }
}

#[component]
/// Desktop mock with taskbar, widgets, explanation line, and the manifest editor column.
pub fn DesktopMock() -> impl IntoView {
    let runtime = use_simulator_runtime();
    let state = runtime.state;

    let manifest = create_memo(move |_| state.with(SimulatorState::manifest_view));
    let open = create_memo(move |_| state.with(|state| state.open));
    let icon_url = create_memo(move |_| state.with(|state| state.icon_url.clone()));
    let taskbar_app = create_memo(move |_| state.with(TaskbarApp::from_state));
    let app_name = Signal::derive(move || manifest.with(|manifest| manifest.app_name().to_string()));
    let jump_list_entries = create_memo(move |_| state.with(JumpListEntry::from_state));
    let store_listing = create_memo(move |_| state.with(StoreListing::from_state));
    let hide_editor = state.with_untracked(|state| state.settings.hide_editor);

    let on_backdrop = move |_| runtime.dispatch_action(SimulatorAction::BackdropClick);
    let open_store = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(SimulatorAction::OpenStore);
    });
    let toggle_start_menu = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(SimulatorAction::ToggleStartMenu);
    });
    let taskbar_press = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(SimulatorAction::TaskbarPress {
            buttons: ev.buttons(),
        });
    });
    let taskbar_activate = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if is_keyboard_activation(ev.detail()) {
            runtime.dispatch_action(SimulatorAction::TaskbarPress { buttons: 0 });
        }
    });

    view! {
        <div class="simulator-layout">
            <div class="simulator-stage">
                <div class="desktop-mock" on:click=on_backdrop>
                    <div class="desktop-icons">
                        <Button
                            variant=ButtonVariant::Quiet
                            layout_class="desktop-store-icon"
                            aria_label="Store"
                            on_click=open_store
                        >
                            <span class="store-glyph" aria-hidden="true"></span>
                            <Text role=TextRole::Caption>"Store"</Text>
                        </Button>
                    </div>

                    <AppWindow />
                    <StoreWindow
                        open=Signal::derive(move || open.get().store_window)
                        listing=store_listing
                        on_close=Callback::new(move |_| runtime.dispatch_action(SimulatorAction::CloseStore))
                    />
                    <StartMenu
                        open=Signal::derive(move || open.get().start_menu)
                        app_name=app_name
                        icon_url=icon_url
                        on_launch=Callback::new(move |_| {
                            runtime.dispatch_action(SimulatorAction::LaunchFromStartMenu)
                        })
                    />
                    <JumpList
                        open=Signal::derive(move || open.get().jump_list)
                        app_name=app_name
                        icon_url=icon_url
                        entries=jump_list_entries
                    />

                    <div class="taskbar" role="toolbar" aria-label="Taskbar"
                        on:click=move |ev: web_sys::MouseEvent| stop_mouse_event(&ev)
                    >
                        <Button
                            variant=ButtonVariant::Quiet
                            size=ButtonSize::Sm
                            layout_class="taskbar-start-button"
                            aria_label="Start"
                            aria_expanded=Signal::derive(move || open.get().start_menu)
                            on_click=toggle_start_menu
                        >
                            <span class="start-glyph" aria-hidden="true"></span>
                        </Button>
                        {move || {
                            taskbar_app.get().map(|app| {
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        size=ButtonSize::Sm
                                        layout_class="taskbar-app-button"
                                        aria_label=app.name.clone()
                                        title=app.name
                                        pressed=Signal::derive(move || open.get().app_window)
                                        on_click=taskbar_activate
                                        on_mousedown=taskbar_press
                                    >
                                        <img class="taskbar-app-icon" src=app.icon_url alt="" />
                                    </Button>
                                }
                            })
                        }}
                    </div>
                </div>
                <ExplanationText />
            </div>
            {(!hide_editor).then(|| view! { <ManifestEditor /> })}
        </div>
    }
}

#[component]
fn ManifestEditor() -> impl IntoView {
    let runtime = use_simulator_runtime();
    let state = runtime.state;
    let (start_text, debounce_ms) = state.with_untracked(|state| {
        (state.manifest_text(), state.settings.editor_debounce_ms)
    });

    let on_change = Callback::new(move |change: EditorChange| {
        runtime.dispatch_action(SimulatorAction::EditorChanged {
            text: change.document.into_text(),
        });
    });
    let invalid = Signal::derive(move || state.with(|state| state.editor.invalid_json));
    let status = Signal::derive(move || state.with(|state| state.editor_status_message().to_string()));
    let invalid_message =
        Signal::derive(move || state.with(|state| state.invalid_json_message().to_string()));

    view! {
        <section class="simulator-editor" aria-label="Manifest editor">
            <CodeEditor
                start_text=start_text
                sync=Signal::derive(move || runtime.editor_sync.get())
                on_change=on_change
                debounce_ms=debounce_ms
                invalid=invalid
                status=status
                aria_label="Web app manifest JSON"
            />
            <InlineMessage message=invalid_message />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use manifest_contract::{ManifestSource, SimulatorConfig};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn class_and_aria_hidden_move_together() {
        for open in [false, true] {
            let visibility = widget_visibility(open);
            assert_eq!(visibility.class("start-menu").ends_with(" open"), open);
            assert_eq!(visibility.aria_hidden() == "false", open);
        }
    }

    #[test]
    fn taskbar_app_is_hidden_without_an_icon() {
        let mut state = SimulatorState::bootstrap(&SimulatorConfig {
            manifest: Some(ManifestSource::Text(r#"{"name":"X"}"#.to_string())),
            manifest_url: Some("https://x.dev/manifest.json".to_string()),
            safe_url_endpoint: None,
            ..SimulatorConfig::default()
        })
        .state;
        assert!(state.is_manifest_known());
        assert_eq!(state.icon_url, None);
        assert_eq!(TaskbarApp::from_state(&state), None);
        assert_eq!(StoreListing::from_state(&state).icon_url, None);

        state.icon_url = Some("https://x.dev/icon.png".to_string());
        assert_eq!(
            TaskbarApp::from_state(&state),
            Some(TaskbarApp {
                name: "X".to_string(),
                icon_url: "https://x.dev/icon.png".to_string(),
            })
        );
    }

    #[test]
    fn only_detail_free_clicks_count_as_keyboard_activation() {
        assert!(is_keyboard_activation(0));
        assert!(!is_keyboard_activation(1));
        assert!(!is_keyboard_activation(2));
    }

    #[test]
    fn closed_widget_keeps_base_class_only() {
        assert_eq!(widget_visibility(false).class("jump-list"), "jump-list");
        assert_eq!(widget_visibility(true).class("jump-list"), "jump-list open");
    }
}
