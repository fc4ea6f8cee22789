use leptos::*;
use manifest_contract::Display;
use system_ui::prelude::*;

use super::{stop_mouse_event, widget_visibility};
use crate::{reducer::SimulatorAction, runtime_context::use_simulator_runtime};

/// Window chrome drawn around the app for a manifest display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppChrome {
    /// Title bar with the app name and window controls.
    pub title_bar: bool,
    /// Back and refresh buttons.
    pub navigation_buttons: bool,
    /// Browser address bar showing the site URL.
    pub address_bar: bool,
    /// A way to close the window; floats over the app when there is no title bar.
    pub close_control: bool,
}

impl AppChrome {
    /// Chrome for `display`.
    pub const fn for_display(display: Display) -> Self {
        match display {
            Display::Fullscreen => Self {
                title_bar: false,
                navigation_buttons: false,
                address_bar: false,
                close_control: true,
            },
            Display::Standalone => Self {
                title_bar: true,
                navigation_buttons: false,
                address_bar: false,
                close_control: true,
            },
            Display::MinimalUi => Self {
                title_bar: true,
                navigation_buttons: true,
                address_bar: false,
                close_control: true,
            },
            Display::Browser => Self {
                title_bar: true,
                navigation_buttons: true,
                address_bar: true,
                close_control: true,
            },
        }
    }
}

#[component]
/// Simulated app window styled from the manifest colors and display mode.
pub fn AppWindow() -> impl IntoView {
    let runtime = use_simulator_runtime();
    let state = runtime.state;
    let manifest = create_memo(move |_| state.with(|state| state.manifest_view()));
    let visibility = Signal::derive(move || widget_visibility(state.with(|state| state.open.app_window)));
    let display = Signal::derive(move || manifest.with(|manifest| manifest.display_mode()));
    let chrome = Signal::derive(move || AppChrome::for_display(display.get()));
    let site_url = Signal::derive(move || state.with(|state| state.site_url.clone().unwrap_or_default()));
    let icon_url = Signal::derive(move || state.with(|state| state.icon_url.clone()));

    let title_style = move || {
        manifest.with(|manifest| {
            manifest
                .theme_color
                .as_deref()
                .map(|color| format!("background-color:{color};"))
                .unwrap_or_default()
        })
    };
    let body_style = move || {
        manifest.with(|manifest| {
            manifest
                .background_color
                .as_deref()
                .map(|color| format!("background-color:{color};"))
                .unwrap_or_default()
        })
    };
    let close = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(SimulatorAction::CloseAppWindow);
    });
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && visibility.get_untracked().is_open() {
            ev.stop_propagation();
            runtime.dispatch_action(SimulatorAction::CloseAppWindow);
        }
    };

    view! {
        <section
            class=move || visibility.get().class("app-window")
            aria-hidden=move || visibility.get().aria_hidden()
            aria-label="App window"
            data-display=move || display.get().token()
            tabindex="-1"
            on:click=move |ev: web_sys::MouseEvent| stop_mouse_event(&ev)
            on:keydown=on_keydown
        >
            <Show when=move || chrome.get().title_bar fallback=|| ()>
                <header class="app-window-titlebar" style=title_style>
                    <Show when=move || chrome.get().navigation_buttons fallback=|| ()>
                        <span class="app-window-nav" aria-hidden="true">
                            <span class="app-window-back">"←"</span>
                            <span class="app-window-refresh">"⟳"</span>
                        </span>
                    </Show>
                    {move || {
                        icon_url
                            .get()
                            .map(|src| view! { <img class="app-window-icon" src=src alt="" /> })
                    }}
                    <Text role=TextRole::Label layout_class="app-window-title">
                        {move || manifest.with(|manifest| manifest.app_name().to_string())}
                    </Text>
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        layout_class="app-window-close"
                        aria_label="Close app window"
                        on_click=close
                    >
                        "×"
                    </Button>
                </header>
            </Show>
            <Show
                when=move || {
                    let chrome = chrome.get();
                    chrome.close_control && !chrome.title_bar
                }
                fallback=|| ()
            >
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    layout_class="app-window-floating-close"
                    aria_label="Close app window"
                    on_click=close
                >
                    "×"
                </Button>
            </Show>
            <Show when=move || chrome.get().address_bar fallback=|| ()>
                <div class="app-window-address-bar">
                    <Text role=TextRole::Code>{move || site_url.get()}</Text>
                </div>
            </Show>
            <div class="app-window-body" style=body_style></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fullscreen_has_no_chrome() {
        assert_eq!(
            AppChrome::for_display(Display::Fullscreen),
            AppChrome {
                title_bar: false,
                navigation_buttons: false,
                address_bar: false,
                close_control: true,
            }
        );
    }

    #[test]
    fn every_display_mode_can_close_the_window() {
        for display in [
            Display::Fullscreen,
            Display::Standalone,
            Display::MinimalUi,
            Display::Browser,
        ] {
            assert!(AppChrome::for_display(display).close_control, "{display:?}");
        }
    }

    #[test]
    fn chrome_grows_from_standalone_to_browser() {
        let standalone = AppChrome::for_display(Display::Standalone);
        let minimal = AppChrome::for_display(Display::MinimalUi);
        let browser = AppChrome::for_display(Display::Browser);

        assert!(standalone.title_bar && !standalone.navigation_buttons);
        assert!(minimal.navigation_buttons && !minimal.address_bar);
        assert!(browser.address_bar);
    }
}
