use leptos::*;
use system_ui::prelude::*;

use super::{stop_mouse_event, widget_visibility};
use crate::model::{SimulatorState, STORE_SCREENSHOT_LIMIT};

/// Jump-list row built from a manifest shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpListEntry {
    /// Shortcut name.
    pub name: String,
    /// Resolved first icon of the shortcut.
    pub icon_url: Option<String>,
}

impl JumpListEntry {
    /// Entries for every shortcut of the current manifest, in manifest order.
    pub fn from_state(state: &SimulatorState) -> Vec<Self> {
        state
            .manifest_view()
            .shortcut_entries()
            .iter()
            .map(|shortcut| Self {
                name: shortcut.name.clone(),
                icon_url: shortcut
                    .first_icon()
                    .and_then(|icon| state.resolve_image(&icon.src)),
            })
            .collect()
    }
}

/// Read-only fields shown by the store listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreListing {
    /// `name`, else `short_name`, else the default app name.
    pub name: String,
    /// Description or the default blurb.
    pub description: String,
    /// Preview icon resolved when the manifest arrived.
    pub icon_url: Option<String>,
    /// Resolved screenshots, never more than [`STORE_SCREENSHOT_LIMIT`].
    pub screenshots: Vec<String>,
    /// Category chips.
    pub categories: Vec<String>,
}

impl StoreListing {
    /// Builds the listing for the current manifest.
    pub fn from_state(state: &SimulatorState) -> Self {
        let manifest = state.manifest_view();
        Self {
            name: manifest.store_name().to_string(),
            description: manifest.store_description().to_string(),
            icon_url: state.icon_url.clone(),
            screenshots: manifest
                .screenshot_entries(STORE_SCREENSHOT_LIMIT)
                .iter()
                .filter_map(|shot| state.resolve_image(&shot.src))
                .collect(),
            categories: manifest.category_entries().to_vec(),
        }
    }
}

#[component]
/// Start menu with the app tile.
pub fn StartMenu(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] app_name: Signal<String>,
    #[prop(into)] icon_url: Signal<Option<String>>,
    on_launch: Callback<()>,
) -> impl IntoView {
    let visibility = Signal::derive(move || widget_visibility(open.get()));

    view! {
        <div
            class=move || visibility.get().class("start-menu")
            aria-hidden=move || visibility.get().aria_hidden()
            role="menu"
            aria-label="Start menu"
            on:click=move |ev: web_sys::MouseEvent| stop_mouse_event(&ev)
        >
            <Text role=TextRole::Label layout_class="start-menu-heading">"Pinned"</Text>
            <Button
                variant=ButtonVariant::Quiet
                layout_class="start-menu-tile"
                aria_label=app_name
                on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    on_launch.call(());
                })
            >
                {move || {
                    icon_url
                        .get()
                        .map(|src| view! { <img class="start-menu-tile-icon" src=src alt="" /> })
                }}
                <Text role=TextRole::Caption>{move || app_name.get()}</Text>
            </Button>
        </div>
    }
}

#[component]
/// Taskbar jump list: one row per shortcut, then the app name.
pub fn JumpList(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] app_name: Signal<String>,
    #[prop(into)] icon_url: Signal<Option<String>>,
    #[prop(into)] entries: Signal<Vec<JumpListEntry>>,
) -> impl IntoView {
    let visibility = Signal::derive(move || widget_visibility(open.get()));

    view! {
        <div
            class=move || visibility.get().class("jump-list")
            aria-hidden=move || visibility.get().aria_hidden()
            role="menu"
            aria-label="Jump list"
            on:click=move |ev: web_sys::MouseEvent| stop_mouse_event(&ev)
        >
            <Show when=move || !entries.with(Vec::is_empty) fallback=|| ()>
                <Text role=TextRole::Label layout_class="jump-list-heading">"Tasks"</Text>
                <ul class="jump-list-tasks">
                    <For
                        each=move || entries.get().into_iter().enumerate()
                        key=|(index, entry)| (*index, entry.name.clone())
                        let:item
                    >
                        <li class="jump-list-task" role="menuitem">
                            {item
                                .1
                                .icon_url
                                .clone()
                                .map(|src| view! { <img class="jump-list-task-icon" src=src alt="" /> })}
                            <Text>{item.1.name.clone()}</Text>
                        </li>
                    </For>
                </ul>
            </Show>
            <div class="jump-list-app" role="menuitem">
                {move || {
                    icon_url
                        .get()
                        .map(|src| view! { <img class="jump-list-app-icon" src=src alt="" /> })
                }}
                <Text>{move || app_name.get()}</Text>
            </div>
        </div>
    }
}

#[component]
/// Store listing window.
pub fn StoreWindow(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] listing: Signal<StoreListing>,
    on_close: Callback<()>,
) -> impl IntoView {
    let visibility = Signal::derive(move || widget_visibility(open.get()));

    view! {
        <section
            class=move || visibility.get().class("store-window")
            aria-hidden=move || visibility.get().aria_hidden()
            aria-label="Store listing"
            on:click=move |ev: web_sys::MouseEvent| stop_mouse_event(&ev)
        >
            <header class="store-window-titlebar">
                <Text role=TextRole::Label>"Store"</Text>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_label="Close store"
                    on_click=Callback::new(move |_| on_close.call(()))
                >
                    "×"
                </Button>
            </header>
            {move || {
                let listing = listing.get();
                view! {
                    <div class="store-window-body">
                        <div class="store-window-summary">
                            {listing
                                .icon_url
                                .map(|src| view! { <img class="store-window-icon" src=src alt="" /> })}
                            <Heading>{listing.name}</Heading>
                            <ul class="store-window-categories">
                                {listing
                                    .categories
                                    .into_iter()
                                    .map(|category| view! { <li class="store-window-category">{category}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="store-window-screenshots">
                            {listing
                                .screenshots
                                .into_iter()
                                .map(|src| view! { <img class="store-window-screenshot" src=src alt="Screenshot" /> })
                                .collect_view()}
                        </div>
                        <Text role=TextRole::Body layout_class="store-window-description">
                            {listing.description}
                        </Text>
                    </div>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use manifest_contract::ManifestDocument;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn state_with(manifest: serde_json::Value) -> SimulatorState {
        let mut state = SimulatorState::default();
        state.settings.safe_url_endpoint = None;
        state.manifest_url = Some("https://a.dev/manifest.json".to_string());
        state.manifest = Some(ManifestDocument::from_value(manifest));
        state
    }

    #[test]
    fn store_listing_never_shows_more_than_two_screenshots() {
        let shots: Vec<_> = (1..=5)
            .map(|n| json!({ "src": format!("shot{n}.png") }))
            .collect();
        let listing = StoreListing::from_state(&state_with(json!({ "screenshots": shots })));

        assert_eq!(
            listing.screenshots,
            vec![
                "https://a.dev/shot1.png".to_string(),
                "https://a.dev/shot2.png".to_string()
            ]
        );
    }

    #[test]
    fn store_listing_falls_back_to_defaults() {
        let listing = StoreListing::from_state(&state_with(json!({ "short_name": "Foo" })));
        assert_eq!(listing.name, "Foo");
        assert_eq!(listing.description, "An amazing progressive web app!");
        assert!(listing.screenshots.is_empty());
        assert!(listing.categories.is_empty());
    }

    #[test]
    fn jump_list_entries_use_first_shortcut_icon() {
        let state = state_with(json!({
            "shortcuts": [
                { "name": "New", "url": "/new", "icons": [{ "src": "new.png" }, { "src": "alt.png" }] },
                { "name": "Open", "url": "/open" },
                { "name": 7, "url": "/broken" }
            ]
        }));

        assert_eq!(
            JumpListEntry::from_state(&state),
            vec![
                JumpListEntry {
                    name: "New".to_string(),
                    icon_url: Some("https://a.dev/new.png".to_string()),
                },
                JumpListEntry {
                    name: "Open".to_string(),
                    icon_url: None,
                },
            ]
        );
    }
}
