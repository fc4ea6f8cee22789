use super::*;

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=role.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Live-region message that renders nothing while `message` is empty.
pub fn InlineMessage(
    #[prop(default = TextTone::Danger)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] message: MaybeSignal<String>,
) -> impl IntoView {
    let message = Signal::derive(move || message.get());
    view! {
        <Show when=move || !message.get().is_empty() fallback=|| ()>
            <p
                class=merge_layout_class("ui-inline-message", layout_class)
                role="status"
                aria-live="polite"
                data-ui-primitive="true"
                data-ui-kind="inline-message"
                data-ui-tone=tone.token()
            >
                {move || message.get()}
            </p>
        </Show>
    }
}

#[component]
/// Shared inline statusbar item wrapper.
pub fn StatusBarItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-statusbar-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar-item"
        >
            {children()}
        </span>
    }
}
