use super::*;

#[component]
/// Shared button primitive with standardized states and semantic variant tokens.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            aria-label=move || aria_label.get()
            aria-expanded=move || aria_expanded.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared labeled field wrapper that keeps copy and control structure on the primitive layer.
pub fn FieldGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-group"
        >
            <span data-ui-slot="copy">
                {title.map(|title| view! { <span data-ui-slot="title">{title}</span> })}
                {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            </span>
            <span data-ui-slot="control">{children()}</span>
        </label>
    }
}

#[component]
/// Shared text input primitive.
pub fn TextField(
    #[prop(default = FieldVariant::Standard)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            aria-invalid=move || bool_token(invalid.get())
            autocomplete="off"
            spellcheck="false"
            type="text"
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-variant=variant.token()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
}

#[component]
/// Shared multiline text area primitive.
pub fn TextArea(
    #[prop(default = FieldVariant::Inset)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Textarea>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <textarea
            class=merge_layout_class("ui-textarea", layout_class)
            aria-label=aria_label
            aria-invalid=move || bool_token(invalid.get())
            node_ref=node_ref
            spellcheck="false"
            autocomplete="off"
            wrap="off"
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-area"
            data-ui-variant=variant.token()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        ></textarea>
    }
}
