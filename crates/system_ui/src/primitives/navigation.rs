use super::*;

#[component]
/// Shared status bar primitive.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
            data-ui-variant="standard"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}
