use std::time::Duration;

use leptos::*;
use system_ui::prelude::*;

use crate::session::{EditorChange, EditorSession, EditorSync};

#[component]
/// Textarea-backed editor panel with debounced change events.
///
/// The editor is constructed with `start_text` when its textarea is first displayed. Every
/// new `sync` value replaces the visible text and discards in-flight edits.
pub fn CodeEditor(
    /// Seed text shown when the editor is first displayed.
    #[prop(into)]
    start_text: String,
    /// Authoritative text pushed by the owner; each revision applies once.
    #[prop(optional, into)]
    sync: Option<Signal<Option<EditorSync>>>,
    /// Receives the trailing document after the quiet period.
    on_change: Callback<EditorChange>,
    /// Quiet period before a change is emitted. `0` emits on every input.
    #[prop(default = 250)]
    debounce_ms: u32,
    /// Marks the text as rejected by the consumer.
    #[prop(optional, into)]
    invalid: MaybeSignal<bool>,
    /// Transient status shown next to the line/char counters.
    #[prop(optional, into)]
    status: MaybeSignal<String>,
    /// Accessible label for the text area.
    #[prop(optional, into)]
    aria_label: Option<String>,
) -> impl IntoView {
    let session = store_value(EditorSession::new());
    let text = create_rw_signal(String::new());
    let textarea_ref = create_node_ref::<html::Textarea>();

    textarea_ref.on_load(move |_| {
        let mounted = session
            .try_update_value(|session| session.mount(&start_text))
            .unwrap_or(false);
        if mounted {
            text.set(session.with_value(|session| session.document().text().to_string()));
        }
    });

    if let Some(sync) = sync {
        create_effect(move |_| {
            let Some(sync) = sync.get() else {
                return;
            };
            let applied = session
                .try_update_value(|session| session.resync(&sync))
                .unwrap_or(false);
            if applied {
                text.set(sync.text);
            }
        });
    }

    let on_input = Callback::new(move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        text.set(value.clone());
        let Some(ticket) = session.try_update_value(|session| session.edit(value)) else {
            return;
        };

        let flush = move || {
            if let Some(Some(change)) = session.try_update_value(|session| session.flush(ticket))
            {
                on_change.call(change);
            }
        };
        if debounce_ms == 0 {
            flush();
        } else {
            set_timeout(flush, Duration::from_millis(u64::from(debounce_ms)));
        }
    });

    let line_count = Signal::derive(move || text.with(|text| text.split('\n').count()));
    let char_count = Signal::derive(move || text.with(|text| text.chars().count()));

    view! {
        <div class="code-editor" data-ui-kind="code-editor">
            <TextArea
                layout_class="code-editor-text"
                aria_label=aria_label.unwrap_or_else(|| "Manifest JSON editor".to_string())
                node_ref=textarea_ref
                value=Signal::derive(move || text.get())
                invalid=invalid
                on_input=on_input
            />
            <StatusBar layout_class="code-editor-status">
                <StatusBarItem>{move || format!("Lines: {}", line_count.get())}</StatusBarItem>
                <StatusBarItem>{move || format!("Chars: {}", char_count.get())}</StatusBarItem>
                <StatusBarItem layout_class="code-editor-message">{move || status.get()}</StatusBarItem>
            </StatusBar>
        </div>
    }
}
