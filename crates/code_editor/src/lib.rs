//! Plain-text editor panel used for live-editing manifest JSON.
//!
//! The panel is split into a pure [`EditorSession`] state machine (phase, debounce tickets,
//! authoritative resyncs) and the textarea-backed [`CodeEditor`] component that drives it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod component;
mod session;

pub use component::CodeEditor;
pub use session::{
    DebounceTicket, EditorChange, EditorDocument, EditorPhase, EditorSession, EditorSync,
};
