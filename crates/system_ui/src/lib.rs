//! Shared UI primitive library for the manifest simulator.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed
//! by the simulator stylesheet. Simulator surfaces compose these primitives instead of emitting
//! ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonSize, ButtonVariant, FieldGroup, FieldVariant, Heading, InlineMessage,
    LayoutGap, StatusBar, StatusBarItem, Text, TextArea, TextField, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, FieldGroup, FieldVariant, Heading, InlineMessage,
        LayoutGap, StatusBar, StatusBarItem, Text, TextArea, TextField, TextRole, TextTone,
    };
}
