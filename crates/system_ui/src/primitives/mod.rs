//! Shared control, typography, and status primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod data_display;
mod navigation;

pub use controls::{Button, FieldGroup, TextArea, TextField};
pub use data_display::{Heading, InlineMessage, StatusBarItem, Text};
pub use navigation::StatusBar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    #[default]
    Standard,
    /// Inset/editor input.
    Inset,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Monospace/code text.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Success/status tone.
    Success,
    /// Danger tone.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_to_base_class() {
        assert_eq!(merge_layout_class("ui-button", Some("site-go")), "ui-button site-go");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(FieldVariant::Inset.token(), "inset");
        assert_eq!(TextTone::Danger.token(), "danger");
        assert_eq!(bool_token(true), "true");
    }
}
