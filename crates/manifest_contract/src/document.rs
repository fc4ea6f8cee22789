//! Editable manifest document and the lenient typed view the desktop widgets render from.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// App name shown when the manifest specifies neither `name` nor `short_name`.
pub const DEFAULT_APP_NAME: &str = "PWA App";
/// Store listing description used when the manifest has no `description`.
pub const DEFAULT_STORE_DESCRIPTION: &str = "An amazing progressive web app!";

const PREFERRED_ICON_SIZE: &str = "512x512";

/// Image resource entry (`icons`, `screenshots`, shortcut `icons`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResource {
    /// Image URL, possibly relative to the manifest location.
    pub src: String,
    /// Space-separated size tokens such as `"192x192 512x512"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    /// MIME type hint.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Accessible label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ImageResource {
    fn has_size(&self, token: &str) -> bool {
        self.sizes
            .as_deref()
            .is_some_and(|sizes| sizes.contains(token))
    }
}

/// Jump-list shortcut entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Label shown in the jump list.
    pub name: String,
    /// Target URL inside the application scope.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional short label.
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional description.
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional icons; the first entry is used in the jump list.
    pub icons: Option<Vec<ImageResource>>,
}

impl Shortcut {
    /// Returns the icon rendered next to the shortcut (always the first listed icon).
    pub fn first_icon(&self) -> Option<&ImageResource> {
        self.icons.as_deref().and_then(|icons| icons.first())
    }
}

/// Manifest `display` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    /// No browser chrome at all.
    Fullscreen,
    /// Own window with a title bar.
    #[default]
    Standalone,
    /// Own window with minimal navigation controls.
    MinimalUi,
    /// Regular browser tab.
    Browser,
}

impl Display {
    /// Stable token used for DOM attributes and CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Fullscreen => "fullscreen",
            Self::Standalone => "standalone",
            Self::MinimalUi => "minimal-ui",
            Self::Browser => "browser",
        }
    }
}

/// Native application related to the web app.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelatedApplication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Store platform identifier.
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Store listing URL.
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Store-specific application id.
    pub id: Option<String>,
}

/// Typed view over a [`ManifestDocument`].
///
/// Every field is optional. A field whose JSON type does not match is treated as absent and
/// malformed list entries are skipped, so a syntactically valid document always yields a view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    /// `name`
    pub name: Option<String>,
    /// `short_name`
    pub short_name: Option<String>,
    /// `description`
    pub description: Option<String>,
    /// `display`; unknown modes are treated as absent.
    pub display: Option<Display>,
    /// `orientation`
    pub orientation: Option<String>,
    /// `dir`
    pub dir: Option<String>,
    /// `lang`
    pub lang: Option<String>,
    /// `theme_color`
    pub theme_color: Option<String>,
    /// `background_color`
    pub background_color: Option<String>,
    /// `icons`
    pub icons: Option<Vec<ImageResource>>,
    /// `shortcuts`
    pub shortcuts: Option<Vec<Shortcut>>,
    /// `screenshots`
    pub screenshots: Option<Vec<ImageResource>>,
    /// `categories`
    pub categories: Option<Vec<String>>,
    /// `iarc_rating_id`
    pub iarc_rating_id: Option<String>,
    /// `prefer_related_applications`
    pub prefer_related_applications: Option<bool>,
    /// `related_applications`
    pub related_applications: Option<Vec<RelatedApplication>>,
}

impl Manifest {
    /// Builds the lenient view from any JSON value. Non-object roots produce an empty view.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        Self {
            name: typed_field(fields, "name"),
            short_name: typed_field(fields, "short_name"),
            description: typed_field(fields, "description"),
            display: typed_field(fields, "display"),
            orientation: typed_field(fields, "orientation"),
            dir: typed_field(fields, "dir"),
            lang: typed_field(fields, "lang"),
            theme_color: typed_field(fields, "theme_color"),
            background_color: typed_field(fields, "background_color"),
            icons: list_field(fields, "icons"),
            shortcuts: list_field(fields, "shortcuts"),
            screenshots: list_field(fields, "screenshots"),
            categories: list_field(fields, "categories"),
            iarc_rating_id: typed_field(fields, "iarc_rating_id"),
            prefer_related_applications: typed_field(fields, "prefer_related_applications"),
            related_applications: list_field(fields, "related_applications"),
        }
    }

    /// Selects the icon used for the taskbar, start menu, and store previews.
    ///
    /// The first icon whose `sizes` mentions `512x512` wins; otherwise the first icon is used.
    pub fn best_icon(&self) -> Option<&ImageResource> {
        let icons = self.icons.as_deref()?;
        icons
            .iter()
            .find(|icon| icon.has_size(PREFERRED_ICON_SIZE))
            .or_else(|| icons.first())
    }

    /// Returns the display mode, defaulting to [`Display::Standalone`].
    pub fn display_mode(&self) -> Display {
        self.display.unwrap_or_default()
    }

    /// Name used by the start menu and app window (`name`, else [`DEFAULT_APP_NAME`]).
    pub fn app_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(DEFAULT_APP_NAME)
    }

    /// Name used by the store listing (`name`, then `short_name`, else [`DEFAULT_APP_NAME`]).
    pub fn store_name(&self) -> &str {
        non_empty(self.name.as_deref())
            .or_else(|| non_empty(self.short_name.as_deref()))
            .unwrap_or(DEFAULT_APP_NAME)
    }

    /// Description used by the store listing.
    pub fn store_description(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(DEFAULT_STORE_DESCRIPTION)
    }

    /// Shortcuts rendered in the jump list; an absent list renders nothing.
    pub fn shortcut_entries(&self) -> &[Shortcut] {
        self.shortcuts.as_deref().unwrap_or_default()
    }

    /// Categories rendered as store chips.
    pub fn category_entries(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// Screenshots rendered by the store window, capped at `limit` entries.
    pub fn screenshot_entries(&self, limit: usize) -> &[ImageResource] {
        let shots = self.screenshots.as_deref().unwrap_or_default();
        &shots[..shots.len().min(limit)]
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn typed_field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    fields.get(key).and_then(|raw| T::deserialize(raw).ok())
}

fn list_field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<Vec<T>> {
    let items = fields.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
    )
}

/// The editable manifest exactly as last parsed.
///
/// The raw JSON value is kept untouched so a replaced document deep-equals whatever the editor
/// text parsed to, including unknown members and members of unexpected types.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    value: Value,
}

impl ManifestDocument {
    /// Parses editor or configuration text. Only JSON syntax is checked.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the text is not valid JSON.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self::from_value)
    }

    /// Wraps an already parsed JSON value.
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Returns the raw JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the document and returns the raw JSON value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Builds the typed view used for rendering.
    pub fn view(&self) -> Manifest {
        Manifest::from_value(&self.value)
    }

    /// Serializes the document for the editor with two-space indentation.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| self.value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn icon(src: &str, sizes: Option<&str>) -> Value {
        match sizes {
            Some(sizes) => json!({ "src": src, "sizes": sizes }),
            None => json!({ "src": src }),
        }
    }

    #[test]
    fn best_icon_prefers_512_entry_at_any_position() {
        for position in 0..4 {
            let mut icons: Vec<Value> = (0..3)
                .map(|idx| icon(&format!("icon-{idx}.png"), Some("192x192")))
                .collect();
            icons.insert(position, icon("large.png", Some("256x256 512x512")));
            let manifest = Manifest::from_value(&json!({ "icons": icons }));

            assert_eq!(
                manifest.best_icon().map(|icon| icon.src.as_str()),
                Some("large.png")
            );
        }
    }

    #[test]
    fn best_icon_falls_back_to_first_entry() {
        let manifest = Manifest::from_value(&json!({
            "icons": [icon("a.png", Some("48x48")), icon("b.png", None)]
        }));
        assert_eq!(manifest.best_icon().map(|i| i.src.as_str()), Some("a.png"));
    }

    #[test]
    fn best_icon_is_none_without_icons() {
        assert_eq!(Manifest::from_value(&json!({ "name": "x" })).best_icon(), None);
        assert_eq!(Manifest::from_value(&json!({ "icons": [] })).best_icon(), None);
    }

    #[test]
    fn mistyped_fields_are_treated_as_absent() {
        let manifest = Manifest::from_value(&json!({
            "name": 42,
            "display": "kiosk",
            "icons": "not-a-list",
            "categories": ["games", 7, "social"],
            "shortcuts": [{ "name": "Inbox", "url": "/inbox" }, { "name": "broken" }]
        }));

        assert_eq!(manifest.name, None);
        assert_eq!(manifest.display, None);
        assert_eq!(manifest.display_mode(), Display::Standalone);
        assert_eq!(manifest.icons, None);
        assert_eq!(
            manifest.category_entries(),
            &["games".to_string(), "social".to_string()]
        );
        assert_eq!(manifest.shortcut_entries().len(), 1);
    }

    #[test]
    fn non_object_document_yields_empty_view() {
        let doc = ManifestDocument::parse("[1, 2, 3]").expect("valid json");
        assert_eq!(doc.view(), Manifest::default());
        assert_eq!(doc.view().app_name(), DEFAULT_APP_NAME);
    }

    #[test]
    fn display_modes_parse_from_kebab_case() {
        let manifest = Manifest::from_value(&json!({ "display": "minimal-ui" }));
        assert_eq!(manifest.display_mode(), Display::MinimalUi);
        assert_eq!(Display::Fullscreen.token(), "fullscreen");
    }

    #[test]
    fn store_fallbacks_follow_name_then_short_name() {
        let manifest = Manifest::from_value(&json!({ "short_name": "Short" }));
        assert_eq!(manifest.store_name(), "Short");
        assert_eq!(manifest.app_name(), DEFAULT_APP_NAME);
        assert_eq!(manifest.store_description(), DEFAULT_STORE_DESCRIPTION);
    }

    #[test]
    fn screenshot_entries_are_capped() {
        let shots: Vec<Value> = (0..5).map(|idx| icon(&format!("s{idx}.png"), None)).collect();
        let manifest = Manifest::from_value(&json!({ "screenshots": shots }));
        assert_eq!(manifest.screenshot_entries(2).len(), 2);
        assert_eq!(manifest.screenshot_entries(2)[1].src, "s1.png");
        assert!(Manifest::default().screenshot_entries(2).is_empty());
    }

    #[test]
    fn document_keeps_unknown_members_verbatim() {
        let text = r#"{"name":"Foo","x_custom":{"nested":[1,2]}}"#;
        let doc = ManifestDocument::parse(text).expect("valid json");
        let expected: Value = serde_json::from_str(text).expect("valid json");
        assert_eq!(doc.value(), &expected);
        assert!(doc.to_pretty_json().contains("\n  \"name\": \"Foo\""));
    }

    #[test]
    fn truncated_text_is_rejected() {
        assert!(ManifestDocument::parse(r#"{"name": "Foo""#).is_err());
    }
}
