//! Construction-time simulator options and the explanation text bundle.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::document::ManifestDocument;

/// Default explanation display duration in milliseconds.
pub const DEFAULT_EXPLANATION_DISPLAY_MS: u32 = 5_000;
/// Default quiet period before the editor reports a change.
pub const DEFAULT_EDITOR_DEBOUNCE_MS: u32 = 250;
/// Default time the editor status line stays visible after a parse attempt.
pub const DEFAULT_EDITOR_STATUS_DISPLAY_MS: u32 = 3_000;
/// Default message shown under the editor when the text is not valid JSON.
pub const DEFAULT_INVALID_JSON_MESSAGE: &str = "Invalid JSON!";
/// Default image proxy that rewrites icon and screenshot URLs.
pub const DEFAULT_SAFE_URL_ENDPOINT: &str =
    "https://pwabuilder-safe-url.azurewebsites.net/api/getsafeurl";
/// Default manifest-finder service used by the site URL form.
pub const DEFAULT_DISCOVERY_ENDPOINT: &str =
    "https://pwabuilder-manifest-finder.azurewebsites.net/api/findmanifest";

/// Errors raised while reading simulator configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured manifest text is not valid JSON.
    #[error("configured manifest is not valid JSON: {0}")]
    InvalidManifestJson(String),
    /// The configured explanations bundle is not a valid JSON object.
    #[error("configured explanations are not a valid JSON object: {0}")]
    InvalidExplanationsJson(String),
    /// A numeric option could not be parsed.
    #[error("option `{key}` expects a number, got `{value}`")]
    InvalidNumber {
        /// Option name.
        key: String,
        /// Raw value.
        value: String,
    },
}

/// Which helper message to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplanationKind {
    /// Shown once the manifest becomes known.
    Initial,
    /// Shown when the app window opens.
    AppWindow,
    /// Shown when the start menu opens.
    StartMenu,
    /// Shown when the jump list opens.
    JumpList,
    /// Shown when the store window opens.
    Store,
}

/// Helper messages displayed while the user explores the desktop mock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanations {
    /// Message for [`ExplanationKind::Initial`].
    pub initial: String,
    /// Message for [`ExplanationKind::AppWindow`].
    pub app_window: String,
    /// Message for [`ExplanationKind::StartMenu`].
    pub start_menu: String,
    /// Message for [`ExplanationKind::JumpList`].
    pub jump_list: String,
    /// Message for [`ExplanationKind::Store`].
    pub store: String,
}

impl Default for Explanations {
    fn default() -> Self {
        Self {
            initial: "Do you see something familiar on the taskbar?".to_string(),
            app_window: "The background color, theme color and display attributes determine \
                         several UI aspects of your PWA, such as the titlebar."
                .to_string(),
            start_menu: "The application's name and icon are used in the start menu.".to_string(),
            jump_list: "The actions listed on the shortcuts attribute define a context menu that \
                        is displayed when right-clicking on the taskbar icon."
                .to_string(),
            store: "Screenshots, a complete description and categories will enhance your app's \
                    listing in the Microsoft Store."
                .to_string(),
        }
    }
}

impl Explanations {
    /// Returns the message for `kind`.
    pub fn text(&self, kind: ExplanationKind) -> &str {
        match kind {
            ExplanationKind::Initial => &self.initial,
            ExplanationKind::AppWindow => &self.app_window,
            ExplanationKind::StartMenu => &self.start_menu,
            ExplanationKind::JumpList => &self.jump_list,
            ExplanationKind::Store => &self.store,
        }
    }

    /// Applies overrides; missing or empty overrides keep the current text.
    pub fn with_overrides(mut self, overrides: &ExplanationOverrides) -> Self {
        let slots = [
            (&mut self.initial, &overrides.initial),
            (&mut self.app_window, &overrides.app_window),
            (&mut self.start_menu, &overrides.start_menu),
            (&mut self.jump_list, &overrides.jump_list),
            (&mut self.store, &overrides.store),
        ];
        for (slot, replacement) in slots {
            if let Some(text) = replacement.as_deref().filter(|text| !text.is_empty()) {
                *slot = text.to_string();
            }
        }
        self
    }
}

/// Partial explanation bundle accepted from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationOverrides {
    /// Override for [`Explanations::initial`].
    pub initial: Option<String>,
    /// Override for [`Explanations::app_window`].
    #[serde(alias = "appWindow")]
    pub app_window: Option<String>,
    /// Override for [`Explanations::start_menu`].
    #[serde(alias = "startMenu")]
    pub start_menu: Option<String>,
    /// Override for [`Explanations::jump_list`].
    #[serde(alias = "jumpList")]
    pub jump_list: Option<String>,
    /// Override for [`Explanations::store`].
    pub store: Option<String>,
}

/// Manifest supplied at construction, either as an object or as JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ManifestSource {
    /// JSON text that still needs parsing.
    Text(String),
    /// Already structured JSON.
    Object(Value),
}

impl ManifestSource {
    /// Converts the source into a document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidManifestJson`] when text input does not parse.
    pub fn into_document(self) -> Result<ManifestDocument, ConfigError> {
        match self {
            Self::Text(text) => ManifestDocument::parse(&text)
                .map_err(|err| ConfigError::InvalidManifestJson(err.to_string())),
            Self::Object(value) => Ok(ManifestDocument::from_value(value)),
        }
    }
}

/// Construction-time options for the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Initial manifest.
    pub manifest: Option<ManifestSource>,
    /// Location of the manifest; the base for relative image URLs.
    #[serde(alias = "manifestUrl")]
    pub manifest_url: Option<String>,
    /// Site URL entered by the user or supplied by the host page.
    #[serde(alias = "siteUrl")]
    pub site_url: Option<String>,
    /// Hide the manifest editor column.
    #[serde(alias = "hideEditor")]
    pub hide_editor: bool,
    /// How long an explanation stays visible after fading in.
    #[serde(alias = "explanationDisplayTime")]
    pub explanation_display_ms: u32,
    /// Explanation text overrides.
    pub explanations: ExplanationOverrides,
    /// Message shown when the editor text is not valid JSON.
    #[serde(alias = "invalidJsonMessage")]
    pub invalid_json_message: String,
    /// Safe-URL proxy endpoint; `None` renders image URLs directly.
    pub safe_url_endpoint: Option<String>,
    /// Manifest-finder service endpoint.
    pub discovery_endpoint: String,
    /// Editor change debounce in milliseconds.
    pub editor_debounce_ms: u32,
    /// Editor status visibility duration in milliseconds.
    pub editor_status_display_ms: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            manifest_url: None,
            site_url: None,
            hide_editor: false,
            explanation_display_ms: DEFAULT_EXPLANATION_DISPLAY_MS,
            explanations: ExplanationOverrides::default(),
            invalid_json_message: DEFAULT_INVALID_JSON_MESSAGE.to_string(),
            safe_url_endpoint: Some(DEFAULT_SAFE_URL_ENDPOINT.to_string()),
            discovery_endpoint: DEFAULT_DISCOVERY_ENDPOINT.to_string(),
            editor_debounce_ms: DEFAULT_EDITOR_DEBOUNCE_MS,
            editor_status_display_ms: DEFAULT_EDITOR_STATUS_DISPLAY_MS,
        }
    }
}

impl SimulatorConfig {
    /// Resolves the explanation bundle (built-in defaults plus overrides).
    pub fn resolved_explanations(&self) -> Explanations {
        Explanations::default().with_overrides(&self.explanations)
    }

    /// Builds a config from page query pairs, collecting non-fatal option errors.
    ///
    /// Unknown keys are ignored. A bad option keeps its default and is reported.
    pub fn from_query_pairs<'a, I>(pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        for (key, value) in pairs {
            match key {
                "site" | "site_url" | "siteUrl" => config.site_url = non_empty(value),
                "manifest" => match ManifestSource::Text(value.to_string()).into_document() {
                    Ok(document) => {
                        config.manifest = Some(ManifestSource::Object(document.into_value()))
                    }
                    Err(err) => errors.push(err),
                },
                "manifest_url" | "manifestUrl" => config.manifest_url = non_empty(value),
                "hide_editor" | "hideEditor" => config.hide_editor = parse_flag(value),
                "explanation_ms" | "explanationDisplayTime" => match value.parse::<u32>() {
                    Ok(ms) => config.explanation_display_ms = ms,
                    Err(_) => errors.push(ConfigError::InvalidNumber {
                        key: key.to_string(),
                        value: value.to_string(),
                    }),
                },
                "explanations" => match serde_json::from_str::<ExplanationOverrides>(value) {
                    Ok(overrides) => config.explanations = overrides,
                    Err(err) => errors.push(ConfigError::InvalidExplanationsJson(err.to_string())),
                },
                "invalid_json_message" | "invalidJsonMessage" => {
                    if !value.is_empty() {
                        config.invalid_json_message = value.to_string();
                    }
                }
                "safe_url_endpoint" => config.safe_url_endpoint = non_empty(value),
                "discovery_endpoint" => {
                    if !value.is_empty() {
                        config.discovery_endpoint = value.to_string();
                    }
                }
                _ => {}
            }
        }

        (config, errors)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim(), "false" | "0" | "no" | "off")
}
