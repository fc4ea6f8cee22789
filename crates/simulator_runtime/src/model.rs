use manifest_contract::{
    sanitize_site_url, Explanations, ImageUrlResolver, Manifest, ManifestDocument,
    SimulatorConfig,
};

pub const EXPLANATION_SWAP_DELAY_MS: u32 = 400;
pub const STORE_SCREENSHOT_LIMIT: usize = 2;
pub const LOOKUP_FALLBACK_ERROR: &str =
    "We couldn't retrieve a manifest for that site. Please check the URL and try again.";
pub const SITE_URL_INPUT_ID: &str = "pwa-simulator-site-url";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenFlags {
    pub app_window: bool,
    pub start_menu: bool,
    pub jump_list: bool,
    pub store_window: bool,
    pub editor_status: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Applied,
    Rejected,
}

impl EditorOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Applied => "Changes applied.",
            Self::Rejected => "Changes could not be applied.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorStatus {
    pub outcome: Option<EditorOutcome>,
    pub invalid_json: bool,
    /// Bumped on every parse attempt; hide timers carry the generation they were scheduled for.
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplanationPhase {
    #[default]
    Idle,
    FadingOutOld,
    ShowingNew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationStep {
    /// Replace the displayed text with the pending message and fade in.
    Swap,
    /// Fade the displayed message out.
    FadeOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplanationState {
    pub message: String,
    pub phase: ExplanationPhase,
    pub generation: u64,
    pub pending: Option<String>,
}

impl ExplanationState {
    pub fn is_fading_in(&self) -> bool {
        self.phase == ExplanationPhase::ShowingNew
    }

    pub fn is_fading_out(&self) -> bool {
        self.phase == ExplanationPhase::FadingOutOld
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupTracker {
    pub last_issued: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteFormState {
    pub input: String,
    pub error: Option<String>,
    pub loading: bool,
}

/// Construction-time options the reducer consults after bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorSettings {
    pub hide_editor: bool,
    pub explanation_display_ms: u32,
    pub explanations: Explanations,
    pub invalid_json_message: String,
    pub safe_url_endpoint: Option<String>,
    pub editor_debounce_ms: u32,
    pub editor_status_display_ms: u32,
}

impl From<&SimulatorConfig> for SimulatorSettings {
    fn from(config: &SimulatorConfig) -> Self {
        Self {
            hide_editor: config.hide_editor,
            explanation_display_ms: config.explanation_display_ms,
            explanations: config.resolved_explanations(),
            invalid_json_message: config.invalid_json_message.clone(),
            safe_url_endpoint: config.safe_url_endpoint.clone(),
            editor_debounce_ms: config.editor_debounce_ms,
            editor_status_display_ms: config.editor_status_display_ms,
        }
    }
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self::from(&SimulatorConfig::default())
    }
}

/// Complete simulator state owned by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorState {
    /// `None` until a manifest is known; the site URL form is shown meanwhile.
    pub manifest: Option<ManifestDocument>,
    pub site_url: Option<String>,
    pub manifest_url: Option<String>,
    /// Preview icon, resolved when the manifest first becomes known.
    pub icon_url: Option<String>,
    pub open: OpenFlags,
    pub editor: EditorStatus,
    pub editor_revision: u64,
    pub explanation: ExplanationState,
    pub lookup: LookupTracker,
    pub form: SiteFormState,
    pub settings: SimulatorSettings,
}

impl SimulatorState {
    pub fn new(settings: SimulatorSettings) -> Self {
        Self {
            manifest: None,
            site_url: None,
            manifest_url: None,
            icon_url: None,
            open: OpenFlags::default(),
            editor: EditorStatus::default(),
            editor_revision: 0,
            explanation: ExplanationState::default(),
            lookup: LookupTracker::default(),
            form: SiteFormState::default(),
            settings,
        }
    }

    pub fn is_manifest_known(&self) -> bool {
        self.manifest.is_some()
    }

    /// Typed view of the current manifest; empty while no manifest is known.
    pub fn manifest_view(&self) -> Manifest {
        self.manifest
            .as_ref()
            .map(ManifestDocument::view)
            .unwrap_or_default()
    }

    /// Text of the current manifest as shown in the editor.
    pub fn manifest_text(&self) -> String {
        self.manifest
            .as_ref()
            .map(ManifestDocument::to_pretty_json)
            .unwrap_or_default()
    }

    /// Base for relative image sources: the manifest location, else the sanitized site URL.
    pub fn image_base(&self) -> Option<String> {
        if let Some(manifest_url) = self.manifest_url.as_deref().filter(|url| !url.is_empty()) {
            return Some(manifest_url.to_string());
        }
        let site_url = self.site_url.as_deref()?;
        sanitize_site_url(site_url)
            .ok()
            .filter(|url| !url.is_empty())
    }

    /// Resolves a manifest image source into the URL rendered by `<img>`.
    ///
    /// Without a usable base only absolute sources resolve.
    pub fn resolve_image(&self, src: &str) -> Option<String> {
        let endpoint = self.settings.safe_url_endpoint.as_deref();
        let resolver = self
            .image_base()
            .and_then(|base| ImageUrlResolver::new(&base, endpoint).ok())
            .or_else(|| ImageUrlResolver::new(src, endpoint).ok())?;
        resolver.resolve(src).ok()
    }

    /// Resolves the best icon of the current manifest.
    pub fn resolve_best_icon(&self) -> Option<String> {
        let view = self.manifest.as_ref()?.view();
        let icon = view.best_icon()?;
        self.resolve_image(&icon.src)
    }

    /// Message shown under the editor while the last edit was rejected.
    pub fn invalid_json_message(&self) -> &str {
        if self.editor.invalid_json {
            &self.settings.invalid_json_message
        } else {
            ""
        }
    }

    /// Editor status line, empty while hidden.
    pub fn editor_status_message(&self) -> &'static str {
        match self.editor.outcome {
            Some(outcome) if self.open.editor_status => outcome.message(),
            _ => "",
        }
    }
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self::new(SimulatorSettings::default())
    }
}
