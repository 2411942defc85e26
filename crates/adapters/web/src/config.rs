//! Client configuration: optional inline JSON block with defaults.
//!
//! The page may embed
//!
//! ```html
//! <script id="gallery-config" type="application/json">{ "logging": { "level": "debug" } }</script>
//! ```
//!
//! Every field has a default matching the gallery templates, so the block is
//! optional and may be partial.

use gallery_app::services::response_interpreter::DEFAULT_FAILURE_NOTICE;
use gallery_domain::trigger::FlowKind;
use serde::Deserialize;
use web_sys::Document;

/// Id of the `<script>` element holding the configuration.
pub const CONFIG_ELEMENT_ID: &str = "gallery-config";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Overlay elements.
    pub overlay: OverlayConfig,
    /// Declarative trigger and navigation attributes.
    pub triggers: TriggerConfig,
    /// Main photo lookup.
    pub photo: PhotoConfig,
    /// CSRF token forwarding.
    pub csrf: CsrfConfig,
    /// User-facing messages.
    pub notice: NoticeConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the overlay lives in the page.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Id of the container shown and hidden with the overlay.
    pub wrapper_id: String,
    /// Id of the element fragments are injected into.
    pub content_id: String,
    /// Selector of the dismiss controls inside the content.
    pub dismiss_selector: String,
    /// Selector of the control focused after a fetched fragment is shown.
    pub focus_selector: String,
}

/// Attributes marking triggers and navigation anchors.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Attribute carried by trigger elements.
    pub modal_attribute: String,
    /// Attribute value of fetch-display triggers.
    pub fetch_display: String,
    /// Attribute value of fire-once triggers.
    pub fire_once: String,
    /// Attribute carried by directional anchors.
    pub navigate_attribute: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhotoConfig {
    /// Selector of the main photo `<img>`.
    pub selector: String,
}

/// CSRF token forwarding for POST requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CsrfConfig {
    /// Cookie holding the token.
    pub cookie: String,
    /// Request header the token is sent in.
    pub header: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Message shown when a request fails.
    pub failure: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
}

impl ClientConfig {
    /// Load the configuration embedded in `document`, or the defaults when
    /// the page carries none.
    ///
    /// # Errors
    ///
    /// Returns an error if the block exists but is malformed or invalid.
    pub fn from_document(document: &Document) -> Result<Self, ConfigError> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("overlay.wrapper_id", &self.overlay.wrapper_id),
            ("overlay.content_id", &self.overlay.content_id),
            ("overlay.dismiss_selector", &self.overlay.dismiss_selector),
            ("overlay.focus_selector", &self.overlay.focus_selector),
            ("triggers.modal_attribute", &self.triggers.modal_attribute),
            ("triggers.fetch_display", &self.triggers.fetch_display),
            ("triggers.fire_once", &self.triggers.fire_once),
            ("triggers.navigate_attribute", &self.triggers.navigate_attribute),
            ("photo.selector", &self.photo.selector),
            ("csrf.cookie", &self.csrf.cookie),
            ("csrf.header", &self.csrf.header),
            ("notice.failure", &self.notice.failure),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Validation(format!("{name} must not be empty")));
        }
        if self.triggers.fetch_display == self.triggers.fire_once {
            return Err(ConfigError::Validation(
                "triggers.fetch_display and triggers.fire_once must differ".to_string(),
            ));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "unknown log level `{}`",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Maximum log level.
    #[must_use]
    pub fn max_level(&self) -> tracing::Level {
        self.logging.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl TriggerConfig {
    /// Flow started by a trigger whose attribute is `value`.
    #[must_use]
    pub fn flow_kind(&self, value: &str) -> Option<FlowKind> {
        if value == self.fetch_display {
            Some(FlowKind::FetchDisplay)
        } else if value == self.fire_once {
            Some(FlowKind::FireOnce)
        } else {
            None
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            wrapper_id: "modal-wrapper".to_string(),
            content_id: "modal".to_string(),
            dismiss_selector: ".cancel".to_string(),
            focus_selector: "input:not([type]):enabled, input[type='text']:enabled, select:enabled"
                .to_string(),
        }
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            modal_attribute: "data-modal".to_string(),
            fetch_display: "form".to_string(),
            fire_once: "rotate".to_string(),
            navigate_attribute: "data-navigate".to_string(),
        }
    }
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            selector: ".photo-main .photo img".to_string(),
        }
    }
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie: "csrftoken".to_string(),
            header: "X-CSRFToken".to_string(),
        }
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            failure: DEFAULT_FAILURE_NOTICE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse client configuration")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
