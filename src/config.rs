//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Runtime settings are read from `assets/config.toml`, embedded at compile
//! time using `include_str!`.

use serde::Deserialize;

use crate::utils::console;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Embedded runtime configuration.
const CONFIG_TOML: &str = include_str!("../assets/config.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "Blog";

// =============================================================================
// User-facing Messages
// =============================================================================

/// Message shown for every failed API call, whatever the cause.
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, there was an error!";

// =============================================================================
// DOM Identifiers
// =============================================================================

/// DOM ids used by the host page and by the rendered widget.
pub mod dom_ids {
    /// Mount point in `index.html`.
    pub const APP_ROOT: &str = "app";
    /// Container receiving rendered article cards.
    pub const FEED_CONTAINER: &str = "blog-posts-container";
    /// Publish dialog.
    pub const PUBLISH_DIALOG: &str = "publishArticleModal";
    /// Prefix of each like control id (`like-btn-{article id}`).
    pub const LIKE_BUTTON_PREFIX: &str = "like-btn-";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Default base endpoint of the blog API.
pub const DEFAULT_ENDPOINT: &str = "https://v8cc3f6f0j.execute-api.us-east-1.amazonaws.com/api/";

/// Default content type for POST bodies.
pub const DEFAULT_POST_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// Notice Configuration
// =============================================================================

/// Default lifetime of a transient notice in milliseconds.
pub const DEFAULT_NOTICE_DURATION_MS: u32 = 5000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Settings read from `assets/config.toml`.
///
/// Every key is optional; missing keys take the `DEFAULT_*` constants.
/// Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    /// Base endpoint; the action selector is appended as a query parameter.
    pub endpoint: String,
    /// `Content-Type` header sent with POST bodies.
    pub post_content_type: String,
    /// Lifetime of success/error toasts.
    pub notice_duration_ms: u32,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            post_content_type: DEFAULT_POST_CONTENT_TYPE.to_string(),
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
        }
    }
}

impl BlogConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load the embedded configuration.
    ///
    /// A malformed file is logged and replaced by the defaults so the page
    /// still comes up.
    pub fn load() -> Self {
        match Self::from_toml(CONFIG_TOML) {
            Ok(config) => config,
            Err(e) => {
                console::error(&format!("invalid config.toml, using defaults: {}", e));
                Self::default()
            }
        }
    }
}
