//! Production configuration constants.
//!
//! The translation backend and the chat assistant are fixed local services.
//! These values are shared by the app and the CLI so both talk to the same
//! endpoints with the same timing.
//!
//! # Usage
//!
//! ```
//! use signverse_core::config::{BackendConfig, DEFAULT_BACKEND_URL};
//!
//! let config = BackendConfig::default();
//! assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Translation Backend
// =============================================================================

/// Base URL of the translation backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Interval between detection result polls while a camera session is live.
pub const POLL_INTERVAL_MS: u64 = 1_000;

/// Per-request timeout for backend calls (native only; browsers manage their own).
///
/// Speech stop blocks on server-side transcription, so this is generous.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Environment variable overriding the backend URL (CLI).
pub const BACKEND_URL_ENV: &str = "SIGNVERSE_BACKEND_URL";

// =============================================================================
// Chat
// =============================================================================

/// Delay before the simulated assistant answers.
pub const BOT_REPLY_DELAY_MS: u64 = 1_000;

/// External chat assistant, opened in a separate tab or window.
pub const ASSISTANT_URL: &str = "http://localhost:8501/";

// =============================================================================
// Persistence & UI
// =============================================================================

/// Key of the persisted settings record.
pub const SETTINGS_STORAGE_KEY: &str = "signverse-settings";

/// Number of translations shown on the home view.
pub const RECENT_TRANSLATIONS_LIMIT: usize = 3;

/// Document title applied on web.
pub const DOCUMENT_TITLE: &str = "SignVerse - Sign Language Translation";

/// Languages offered in settings as (code, label).
pub const LANGUAGES: [(&str, &str); 5] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("zh", "Chinese"),
];

/// Connection settings for the translation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Config pointing at `base_url` with production timings.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_poll_interval_ms() -> u64 {
    POLL_INTERVAL_MS
}

fn default_request_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}
