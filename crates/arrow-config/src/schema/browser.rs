//! Browser content configuration.
//!
//! Only the user-facing knobs live here. The content sandbox itself
//! (isolation, throttling, spell-check) is fixed by the webview layer.

use serde::{Deserialize, Serialize};

/// Address loaded when a window is created.
pub const DEFAULT_START_URL: &str = "https://www.google.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Address every new window loads first.
    pub start_url: String,
    /// Custom user agent string. `None` keeps the engine default.
    pub user_agent: Option<String>,
    /// Enable dev tools in release builds (always on in debug builds).
    pub devtools: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.into(),
            user_agent: None,
            devtools: false,
        }
    }
}
