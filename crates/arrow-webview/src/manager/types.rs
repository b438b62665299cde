/// Configuration for creating a new WebView instance.
///
/// The defaults form the content sandbox: no clipboard access, spell-check
/// off, background throttling on, and nothing injected except the bridge.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether page script may read or write the system clipboard.
    pub clipboard: bool,
    /// Whether the document root keeps spell-checking enabled.
    pub spellcheck: bool,
    /// Throttle timers and rendering while the window is in the background.
    pub background_throttling: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: false,
            spellcheck: false,
            background_throttling: true,
        }
    }
}

impl WebViewConfig {
    /// Sandboxed defaults plus the user-facing knobs.
    pub fn sandboxed(devtools: bool, user_agent: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            devtools: defaults.devtools || devtools,
            user_agent,
            ..defaults
        }
    }
}
