use arrow_common::WindowKey;
use wry::WebView;

use crate::navigation::HistoryStep;

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// The window this WebView fills.
    pub(super) window: WindowKey,
    /// Latest committed URL (best-effort tracking).
    pub(super) current_url: String,
}

impl WebViewHandle {
    /// The owning window.
    pub fn window(&self) -> WindowKey {
        self.window
    }

    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)?;
        self.current_url = url.to_string();
        Ok(())
    }

    /// Move through the session history, or reload the current page.
    pub fn step_history(&self, step: HistoryStep) -> Result<(), wry::Error> {
        match step {
            HistoryStep::Back => self.webview.evaluate_script("history.back()"),
            HistoryStep::Forward => self.webview.evaluate_script("history.forward()"),
            HistoryStep::Reload => self.webview.reload(),
        }
    }

    /// Resize the WebView to fill its window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Record the URL a page load reported.
    pub fn set_current_url(&mut self, url: String) {
        self.current_url = url;
    }
}
