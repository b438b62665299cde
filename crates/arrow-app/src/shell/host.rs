//! winit + wry implementation of the browser host.

use arrow_common::{ShellError, WindowKey};
use arrow_webview::{HistoryStep, WebViewHandle, WebViewManager};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use super::context::{BrowserHost, HostWindow, WindowOptions};

/// Convert winit's window id into the workspace-wide key.
pub fn window_key(id: WindowId) -> WindowKey {
    WindowKey::from(u64::from(id))
}

/// A native window filled by one WebView.
///
/// Field order matters: the WebView must drop before its parent window.
pub struct BrowserWindow {
    webview: WebViewHandle,
    window: Window,
}

impl BrowserWindow {
    /// Stretch the WebView over the whole client area.
    pub fn fit_webview(&self, size: PhysicalSize<u32>) {
        let bounds = wry::Rect {
            position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
            size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
        };
        if let Err(e) = self.webview.set_bounds(bounds) {
            tracing::warn!(key = %self.key(), error = %e, "failed to resize webview");
        }
    }
}

impl HostWindow for BrowserWindow {
    fn key(&self) -> WindowKey {
        self.webview.window()
    }

    fn load_url(&mut self, url: &str) -> Result<(), ShellError> {
        self.webview
            .load_url(url)
            .map_err(|e| ShellError::WebView(e.to_string()))
    }

    fn step_history(&mut self, step: HistoryStep) -> Result<(), ShellError> {
        self.webview
            .step_history(step)
            .map_err(|e| ShellError::WebView(e.to_string()))
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn current_url(&self) -> &str {
        self.webview.current_url()
    }

    fn set_current_url(&mut self, url: String) {
        self.webview.set_current_url(url);
    }
}

/// Borrowed view of the running event loop, valid for one callback.
pub struct WinitHost<'a> {
    event_loop: &'a ActiveEventLoop,
    webviews: &'a WebViewManager,
}

impl<'a> WinitHost<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop, webviews: &'a WebViewManager) -> Self {
        Self {
            event_loop,
            webviews,
        }
    }
}

impl BrowserHost for WinitHost<'_> {
    type Window = BrowserWindow;

    fn open_window(&mut self, options: &WindowOptions) -> Result<BrowserWindow, ShellError> {
        let attrs = WindowAttributes::default()
            .with_title(options.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(options.width),
                f64::from(options.height),
            ));

        let window = self
            .event_loop
            .create_window(attrs)
            .map_err(|e| ShellError::Window(e.to_string()))?;

        let key = window_key(window.id());
        let webview = self
            .webviews
            .create(key, &window, &options.webview)
            .map_err(|e| ShellError::WebView(e.to_string()))?;

        Ok(BrowserWindow { webview, window })
    }
}
