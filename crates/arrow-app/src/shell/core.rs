//! BrowserApp struct definition and constructor.

use std::sync::{Arc, Mutex};

use arrow_common::ShellError;
use arrow_config::ShellConfig;
use arrow_webview::{ContentProvider, WebViewConfig, WebViewManager};
use winit::event_loop::EventLoopProxy;
use winit::keyboard::ModifiersState;

use super::context::{QuitPolicy, ShellContext, WindowOptions};
use super::host::BrowserWindow;

/// Directory, relative to the working directory, served under `arrow://`.
const ASSETS_DIR: &str = "assets";

/// Custom events delivered through the winit event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// A WebView queued one or more events.
    WebViewActivity,
    /// The platform asked the app to show itself again.
    Reopen,
}

/// Top-level application state.
pub struct BrowserApp {
    pub(super) context: ShellContext<BrowserWindow>,
    pub(super) webviews: WebViewManager,
    pub(super) dynamic_title: bool,
    pub(super) modifiers: ModifiersState,

    // Set once "ready" has run
    pub(super) started: bool,

    // Window creation failure; checked by `main` after the loop returns
    pub(super) fatal: Option<ShellError>,
}

impl BrowserApp {
    pub fn new(config: &ShellConfig, start_url: String, proxy: EventLoopProxy<ShellEvent>) -> Self {
        let policy = QuitPolicy {
            quit_on_all_windows_closed: config.lifecycle.effective_quit_on_all_windows_closed(),
        };

        Self {
            context: ShellContext::new(window_options(config), start_url, policy),
            webviews: webview_manager(proxy),
            dynamic_title: config.window.dynamic_title,
            modifiers: ModifiersState::empty(),
            started: false,
            fatal: None,
        }
    }

    /// The fatal error that stopped the event loop, if any.
    pub fn take_fatal_error(&mut self) -> Option<ShellError> {
        self.fatal.take()
    }
}

/// Window options from config; the sandbox part of the WebView config is fixed.
pub(super) fn window_options(config: &ShellConfig) -> WindowOptions {
    WindowOptions {
        title: config.window.title.clone(),
        width: config.window.width,
        height: config.window.height,
        webview: WebViewConfig::sandboxed(config.browser.devtools, config.browser.user_agent.clone()),
    }
}

fn webview_manager(proxy: EventLoopProxy<ShellEvent>) -> WebViewManager {
    let assets = std::env::current_dir().unwrap_or_default().join(ASSETS_DIR);
    if !assets.is_dir() {
        tracing::debug!(
            path = %assets.display(),
            "assets directory not found; only the built-in home page is served"
        );
    }

    let mut manager = WebViewManager::new();
    manager.set_content_provider(ContentProvider::with_home_page(&assets));

    let proxy = Mutex::new(proxy);
    manager.set_waker(Arc::new(move || {
        if let Ok(proxy) = proxy.lock() {
            // Closed loop means we are shutting down; nothing left to wake
            let _ = proxy.send_event(ShellEvent::WebViewActivity);
        }
    }));
    manager
}
