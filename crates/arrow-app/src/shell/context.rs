//! Process-wide shell state: the one window and its lifecycle.
//!
//! The host GUI framework sits behind [`BrowserHost`] so this module has no
//! idea whether it is driving winit + wry or an in-memory stand-in.

use arrow_common::{ShellError, WindowKey};
use arrow_webview::{address_page_url, normalize_address, HistoryStep, ShellCommand, WebViewConfig};

use super::keys::NavAction;

/// A window the shell can navigate.
pub trait HostWindow {
    /// Identity used to match IPC senders to their window.
    fn key(&self) -> WindowKey;

    /// Ask the window's browser engine to load `url`.
    fn load_url(&mut self, url: &str) -> Result<(), ShellError>;

    /// Move through the session history or reload.
    fn step_history(&mut self, step: HistoryStep) -> Result<(), ShellError>;

    fn set_title(&mut self, title: &str);

    /// The last address this window loaded or committed.
    fn current_url(&self) -> &str;

    fn set_current_url(&mut self, url: String);
}

/// The windowing backend that can create browser windows.
pub trait BrowserHost {
    type Window: HostWindow;

    /// Create a window with its WebView attached. Nothing is loaded yet.
    fn open_window(&mut self, options: &WindowOptions) -> Result<Self::Window, ShellError>;
}

/// Everything needed to create a window.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub title: String,
    /// Initial inner size in logical pixels.
    pub width: u32,
    pub height: u32,
    pub webview: WebViewConfig,
}

/// What to do when the last window has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitPolicy {
    pub quit_on_all_windows_closed: bool,
}

impl Default for QuitPolicy {
    /// Quit everywhere except macOS, where apps stay resident.
    fn default() -> Self {
        Self {
            quit_on_all_windows_closed: !cfg!(target_os = "macos"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Quit,
    KeepRunning,
}

/// Platform callbacks that can start or revive the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    /// winit's `resumed`. Desktop platforms send it once, at launch.
    Resumed,
    /// The user asked for the app again (a dock icon click on macOS).
    Reopen,
}

/// Which lifecycle method a host signal maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    Ready,
    Activate,
}

/// Map a host signal to a lifecycle step.
///
/// Only the first `Resumed` is "ready". A reopen is always "activate", even
/// if it races ahead of the launch; `on_ready` then finds the window open.
pub fn lifecycle_step(started: bool, signal: HostSignal) -> LifecycleStep {
    match signal {
        HostSignal::Resumed if !started => LifecycleStep::Ready,
        HostSignal::Resumed | HostSignal::Reopen => LifecycleStep::Activate,
    }
}

/// Result of an `open-url` request. Never reported back to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The sender's window was told to load this address.
    Navigated(String),
    /// The engine refused the load call itself.
    LoadFailed(String),
    Discarded(DiscardReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Empty or whitespace-only address.
    EmptyAddress,
    /// The sender does not belong to the current window.
    UnknownWindow,
}

/// Owns the optional top-level window and applies lifecycle events to it.
pub struct ShellContext<W> {
    window: Option<W>,
    options: WindowOptions,
    start_url: String,
    policy: QuitPolicy,
}

impl<W: HostWindow> ShellContext<W> {
    pub fn new(options: WindowOptions, start_url: impl Into<String>, policy: QuitPolicy) -> Self {
        Self {
            window: None,
            options,
            start_url: start_url.into(),
            policy,
        }
    }

    /// Startup: create the window and load the start address.
    pub fn on_ready<H>(&mut self, host: &mut H) -> Result<(), ShellError>
    where
        H: BrowserHost<Window = W>,
    {
        if self.window.is_some() {
            tracing::debug!("ready received with a window already open");
            return Ok(());
        }
        self.open_window(host)
    }

    /// Recreate the window if none is open. Returns whether one was created.
    pub fn on_activate<H>(&mut self, host: &mut H) -> Result<bool, ShellError>
    where
        H: BrowserHost<Window = W>,
    {
        if self.window.is_some() {
            return Ok(false);
        }
        self.open_window(host)?;
        Ok(true)
    }

    /// Forget the window if `key` is ours. Returns whether it was.
    pub fn on_window_closed(&mut self, key: WindowKey) -> bool {
        if self.window.as_ref().is_some_and(|w| w.key() == key) {
            self.window = None;
            true
        } else {
            false
        }
    }

    pub fn on_all_windows_closed(&self) -> LifecycleAction {
        if self.policy.quit_on_all_windows_closed {
            LifecycleAction::Quit
        } else {
            LifecycleAction::KeepRunning
        }
    }

    /// Apply a command that arrived over IPC from `sender`'s content.
    pub fn handle_command(&mut self, sender: WindowKey, command: ShellCommand) -> RelayOutcome {
        match command {
            ShellCommand::OpenUrl { url } => self.relay_open_url(sender, &url),
        }
    }

    /// Normalize `raw` and load it in the sender's window.
    ///
    /// Empty input and unknown senders are dropped without a trace.
    pub fn relay_open_url(&mut self, sender: WindowKey, raw: &str) -> RelayOutcome {
        let Some(target) = normalize_address(raw) else {
            return RelayOutcome::Discarded(DiscardReason::EmptyAddress);
        };

        let Some(window) = self.window_mut(sender) else {
            return RelayOutcome::Discarded(DiscardReason::UnknownWindow);
        };

        match window.load_url(&target) {
            Ok(()) => RelayOutcome::Navigated(target),
            Err(e) => {
                tracing::warn!(%sender, url = %target, error = %e, "load_url failed");
                RelayOutcome::LoadFailed(target)
            }
        }
    }

    /// Apply a navigation shortcut to the window `key` identifies.
    ///
    /// Returns whether the window exists. Engine errors are logged, not
    /// propagated.
    pub fn apply_nav(&mut self, key: WindowKey, action: NavAction) -> bool {
        let Some(window) = self.window_mut(key) else {
            return false;
        };

        let result = match action {
            NavAction::Back => window.step_history(HistoryStep::Back),
            NavAction::Forward => window.step_history(HistoryStep::Forward),
            NavAction::Reload => window.step_history(HistoryStep::Reload),
            NavAction::OpenAddress => {
                let url = address_page_url(window.current_url());
                window.load_url(&url)
            }
        };

        if let Err(e) = result {
            tracing::warn!(%key, ?action, error = %e, "navigation shortcut failed");
        }
        true
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    /// The window, if `key` identifies it.
    pub fn window_mut(&mut self, key: WindowKey) -> Option<&mut W> {
        self.window.as_mut().filter(|w| w.key() == key)
    }

    pub fn window_count(&self) -> usize {
        usize::from(self.window().is_some())
    }

    /// Remove the window for shutdown.
    pub fn take_window(&mut self) -> Option<W> {
        self.window.take()
    }

    pub fn policy(&self) -> QuitPolicy {
        self.policy
    }

    fn open_window<H>(&mut self, host: &mut H) -> Result<(), ShellError>
    where
        H: BrowserHost<Window = W>,
    {
        let mut window = host.open_window(&self.options)?;
        let key = window.key();
        tracing::info!(%key, url = %self.start_url, "window created");

        if let Err(e) = window.load_url(&self.start_url) {
            tracing::warn!(%key, url = %self.start_url, error = %e, "initial load failed");
        }
        self.window = Some(window);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
