//! WebView layer for the Broken Arrow shell.
//!
//! Wraps the `wry` crate to provide:
//! - One sandboxed WebView per top-level window
//! - The `window.browserAPI` bridge and its one-way IPC command
//! - Address normalization for `open-url` requests
//! - A navigation guard and the `arrow://` protocol for bundled pages
//! - Event collection (page load, title change, IPC)

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;

pub use content::{address_page_url, home_page_url, ContentProvider};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload, ShellCommand};
pub use manager::{Waker, WebViewConfig, WebViewHandle, WebViewManager};
pub use navigation::{is_navigation_allowed, normalize_address, HistoryStep};
