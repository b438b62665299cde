//! Identifier types shared between the webview layer and the app shell.

use std::fmt;

/// Opaque identifier of a top-level window.
///
/// Wraps the raw `u64` form of the windowing backend's id so that crates
/// which never link the windowing backend can still route events by window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowKey(pub u64);

impl From<u64> for WindowKey {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<WindowKey> for u64 {
    fn from(key: WindowKey) -> Self {
        key.0
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}
