//! Address handling for navigation requests coming from page content.

/// Scheme prepended to addresses that arrive without one.
pub const DEFAULT_SCHEME: &str = "https://";

/// Prefixes that count as an explicit network scheme.
const NETWORK_SCHEMES: &[&str] = &["http://", "https://"];

/// Allowed URL prefixes for navigation.
///
/// - `http://` and `https://` cover ordinary browsing, including
///   `http://arrow.localhost/...`, which WebView2 rewrites `arrow://` to.
/// - `arrow://` serves bundled pages from [`crate::ContentProvider`].
/// - `about:blank` and `about:srcdoc` are the engine's empty and inline
///   frame documents.
/// - `blob:` covers object URLs that pages create for downloads and previews.
///
/// External handlers such as `mailto:` stay blocked: the shell has no way to
/// hand them to another application.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "https://",
    "http://",
    "arrow://",
    "about:blank",
    "about:srcdoc",
    "blob:",
];

/// A move through a window's session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStep {
    Back,
    Forward,
    Reload,
}

/// Normalize a candidate address from an `open-url` request.
///
/// Surrounding whitespace (including a stray byte-order mark) is trimmed,
/// as JavaScript's `String.prototype.trim` does. An empty result yields `None`, which
/// callers treat as "do nothing". Anything not already starting with
/// `http://` or `https://` gets [`DEFAULT_SCHEME`] in front; the check is
/// case-sensitive.
pub fn normalize_address(raw: &str) -> Option<String> {
    let target = raw.trim_matches(is_trimmed);
    if target.is_empty() {
        return None;
    }

    if has_network_scheme(target) {
        Some(target.to_string())
    } else {
        Some(format!("{DEFAULT_SCHEME}{target}"))
    }
}

fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Whether `address` already starts with `http://` or `https://`.
pub fn has_network_scheme(address: &str) -> bool {
    NETWORK_SCHEMES.iter().any(|scheme| address.starts_with(scheme))
}

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}
