//! Local content serving via the `arrow://` custom protocol.
//!
//! Lets a window load bundled HTML/JS/CSS (the built-in start page, for
//! one) without running a local HTTP server.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Built-in start page, served at `arrow://localhost/home.html`.
pub const HOME_PAGE_PATH: &str = "home.html";
const HOME_PAGE_HTML: &str = include_str!("../../../assets/home/index.html");

/// Serves local files from a base directory via custom protocol.
///
/// `arrow://localhost/docs/index.html` resolves to
/// `{base_dir}/docs/index.html`. In-memory overrides take precedence over
/// the filesystem.
pub struct ContentProvider {
    /// Base directory for resolving asset paths.
    base_dir: PathBuf,
    /// In-memory overrides: path -> (mime, data).
    overrides: HashMap<String, (String, Vec<u8>)>,
}

impl ContentProvider {
    /// Create a new content provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Create a provider rooted at `base_dir` that also serves the
    /// built-in start page.
    pub fn with_home_page(base_dir: impl Into<PathBuf>) -> Self {
        let mut provider = Self::new(base_dir);
        provider.add_override(HOME_PAGE_PATH, "text/html", HOME_PAGE_HTML);
        provider
    }

    /// Register an in-memory asset override.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let file_path = self.base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }
}

/// Address of the built-in start page as the engine sees it.
///
/// WebView2 serves custom protocols under `http://<scheme>.localhost`.
pub fn home_page_url() -> String {
    if cfg!(target_os = "windows") {
        format!("http://arrow.localhost/{HOME_PAGE_PATH}")
    } else {
        format!("arrow://localhost/{HOME_PAGE_PATH}")
    }
}

/// The start page with its address bar pre-filled with `current`.
///
/// The address rides in the fragment, which the page decodes with
/// `decodeURIComponent`; only the characters that would end or corrupt the
/// fragment are escaped.
pub fn address_page_url(current: &str) -> String {
    let mut url = home_page_url();
    if current.is_empty() || current == "about:blank" {
        return url;
    }
    url.push('#');
    for c in current.chars() {
        match c {
            '%' => url.push_str("%25"),
            '#' => url.push_str("%23"),
            ' ' => url.push_str("%20"),
            _ => url.push(c),
        }
    }
    url
}

/// Strip the scheme and host from an `arrow://` request URI.
///
/// WebView2 delivers these as `http://arrow.localhost/…`, so that form is
/// accepted as well. Query strings and fragments are dropped.
pub fn request_path(uri: &str) -> &str {
    let path = uri
        .strip_prefix("arrow://localhost/")
        .or_else(|| uri.strip_prefix("http://arrow.localhost/"))
        .or_else(|| uri.strip_prefix("arrow://localhost"))
        .or_else(|| uri.strip_prefix("arrow:///"))
        .or_else(|| uri.strip_prefix("arrow://"))
        .unwrap_or("");
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_url_resolves_through_request_path() {
        assert_eq!(request_path(&home_page_url()), HOME_PAGE_PATH);
    }

    #[test]
    fn address_page_carries_current_url_in_fragment() {
        let url = address_page_url("https://example.com/a b?q=50%#top");
        let (page, fragment) = url.split_once('#').unwrap();
        assert_eq!(page, home_page_url());
        assert_eq!(fragment, "https://example.com/a%20b?q=50%25%23top");
        assert_eq!(request_path(&url), HOME_PAGE_PATH);
    }

    #[test]
    fn address_page_without_current_url_has_no_fragment() {
        assert_eq!(address_page_url(""), home_page_url());
        assert_eq!(address_page_url("about:blank"), home_page_url());
    }

    #[test]
    fn home_page_override_is_served() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ContentProvider::with_home_page(dir.path());
        let (mime, data) = provider.resolve("home.html").unwrap();
        assert_eq!(mime, "text/html");
        let html = String::from_utf8_lossy(&data);
        assert!(html.contains("browserAPI.openURL"));
    }

    #[test]
    fn leading_slash_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ContentProvider::with_home_page(dir.path());
        assert!(provider.resolve("/home.html").is_some());
    }

    #[test]
    fn resolves_files_from_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/style.css"), "body{}").unwrap();

        let provider = ContentProvider::new(dir.path());
        let (mime, data) = provider.resolve("docs/style.css").unwrap();
        assert_eq!(mime, "text/css");
        assert_eq!(&*data, b"body{}");
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ContentProvider::new(dir.path());
        assert!(provider.resolve("nope.html").is_none());
    }

    #[test]
    fn directory_is_not_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        let provider = ContentProvider::new(dir.path());
        assert!(provider.resolve("docs").is_none());
    }

    #[test]
    fn traversal_outside_base_is_rejected() {
        let outer = tempfile::tempdir().unwrap();
        let base = outer.path().join("assets");
        std::fs::create_dir_all(&base).unwrap();
        std::fs::write(outer.path().join("secret.txt"), "s3cret").unwrap();

        let provider = ContentProvider::new(&base);
        assert!(provider.resolve("../secret.txt").is_none());
        assert!(provider.resolve("/../secret.txt").is_none());
    }

    #[test]
    fn override_beats_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("home.html"), "on disk").unwrap();
        let provider = ContentProvider::with_home_page(dir.path());
        let (_, data) = provider.resolve("home.html").unwrap();
        assert_ne!(&*data, b"on disk");
    }

    #[test]
    fn request_path_strips_scheme_and_host() {
        assert_eq!(request_path("arrow://localhost/home.html"), "home.html");
        assert_eq!(request_path("http://arrow.localhost/home.html"), "home.html");
        assert_eq!(request_path("arrow://localhost"), "");
        assert_eq!(request_path("arrow:///docs/a.css"), "docs/a.css");
        assert_eq!(request_path("arrow://localhost/home.html?x=1#top"), "home.html");
        assert_eq!(request_path("https://example.com/home.html"), "");
    }

    #[test]
    fn mime_guesses() {
        assert_eq!(mime_from_extension(Path::new("a.html")), "text/html");
        assert_eq!(mime_from_extension(Path::new("a.mjs")), "application/javascript");
        assert_eq!(mime_from_extension(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(mime_from_extension(Path::new("noext")), "application/octet-stream");
    }
}
