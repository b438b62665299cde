//! Configuration validation.
//!
//! Collects every problem into a single `ValidationError` so a user sees
//! all of them at once.

use crate::schema::ShellConfig;
use arrow_common::ConfigError;

/// Smallest and largest accepted initial window edge, in logical pixels.
pub const MIN_WINDOW_EDGE: u32 = 200;
pub const MAX_WINDOW_EDGE: u32 = 16384;

/// Schemes a configured start address may use.
const START_URL_PREFIXES: &[&str] = &["https://", "http://", "arrow://"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "window.width",
        config.window.width,
        MIN_WINDOW_EDGE,
        MAX_WINDOW_EDGE,
    );
    validate_range(
        &mut errors,
        "window.height",
        config.window.height,
        MIN_WINDOW_EDGE,
        MAX_WINDOW_EDGE,
    );

    validate_start_url(&mut errors, &config.browser.start_url);

    if let Some(ua) = &config.browser.user_agent {
        if ua.trim().is_empty() {
            errors.push("browser.user_agent must not be blank".into());
        }
    }

    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be blank".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_start_url(errors: &mut Vec<String>, url: &str) {
    if url == "about:blank" {
        return;
    }
    if !START_URL_PREFIXES.iter().any(|p| url.starts_with(p)) {
        errors.push(format!(
            "browser.start_url = {url:?} must start with http://, https:// or arrow://"
        ));
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&ShellConfig::default()).is_ok());
    }

    #[test]
    fn catches_window_too_small() {
        let mut config = ShellConfig::default();
        config.window.width = 50;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.width"));
    }

    #[test]
    fn catches_window_too_large() {
        let mut config = ShellConfig::default();
        config.window.height = 20_000;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.height"));
    }

    #[test]
    fn accepts_window_edge_bounds() {
        let mut config = ShellConfig::default();
        config.window.width = MIN_WINDOW_EDGE;
        config.window.height = MAX_WINDOW_EDGE;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn accepts_supported_start_urls() {
        for url in [
            "https://example.com",
            "http://localhost:8000",
            "arrow://localhost/home.html",
            "about:blank",
        ] {
            let mut config = ShellConfig::default();
            config.browser.start_url = url.into();
            assert!(validate(&config).is_ok(), "{url} should be accepted");
        }
    }

    #[test]
    fn rejects_forbidden_start_url_schemes() {
        for url in [
            "file:///etc/passwd",
            "javascript:alert(1)",
            "data:text/html,<h1>hi</h1>",
            "example.com",
            "",
        ] {
            let mut config = ShellConfig::default();
            config.browser.start_url = url.into();
            let err = validate(&config).unwrap_err().to_string();
            assert!(err.contains("browser.start_url"), "{url} should be rejected");
        }
    }

    #[test]
    fn catches_blank_user_agent() {
        let mut config = ShellConfig::default();
        config.browser.user_agent = Some("   ".into());
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("browser.user_agent"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = ShellConfig::default();
        config.window.width = 0;
        config.logging.level = String::new();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.width"));
        assert!(err.contains("logging.level"));
        assert!(err.contains("; "));
    }
}
