//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Top-level window appearance.
///
/// The size is the initial inner size in logical pixels; the window stays
/// user-resizable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title, shown until the page reports its own.
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Follow the loaded document's title.
    pub dynamic_title: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Broken Arrow (v0.1)".into(),
            width: 1200,
            height: 800,
            dynamic_title: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Broken Arrow (v0.1)");
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 800);
        assert!(config.dynamic_title);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Arrow"
dynamic_title = false
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Arrow");
        assert!(!config.dynamic_title);
        // Defaults preserved
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 800);
    }
}
