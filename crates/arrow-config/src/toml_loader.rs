//! TOML config file loading and creation.

use crate::schema::ShellConfig;
use crate::validation;
use crate::{ConfigSource, LoadedConfig};
use arrow_common::ConfigError;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "broken-arrow";

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. A config that parses but fails
/// validation is a [`ConfigError::ValidationError`]; falling back to the
/// defaults is the caller's call.
pub fn load_from_path(path: &Path) -> Result<ShellConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: ShellConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/broken-arrow/config.toml`
/// On Linux: `~/.config/broken-arrow/config.toml`
///
/// If the file does not exist, writes a commented default and returns defaults.
pub fn load_default() -> Result<LoadedConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        create_default_config(&path)?;
        return Ok(LoadedConfig {
            config: ShellConfig::default(),
            source: ConfigSource::CreatedDefault(path),
        });
    }

    let config = load_from_path(&path)?;
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path),
    })
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::DirectoryError("could not determine config directory".into())
    })?;
    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::DirectoryError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# Broken Arrow Configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Broken Arrow (v0.1)"
# width = 1200           # 200-16384
# height = 800           # 200-16384
# dynamic_title = true   # follow the page title

[browser]
# start_url = "https://www.google.com"   # or "arrow://localhost/home.html"
# user_agent = "BrokenArrow/0.1"
# devtools = false

[lifecycle]
# Unset: quit when the last window closes, except on macOS.
# quit_on_all_windows_closed = true

[logging]
# level = "arrow=info"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_broken_arrow_config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[window]
width = 1440
height = 900

[browser]
start_url = "https://example.com"
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.width, 1440);
        assert_eq!(config.window.height, 900);
        assert_eq!(config.browser.start_url, "https://example.com");
        // Defaults preserved
        assert_eq!(config.window.title, "Broken Arrow (v0.1)");
        assert!(config.lifecycle.quit_on_all_windows_closed.is_none());
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_config_with_invalid_values_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[window]
width = 10
"#,
        )
        .unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("window.width = 10"));
    }

    #[test]
    fn create_and_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken-arrow").join("config.toml");

        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.browser.start_url, "https://www.google.com");
        assert_eq!(config.window.width, 1200);
    }

    #[test]
    fn default_config_toml_is_valid() {
        let config: ShellConfig = toml::from_str(&default_config_toml()).unwrap();
        assert!(validation::validate(&config).is_ok());
    }

    #[test]
    fn default_config_path_is_reasonable() {
        // Headless CI may have no config directory at all
        if let Ok(path) = default_config_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("broken-arrow"));
            assert!(path_str.ends_with("config.toml"));
        }
    }
}
