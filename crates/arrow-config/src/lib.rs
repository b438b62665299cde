//! Broken Arrow configuration.
//!
//! TOML-based configuration for the browser shell. Every section uses
//! serde defaults, so a partial (or empty) file works out of the box.
//!
//! Loading happens before logging is set up, so nothing here logs. Callers
//! get the [`ConfigSource`] back and report it once a subscriber exists.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let loaded = arrow_config::load_config().expect("failed to load config");
//! println!("{}", loaded.config.browser.start_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BrowserConfig, LifecycleConfig, LoggingConfig, ShellConfig, WindowConfig};

use std::fmt;
use std::path::{Path, PathBuf};

use arrow_common::ConfigError;

/// Where a loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing file.
    File(PathBuf),
    /// No file existed; a commented default was written here.
    CreatedDefault(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "loaded config from {}", path.display()),
            Self::CreatedDefault(path) => write!(f, "created default config at {}", path.display()),
        }
    }
}

/// A validated config and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ShellConfig,
    pub source: ConfigSource,
}

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is an error rather than a
/// prompt to write defaults.
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path.to_path_buf()),
    })
}
