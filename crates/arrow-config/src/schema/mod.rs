//! Configuration schema types for Broken Arrow.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod browser;
mod lifecycle;
mod logging;
mod window;

pub use browser::*;
pub use lifecycle::*;
pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the browser shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub window: WindowConfig,
    pub browser: BrowserConfig,
    pub lifecycle: LifecycleConfig,
    pub logging: LoggingConfig,
}
