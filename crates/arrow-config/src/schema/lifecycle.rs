//! Process lifecycle configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Exit once the last window closes. Unset means the platform
    /// convention: stay resident on macOS, quit elsewhere.
    pub quit_on_all_windows_closed: Option<bool>,
}

impl LifecycleConfig {
    /// Resolve the effective quit behavior for the current platform.
    pub fn effective_quit_on_all_windows_closed(&self) -> bool {
        self.quit_on_all_windows_closed
            .unwrap_or(!cfg!(target_os = "macos"))
    }
}
