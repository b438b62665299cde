//! Logging configuration.

use serde::{Deserialize, Serialize};

/// `tracing` filter directive used when neither `--log-level` nor
/// `RUST_LOG` say otherwise.
pub const DEFAULT_LOG_DIRECTIVE: &str = "arrow=info";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `arrow=debug` or `arrow_webview=trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_DIRECTIVE.into(),
        }
    }
}
