use std::path::PathBuf;

use arrow_webview::normalize_address;
use clap::Parser;

/// Broken Arrow: a minimal desktop shell around the platform browser engine.
#[derive(Parser, Debug)]
#[command(name = "broken-arrow", version, about)]
pub struct Args {
    /// Address to open instead of the configured start page.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `arrow=debug`, `warn`).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// The address the first window loads.
    ///
    /// A command-line URL is normalized like an `open-url` request; if it
    /// normalizes to nothing, the configured start page wins.
    pub fn start_url(&self, configured: &str) -> String {
        self.url
            .as_deref()
            .and_then(normalize_address)
            .unwrap_or_else(|| configured.to_string())
    }
}

pub fn parse() -> Args {
    Args::parse()
}
