mod cli;
mod shell;
mod toolkit;

use std::process::ExitCode;

use arrow_common::ShellError;
use arrow_config::ShellConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use shell::{BrowserApp, ShellEvent};

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}

fn init_logging(directive: &str) {
    let directive: Directive = directive
        .parse()
        .or_else(|_| arrow_config::schema::DEFAULT_LOG_DIRECTIVE.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can seed the subscriber; what
    // happened while loading is reported once logging is up
    let loaded = match &args.config {
        Some(path) => arrow_config::load_config_from(path),
        None => arrow_config::load_config(),
    };
    let (config, source) = match loaded {
        Ok(loaded) => (loaded.config, Ok(loaded.source)),
        Err(e) => (ShellConfig::default(), Err(e)),
    };

    init_logging(args.log_level.as_deref().unwrap_or(&config.logging.level));
    install_panic_hook();

    tracing::info!("Broken Arrow v{} starting...", env!("CARGO_PKG_VERSION"));
    match source {
        Ok(source) => tracing::info!("{source}"),
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    let start_url = args.start_url(&config.browser.start_url);
    tracing::info!(url = %start_url, "start address");

    match run(&config, start_url) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Exiting after fatal error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ShellConfig, start_url: String) -> arrow_common::Result<()> {
    toolkit::init()?;

    let event_loop = EventLoop::<ShellEvent>::with_user_event()
        .build()
        .map_err(|e| ShellError::EventLoop(format!("failed to create event loop: {e}")))?;

    if let Err(e) = toolkit::install_reopen_hook(event_loop.create_proxy()) {
        tracing::warn!("Dock reopen unavailable: {e}");
    }

    let mut app = BrowserApp::new(config, start_url, event_loop.create_proxy());

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| ShellError::EventLoop(e.to_string()))?;

    match app.take_fatal_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
