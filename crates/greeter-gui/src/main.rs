//! greeter GUI application
//!
//! A window that asks for a name and greets it in a modal dialog.

mod app;
mod components;
mod views;

use iced::Size;
use tracing_subscriber::EnvFilter;

use app::Greeter;
use greeter_core::WindowConfig;

/// Main entry point for the GUI application.
fn main() -> anyhow::Result<()> {
    init_logging();

    let config = WindowConfig::default();
    tracing::info!(
        title = config.title,
        width = config.width,
        height = config.height,
        "Starting greeter window"
    );

    iced::application(config.title, Greeter::update, Greeter::view)
        .subscription(Greeter::subscription)
        .window_size(Size::new(config.width, config.height))
        .resizable(config.resizable)
        .run()
        .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

fn init_logging() {
    // RUST_LOG only changes what gets logged, never how the window behaves
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
