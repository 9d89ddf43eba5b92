//! USWDS Explorer - Main Entry Point
//!
//! Component catalog for the U.S. Web Design System GPUI components.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uswds_gpui::app::application::run_app;
use uswds_gpui::helpers::{get_or_create_data_dir, is_development};

fn main() {
    let default_level = if is_development() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Log to stdout, and to a daily file when the data directory is usable
    let file_writer = get_or_create_data_dir()
        .map(|dir| tracing_appender::rolling::daily(dir.join("logs"), "uswds-explorer.log"))
        .ok()
        .map(tracing_appender::non_blocking);
    let (file_layer, _guard) = match file_writer {
        Some((writer, guard)) => (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting USWDS explorer");

    run_app();
}
