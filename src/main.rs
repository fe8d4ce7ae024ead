//! vrtodo - VR todo-list visualizer core.
//!
//! The binary runs the headless demo: fetch, scripted interaction, and a
//! fixed-step frame loop. The actual 3D presentation layer is a separate
//! consumer of [`vrtodo::session::Session`].

use anyhow::Result;
use tracing::info;
use vrtodo::config::AppConfig;

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting vrtodo v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    vrtodo::headless::run(&config)
}
