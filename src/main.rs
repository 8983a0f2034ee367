//! Portfolio server
//!
//! Entry point: serves the portfolio page, or writes it to a file with
//! `--render <PATH>`.

use std::sync::Arc;

use adeola_portfolio::AppState;
use adeola_portfolio::clock::SystemClock;
use adeola_portfolio::config::{AppConfig, Cli};
use adeola_portfolio::export::write_page;
use adeola_portfolio::server::start_server;
use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli).context("Failed to load configuration")?;

    info!(
        name: "site.config.loaded",
        variant = %config.site.variant,
        address = %config.bind_addr(),
        "Configuration loaded"
    );

    if let Some(path) = &cli.render {
        write_page(path, config.site.variant, &SystemClock)?;
        return Ok(());
    }

    let state = AppState::new(config, Arc::new(SystemClock));
    start_server(state).await?;
    Ok(())
}
