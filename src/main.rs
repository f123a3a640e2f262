// src/main.rs
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use portfolio_client::api::adapter::outgoing::HttpPortfolioApi;
use portfolio_client::config::AppConfig;
use portfolio_client::shell::{HostSnapshot, ShellRuntime};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Renders one route of the portfolio against the configured backend.
#[derive(Debug, Parser)]
#[command(name = "portfolio", version)]
struct Args {
    /// Route to render.
    #[arg(default_value = "/")]
    path: String,

    /// Viewport width in logical pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Bearer token; overrides PORTFOLIO_API_TOKEN.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if let Some(token) = args.token {
        config.api.token = Some(token);
    }

    info!(base_url = %config.api.base_url, path = %args.path, width = args.width, "Rendering route");

    let api = Arc::new(HttpPortfolioApi::new(config.api));
    let mut shell = ShellRuntime::mount(
        api,
        config.shell,
        HostSnapshot {
            width: args.width,
            path: args.path,
            document_complete: true,
        },
    );

    shell.settle().await;
    println!("{}", shell.render());

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error rendering portfolio: {e:#}");
        std::process::exit(1);
    }
}
