mod config;
mod content;
mod errors;
mod export;
mod models;
mod render;
mod routes;
mod state;
mod validation;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::export_page;
use crate::render::RenderOptions;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    // Render once; handlers only ever read the result.
    let options = RenderOptions {
        year: Utc::now().year(),
    };
    let state =
        AppState::build(content::portfolio(), &options).context("Failed to render page")?;
    info!("Rendered page ({} bytes)", state.page.len());

    if state.links.passed {
        info!("Link check passed ({} links)", state.links.checked);
    } else {
        for issue in &state.links.issues {
            warn!("Link check: {} ({:?}): {}", issue.href, issue.kind, issue.message);
        }
    }

    if let Some(path) = &config.export_path {
        export_page(path, &state.page)
            .await
            .with_context(|| format!("Failed to export page to {}", path.display()))?;
    }

    if !config.serve {
        info!("SITE_SERVE is off; exiting after export");
        return Ok(());
    }

    let app = build_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
