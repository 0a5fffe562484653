// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::svg_chart::SvgChartRenderer;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{chart_svg, health_check, index, section_json, section_page};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let app_config = load_app_config().context("failed to load configuration")?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&app_config.log.filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create services (application layer)
    let dashboard_service = DashboardService::new(chrono::Local::now().date_naive());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        chart_renderer: SvgChartRenderer::default(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/sections/:slug", get(section_page))
        .route("/sections/:slug/charts/:chart_id", get(chart_svg))
        .route("/api/sections/:slug", get(section_json))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let (host, port) = app_config.server.listen_address();
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    let addr = listener.local_addr().context("failed to read bound address")?;
    tracing::info!("Serving financial dashboards on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
