// src/main.rs
use axum::{
    extract::{DefaultBodyLimit, Extension},
    middleware, Router,
};
use dotenv::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod common;
mod logging_middleware;
mod onboarding;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::{AppConfig, AppState, MAX_BODY_BYTES};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env()?;
    info!(
        port = config.port,
        cors_origins = ?config.cors_origins,
        log_bodies = config.log_bodies,
        "Configuration loaded"
    );

    if let Some(today) = config.fixed_today {
        warn!(%today, "Clock pinned by ONBOARD_FIXED_TODAY; start dates are checked against it");
    }

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let port = config.port;
    let state = Arc::new(AppState::from_config(config));

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let app = build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// ============================================================================
// ROUTER COMPOSITION
// ============================================================================

fn build_app(state: Arc<AppState>) -> Router {
    let mut app = Router::new().merge(onboarding::onboarding_routes());

    if state.config.log_bodies {
        app = app.layer(middleware::from_fn(logging_middleware::log_request_response));
    }

    let origins: Vec<axum::http::HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    app.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(Extension(state))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}
