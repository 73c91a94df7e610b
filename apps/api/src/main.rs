mod comparison;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::comparison::aggregator::CompareOptions;
use crate::comparison::aligner::aligner_from_strategy;
use crate::config::Config;
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

    info!("Starting cvdiff API v{}", env!("CARGO_PKG_VERSION"));

    // Engine options and alignment policy come from config
    let options = CompareOptions {
        match_threshold: config.match_threshold,
        case_insensitive_skills: config.case_insensitive_skills,
    };
    let aligner = aligner_from_strategy(&config.align_strategy, config.match_threshold)?;
    info!(
        "Comparison engine: threshold={}, align_strategy={}",
        config.match_threshold, config.align_strategy
    );

    let state = AppState {
        config: config.clone(),
        options,
        aligner,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
