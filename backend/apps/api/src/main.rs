//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::sync::Arc;
use std::time::Duration;

use access::{InMemorySkillRepository, access_router};
use axum::{
    Router,
    http::{Method, header},
};
use catalog::{CatalogLimiters, InMemoryToolRepository, catalog_router};
use kernel::error::app_error::AppError;
use news::{InMemoryNewsRepository, news_router};
use platform::clock::SystemClock;
use platform::rate_limit::InMemoryRateLimitStore;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

/// How often stale rate limit counters are dropped
const PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,access=info,catalog=info,news=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let clock = SystemClock::shared();

    // Listings
    let skills = match &config.skills_path {
        Some(path) => InMemorySkillRepository::load(path).await?,
        None => {
            tracing::warn!("SKILLS_DATA_PATH not set, serving an empty skills listing");
            InMemorySkillRepository::default()
        }
    };
    let tools = match &config.tools_path {
        Some(path) => InMemoryToolRepository::load(path).await?,
        None => {
            tracing::warn!("TOOLS_DATA_PATH not set, serving an empty tools catalog");
            InMemoryToolRepository::default()
        }
    };
    let stories = match &config.news_path {
        Some(path) => InMemoryNewsRepository::load(path).await?,
        None => {
            tracing::warn!("NEWS_DATA_PATH not set, serving an empty news feed");
            InMemoryNewsRepository::default()
        }
    };

    // Rate limit counters live for the process; expired ones are swept
    let limiters = CatalogLimiters::in_memory(clock.clone());
    limiters.spawn_purge_tasks(PURGE_INTERVAL);
    let news_limiter = Arc::new(InMemoryRateLimitStore::new(clock.clone()));
    news_limiter.spawn_purge_task(PURGE_INTERVAL);

    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api/cc-skills",
            access_router(skills, config.access, clock.clone()),
        )
        .nest(
            "/api/tools",
            catalog_router(tools, config.catalog, limiters, clock.clone()),
        )
        .nest(
            "/api/news",
            news_router(stories, config.news, news_limiter, clock),
        )
        .fallback(|| async { AppError::not_found("No such endpoint") })
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
