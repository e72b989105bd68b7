// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod auth;
mod common;
mod guard;
mod pages;
mod tasks;

use common::AppState;
use guard::session_guard;
use tasks::registry::ControllerRegistry;

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

    let task_api_url =
        env::var("TASK_API_URL").unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    let auth_api_url = env::var("AUTH_API_URL")
        .unwrap_or_else(|_| "http://localhost:3001/api/auth".to_string());

    info!("Task API at {}", task_api_url);
    info!("Auth provider at {}", auth_api_url);

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let http_client = Client::builder().no_proxy().build()?;

    let app_state = AppState {
        http: http_client.clone(),
        task_api_url: task_api_url.clone(),
        auth_api_url,
        controllers: ControllerRegistry::new(http_client, task_api_url),
    };

    let shared = Arc::new(RwLock::new(app_state));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        .merge(pages::pages_routes())
        .merge(auth::auth_routes())
        .merge(tasks::tasks_routes())
        // Session gate runs before any handler, on every navigation
        .layer(middleware::from_fn(session_guard))
        .layer(Extension(shared.clone()))
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
