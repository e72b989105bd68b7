//! Public page routes

use axum::{routing::get, Router};

use super::handlers;

pub fn pages_routes() -> Router {
    Router::new().route("/", get(handlers::home_page))
}
