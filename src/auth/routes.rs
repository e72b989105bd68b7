//! Authentication routes

use axum::{
    routing::{any, get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /login` / `POST /login` - Sign-in form and submission
/// - `GET /register` / `POST /register` - Registration form and submission
/// - `POST /logout` - Clear the session cookie
/// - `/api/auth/*` - Reverse proxy to the auth provider
pub fn auth_routes() -> Router {
    Router::new()
        .route(
            "/login",
            get(handlers::login_page).post(handlers::login_submit),
        )
        .route(
            "/register",
            get(handlers::register_page).post(handlers::register_submit),
        )
        .route("/logout", post(handlers::logout))
        .route("/api/auth/*path", any(handlers::proxy))
}
