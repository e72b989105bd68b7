// src/guard/middleware.rs
//! Axum middleware applying the guard decision to every navigation.

use axum::{
    extract::Request,
    http::header::COOKIE,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use super::rules::{evaluate, has_session_cookie, is_asset_path, GuardOutcome};

/// Runs before every handler. Asset requests skip straight through; for
/// everything else the decision is a pure function of path and cookie
/// presence, so this middleware never fails and never touches the network.
pub async fn session_guard(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    if is_asset_path(&path) {
        return next.run(request).await;
    }

    let cookie_header = request
        .headers()
        .get(COOKIE)
        .and_then(|h| h.to_str().ok());

    match evaluate(&path, has_session_cookie(cookie_header)) {
        GuardOutcome::Continue => next.run(request).await,
        GuardOutcome::Redirect(location) => {
            debug!(path = %path, location = %location, "No session, redirecting to login");
            Redirect::temporary(&location).into_response()
        }
    }
}
