// src/auth/handlers.rs
//! Login, registration, and logout flows, plus the /api/auth reverse proxy.

use axum::{
    body::Body,
    extract::{Extension, Form, Query, Request},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::client::AuthClient;
use super::models::{LoginForm, LoginQuery, RegisterForm, SignInRequest, SignUpRequest};
use crate::common::{ApiError, AppState, ClientError};
use crate::guard::rules::{session_cookie_value, SESSION_COOKIE};

/// GET /login
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    Html(render_login_page(None, &query.redirect))
}

/// GET /register
pub async fn register_page() -> Html<String> {
    Html(render_register_page(None))
}

/// POST /login - relay credentials to the provider; on success set the
/// session cookie and return the user to where the guard intercepted them.
pub async fn login_submit(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    if form.email.is_empty() || form.password.is_empty() {
        return Ok(Html(render_login_page(
            Some("Email and password are required"),
            &form.redirect,
        ))
        .into_response());
    }

    let state = state_lock.read().await.clone();
    let client = AuthClient::new(state.http.clone(), state.auth_api_url.clone());
    let payload = SignInRequest {
        email: form.email,
        password: form.password,
    };

    match client.sign_in(&payload).await {
        Ok(session) => {
            info!("Login succeeded");
            let target = safe_redirect_target(&form.redirect);
            Ok((
                [(SET_COOKIE, session_cookie(&session.token))],
                Redirect::to(&target),
            )
                .into_response())
        }
        Err(e) => {
            warn!(error = %e, "Login failed");
            Ok(Html(render_login_page(Some(&e.user_message()), &form.redirect)).into_response())
        }
    }
}

/// POST /register
pub async fn register_submit(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, ApiError> {
    if form.email.is_empty() || form.password.is_empty() {
        return Ok(Html(render_register_page(Some(
            "Email and password are required",
        )))
        .into_response());
    }
    if form.password.len() < 8 {
        return Ok(Html(render_register_page(Some(
            "Password must be at least 8 characters",
        )))
        .into_response());
    }

    let state = state_lock.read().await.clone();
    let client = AuthClient::new(state.http.clone(), state.auth_api_url.clone());
    let payload = SignUpRequest {
        name: form.name,
        email: form.email,
        password: form.password,
    };

    match client.sign_up(&payload).await {
        Ok(session) => {
            info!("Registration succeeded");
            Ok((
                [(SET_COOKIE, session_cookie(&session.token))],
                Redirect::to("/tasks"),
            )
                .into_response())
        }
        Err(e) => {
            warn!(error = %e, "Registration failed");
            Ok(Html(render_register_page(Some(&e.user_message()))).into_response())
        }
    }
}

/// POST /logout - clear the cookie and drop the session's controller.
pub async fn logout(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let state = state_lock.read().await.clone();
    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|h| h.to_str().ok());
    if let Some(token) = session_cookie_value(cookie_header) {
        state.controllers.drop_session(&token).await;
    }

    Ok((
        [(SET_COOKIE, expired_session_cookie())],
        Redirect::to("/"),
    )
        .into_response())
}

/// Reverse proxy for everything under /api/auth, so browser-side calls to the
/// provider keep working through this origin. Method, query, body, and the
/// relevant headers pass through in both directions.
pub async fn proxy(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    request: Request,
) -> Result<Response, ApiError> {
    let state = state_lock.read().await.clone();

    let path = request.uri().path().to_string();
    let suffix = path.strip_prefix("/api/auth").unwrap_or("");
    let query = request
        .uri()
        .query()
        .map(|q| format!("?{}", q))
        .unwrap_or_default();
    let url = format!(
        "{}{}{}",
        state.auth_api_url.trim_end_matches('/'),
        suffix,
        query
    );

    let method = reqwest::Method::from_bytes(request.method().as_str().as_bytes())
        .map_err(|_| ApiError::BadRequest("unsupported method".to_string()))?;

    // Only the headers the provider actually needs cross the boundary.
    let mut outbound = state.http.request(method, url.as_str());
    for name in ["cookie", "content-type", "authorization"] {
        if let Some(value) = request.headers().get(name).and_then(|v| v.to_str().ok()) {
            outbound = outbound.header(name, value);
        }
    }

    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|_| ApiError::BadRequest("unreadable request body".to_string()))?;
    if !body.is_empty() {
        outbound = outbound.body(body.to_vec());
    }

    let upstream = outbound
        .send()
        .await
        .map_err(|e| ApiError::UpstreamError(ClientError::Network(e)))?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    debug!(path = %path, status = %status, "Proxied auth request");

    let mut response = Response::builder().status(status);
    for name in ["set-cookie", "content-type"] {
        for value in upstream.headers().get_all(name) {
            if let Ok(value) = value.to_str() {
                response = response.header(name, value);
            }
        }
    }

    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ApiError::UpstreamError(ClientError::Network(e)))?;
    response
        .body(Body::from(bytes))
        .map_err(|e| ApiError::InternalServer(e.to_string()))
}

// ============================================================================
// Helpers
// ============================================================================

/// Keeps the post-login redirect on this site: only absolute local paths are
/// honored, everything else falls back to the task list.
pub fn safe_redirect_target(raw: &str) -> String {
    if raw.starts_with('/') && !raw.starts_with("//") {
        raw.to_string()
    } else {
        "/tasks".to_string()
    }
}

fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, token
    )
}

fn expired_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_login_page(error: Option<&str>, redirect: &str) -> String {
    let error_banner = error
        .map(|msg| format!(r#"<p class="error">{}</p>"#, escape(msg)))
        .unwrap_or_default();
    format!(
        r#"<!doctype html>
<html>
<head><title>Sign in - Taskboard</title><link rel="stylesheet" href="/static/app.css"></head>
<body>
<main>
<h1>Welcome back</h1>
{error_banner}
<form method="post" action="/login">
  <input type="hidden" name="redirect" value="{redirect}">
  <label>Email <input type="email" name="email"></label>
  <label>Password <input type="password" name="password"></label>
  <button type="submit">Sign in</button>
</form>
<p>No account yet? <a href="/register">Create one</a></p>
</main>
</body>
</html>
"#,
        error_banner = error_banner,
        redirect = escape(redirect),
    )
}

fn render_register_page(error: Option<&str>) -> String {
    let error_banner = error
        .map(|msg| format!(r#"<p class="error">{}</p>"#, escape(msg)))
        .unwrap_or_default();
    format!(
        r#"<!doctype html>
<html>
<head><title>Create account - Taskboard</title><link rel="stylesheet" href="/static/app.css"></head>
<body>
<main>
<h1>Create your account</h1>
{error_banner}
<form method="post" action="/register">
  <label>Name <input name="name"></label>
  <label>Email <input type="email" name="email"></label>
  <label>Password <input type="password" name="password"></label>
  <button type="submit">Create account</button>
</form>
<p>Already registered? <a href="/login">Sign in</a></p>
</main>
</body>
</html>
"#,
        error_banner = error_banner,
    )
}
