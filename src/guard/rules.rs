//! Route classification and the session-gate decision.
//!
//! Everything in this module is a pure function of the request path and the
//! cookie header, so the whole protection policy is unit-testable without a
//! running server.

/// Name of the session cookie set by the auth provider on login/registration.
pub const SESSION_COOKIE: &str = "session_token";

/// Where unauthenticated requests for protected pages are sent.
pub const LOGIN_PATH: &str = "/login";

/// Pages reachable without a session.
const PUBLIC_ROUTES: [&str; 3] = ["/", "/login", "/register"];

/// Auth provider namespace; the login/registration flow itself must never be
/// gated behind the session it is trying to establish.
const AUTH_API_PREFIX: &str = "/api/auth";

/// File extensions served as-is, never classified.
const ASSET_EXTENSIONS: [&str; 6] = ["svg", "png", "jpg", "jpeg", "gif", "webp"];

/// Category a request path falls into. Every path maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Exact match against the public allow-list.
    Public,
    /// Anything under the auth provider's API namespace.
    AuthApi,
    /// Everything else; requires a session cookie.
    Protected,
}

/// Outcome of the guard decision for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the request through unmodified.
    Continue,
    /// Send the client to the given location instead.
    Redirect(String),
}

/// Classifies a request path. Stateless; exact matches for the public list,
/// prefix match for the auth API, protected otherwise.
pub fn classify(path: &str) -> RouteClass {
    if PUBLIC_ROUTES.contains(&path) {
        RouteClass::Public
    } else if path.starts_with(AUTH_API_PREFIX) {
        RouteClass::AuthApi
    } else {
        RouteClass::Protected
    }
}

/// True for paths the guard never looks at: static files, the favicon, and
/// raw image requests.
pub fn is_asset_path(path: &str) -> bool {
    if path.starts_with("/static/") || path == "/favicon.ico" {
        return true;
    }
    path.rsplit_once('.')
        .map(|(_, ext)| ASSET_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// The guard decision: public and auth-API paths always pass, without any
/// cookie inspection; protected paths pass only when a session cookie is
/// present. The cookie's content is never examined here - validity is the
/// backend's job on every API call.
///
/// The redirect carries the original path so the login flow can return the
/// user to where they were headed.
pub fn evaluate(path: &str, has_session: bool) -> GuardOutcome {
    match classify(path) {
        RouteClass::Public | RouteClass::AuthApi => GuardOutcome::Continue,
        RouteClass::Protected => {
            if has_session {
                GuardOutcome::Continue
            } else {
                GuardOutcome::Redirect(format!(
                    "{}?redirect={}",
                    LOGIN_PATH,
                    urlencoding::encode(path)
                ))
            }
        }
    }
}

/// Presence check for the session cookie in a raw `Cookie` header value.
///
/// Only existence counts: an empty value (`session_token=`) is still present.
/// Expiry and validity are the backend's concern, not this layer's.
pub fn has_session_cookie(header: Option<&str>) -> bool {
    let Some(raw) = header else {
        return false;
    };
    raw.split(';').any(|pair| {
        let name = pair.split_once('=').map(|(n, _)| n).unwrap_or(pair);
        name.trim() == SESSION_COOKIE
    })
}

/// The session cookie's value, for handlers that need the token itself
/// (forwarded to the task API as a bearer credential).
pub fn session_cookie_value(header: Option<&str>) -> Option<String> {
    header?.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name.trim() == SESSION_COOKIE).then(|| value.trim().to_string())
    })
}
