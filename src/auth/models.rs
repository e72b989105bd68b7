//! Authentication data models

use serde::{Deserialize, Serialize};

/// Payload for the provider's email sign-in endpoint.
#[derive(Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Payload for the provider's email sign-up endpoint.
#[derive(Debug, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// What the provider hands back on successful sign-in/sign-up. The token is
/// opaque to us; it goes straight into the session cookie.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub token: String,
}

/// Login form fields. `redirect` is carried through from the guard's
/// `?redirect=` query parameter as a hidden input.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub redirect: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub redirect: String,
}
