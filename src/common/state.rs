// Application state shared across all modules

use reqwest::Client;

use crate::tasks::registry::ControllerRegistry;

/// Application state containing the outbound HTTP client, upstream base URLs,
/// and the per-session task controller registry
#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    /// Base URL of the remote task API, e.g. `http://localhost:8000/api`
    pub task_api_url: String,
    /// Base URL of the authentication provider, e.g. `http://localhost:3001/api/auth`
    pub auth_api_url: String,
    pub controllers: ControllerRegistry,
}
