// src/tasks/registry.rs
//! Per-session controller registry.
//!
//! Each session token gets one `TaskController` behind a `Mutex`. Holding the
//! lock for the whole span of an operation serializes a session's mutations,
//! which is what keeps a double-clicked toggle from racing its own rollback.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Client;
use tokio::sync::{Mutex, RwLock};

use super::client::HttpTaskApi;
use super::controller::TaskController;

#[derive(Clone)]
pub struct ControllerRegistry {
    http: Client,
    base_url: String,
    inner: Arc<RwLock<HashMap<String, Arc<Mutex<TaskController>>>>>,
}

impl ControllerRegistry {
    pub fn new(http: Client, base_url: String) -> Self {
        Self {
            http,
            base_url,
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the controller for a session, creating one on first sight.
    pub async fn for_session(&self, token: &str) -> Arc<Mutex<TaskController>> {
        if let Some(existing) = self.inner.read().await.get(token) {
            return existing.clone();
        }

        let mut map = self.inner.write().await;
        map.entry(token.to_string())
            .or_insert_with(|| {
                let api = HttpTaskApi::new(
                    self.http.clone(),
                    self.base_url.clone(),
                    token.to_string(),
                );
                Arc::new(Mutex::new(TaskController::new(Arc::new(api))))
            })
            .clone()
    }

    /// Drops a session's controller. Called on logout, and whenever the
    /// backend rejects the token - the guard admits any cookie value, so
    /// entries minted for garbage or expired tokens must not linger.
    pub async fn drop_session(&self, token: &str) {
        self.inner.write().await.remove(token);
    }

    #[cfg(test)]
    pub async fn contains(&self, token: &str) -> bool {
        self.inner.read().await.contains_key(token)
    }

    #[cfg(test)]
    pub async fn seed(&self, token: &str, controller: TaskController) {
        self.inner
            .write()
            .await
            .insert(token.to_string(), Arc::new(Mutex::new(controller)));
    }
}
