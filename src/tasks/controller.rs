// src/tasks/controller.rs
//! Task-list state and the operations that keep it in step with the backend.
//!
//! The controller owns the in-memory mirror of the user's task list. Every
//! mutation goes through the remote API; the one deliberate divergence is the
//! completion toggle, which flips locally before the request resolves and is
//! rolled back if the request fails. A controller lives behind a per-session
//! `Mutex`, so operations - including rapid toggles on the same task - are
//! applied one at a time and a response can never land on top of a newer
//! optimistic state.

use std::sync::Arc;

use tracing::{debug, warn};

use super::client::TaskApi;
use super::models::{Task, TaskCreate, TaskUpdate};
use super::validators::{TaskInput, TaskInputValidator};
use crate::common::{ClientError, Validator};

pub struct TaskController {
    api: Arc<dyn TaskApi>,
    /// Mirror of the server's list; verbatim after every successful load.
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    /// Edit buffer, keyed to at most one task at a time.
    pub editing_id: Option<i64>,
    pub edit_title: String,
    pub edit_description: String,
}

impl TaskController {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            loading: false,
            error: None,
            editing_id: None,
            edit_title: String::new(),
            edit_description: String::new(),
        }
    }

    /// Fetches the authoritative list and replaces the local one wholesale.
    ///
    /// An auth failure is ignored without touching state: the guard layer is
    /// already steering the user to /login. Any other failure surfaces via
    /// `error` and leaves `tasks` as they were.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.list_tasks().await {
            Ok(response) => {
                debug!(total = response.total, "Loaded task list");
                self.tasks = response.tasks;
                self.error = None;
            }
            Err(e) => self.report("load tasks", e),
        }
        self.loading = false;
    }

    /// Creates a task. An empty-after-trim title is rejected locally and
    /// never reaches the network; on success the list is reloaded so the
    /// server-assigned id and timestamps come back authoritative.
    pub async fn create(&mut self, title: &str, description: &str) {
        self.error = None;

        let check = TaskInputValidator.validate(&TaskInput { title, description });
        if !check.is_valid() {
            self.error = check.first_message().map(String::from);
            return;
        }

        match self.api.create_task(&TaskCreate::new(title, description)).await {
            Ok(task) => {
                debug!(task_id = task.id, "Task created");
                self.load().await;
            }
            Err(e) => self.report("create task", e),
        }
    }

    /// Flips a task's completion flag optimistically, then confirms with the
    /// backend. On failure the flip is reverted, so the list never disagrees
    /// with the server without the user seeing an error. Matching is strictly
    /// by id; toggles on different tasks do not interfere.
    pub async fn toggle_complete(&mut self, id: i64) {
        self.error = None;

        let Some(previous) = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.is_completed)
        else {
            return;
        };
        let target = !previous;

        // Optimistic flip before the request so the UI responds immediately.
        self.set_completed(id, target);

        match self
            .api
            .update_task(id, &TaskUpdate::completion(target))
            .await
        {
            // Local state already matches the server; no re-fetch needed.
            Ok(_) => {}
            Err(e) => {
                self.set_completed(id, previous);
                self.report("toggle task", e);
            }
        }
    }

    /// Populates the edit buffer from the local entry. Purely local.
    pub fn start_edit(&mut self, id: i64) {
        if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
            self.editing_id = Some(id);
            self.edit_title = task.title.clone();
            self.edit_description = task.description.clone().unwrap_or_default();
        }
    }

    /// Clears the edit buffer. Purely local.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.edit_title.clear();
        self.edit_description.clear();
    }

    /// Replaces the buffer contents with what the user typed.
    pub fn update_edit_buffer(&mut self, title: &str, description: &str) {
        self.edit_title = title.to_string();
        self.edit_description = description.to_string();
    }

    /// Saves the edit buffer to the backend. On success the buffer closes and
    /// the list reloads; on failure the buffer stays open for retry.
    pub async fn save_edit(&mut self, id: i64) {
        self.error = None;

        let check = TaskInputValidator.validate(&TaskInput {
            title: &self.edit_title,
            description: &self.edit_description,
        });
        if !check.is_valid() {
            self.error = check.first_message().map(String::from);
            return;
        }

        let payload = TaskUpdate::edit(&self.edit_title, &self.edit_description);
        match self.api.update_task(id, &payload).await {
            Ok(_) => {
                self.cancel_edit();
                self.load().await;
            }
            Err(e) => self.report("save task", e),
        }
    }

    /// Deletes a task. Without explicit confirmation nothing is sent; with
    /// it, exactly one delete call goes out and the list is reloaded.
    pub async fn delete(&mut self, id: i64, confirmed: bool) {
        if !confirmed {
            return;
        }
        self.error = None;

        match self.api.delete_task(id).await {
            Ok(()) => {
                debug!(task_id = id, "Task deleted");
                self.load().await;
            }
            Err(e) => self.report("delete task", e),
        }
    }

    /// Reload for rendering after a mutation settled. Replaces the list like
    /// `load`, but a successful fetch must not wipe the error the mutation
    /// just reported - the banner still has to reach the user. If the fetch
    /// itself fails, its own error takes precedence.
    pub async fn refresh(&mut self) {
        let pending = self.error.take();
        self.load().await;
        if self.error.is_none() {
            self.error = pending;
        }
    }

    /// Asks the backend whether this session's token is still good. The guard
    /// only checks cookie presence; validity is decided here, per request.
    pub async fn validate_session(&self) -> Result<super::models::TokenValidation, ClientError> {
        self.api.validate_token().await
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }

    fn set_completed(&mut self, id: i64, value: bool) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.is_completed = value;
        }
    }

    /// Failure policy shared by every operation: auth failures stay silent
    /// (the login redirect is assumed imminent), everything else becomes a
    /// user-facing message.
    fn report(&mut self, op: &str, err: ClientError) {
        if err.is_auth_failure() {
            debug!(op, "Auth failure, leaving redirect handling to the guard");
            return;
        }
        warn!(op, error = %err, "Task operation failed");
        self.error = Some(err.user_message());
    }
}
