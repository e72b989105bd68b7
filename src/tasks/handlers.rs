// src/tasks/handlers.rs
//! Page and form handlers for the task list.
//!
//! Every mutation follows POST-redirect-GET: the form handler drives the
//! session's controller, then bounces back to /tasks where the current state
//! (including any error banner) is rendered.

use axum::{
    extract::{Extension, Form, Path},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::controller::TaskController;
use crate::common::{ApiError, AppState, ClientError};
use crate::guard::rules::{session_cookie_value, LOGIN_PATH};

#[derive(Deserialize)]
pub struct CreateTaskForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct EditTaskForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct DeleteTaskForm {
    /// The yes/no gate: the delete goes out only when this is "yes".
    #[serde(default)]
    pub confirm: String,
}

/// GET /tasks - render the task list for the current session.
///
/// The guard only checked that a session cookie exists; the backend decides
/// whether the token is actually valid, so a stale one bounces to login here.
pub async fn tasks_page(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let (state, token) = session(&state_lock, &headers).await?;
    let controller = state.controllers.for_session(&token).await;
    let mut ctrl = controller.lock().await;

    match ctrl.validate_session().await {
        Ok(validation) if !validation.valid => {
            debug!(message = %validation.message, "Stale session token, sending to login");
            drop(ctrl);
            state.controllers.drop_session(&token).await;
            return Ok(login_redirect().into_response());
        }
        Err(ClientError::AuthRequired) => {
            drop(ctrl);
            state.controllers.drop_session(&token).await;
            return Ok(login_redirect().into_response());
        }
        // Network or server trouble shows up as a load error below instead.
        _ => {}
    }

    // Re-fetch without erasing the error a just-settled mutation reported;
    // the POST handlers all redirect here and the banner renders from state.
    ctrl.refresh().await;
    Ok(Html(render_tasks_page(&ctrl)).into_response())
}

/// POST /tasks/create
pub async fn create_task(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
    Form(form): Form<CreateTaskForm>,
) -> Result<Redirect, ApiError> {
    let (state, token) = session(&state_lock, &headers).await?;
    let controller = state.controllers.for_session(&token).await;
    controller
        .lock()
        .await
        .create(&form.title, &form.description)
        .await;
    Ok(Redirect::to("/tasks"))
}

/// POST /tasks/:id/toggle
pub async fn toggle_task(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    let (state, token) = session(&state_lock, &headers).await?;
    let controller = state.controllers.for_session(&token).await;
    controller.lock().await.toggle_complete(id).await;
    Ok(Redirect::to("/tasks"))
}

/// GET /tasks/:id/edit - open the edit buffer for one task.
pub async fn start_edit(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    let (state, token) = session(&state_lock, &headers).await?;
    let controller = state.controllers.for_session(&token).await;
    controller.lock().await.start_edit(id);
    Ok(Redirect::to("/tasks"))
}

/// POST /tasks/:id/edit - save the edit buffer.
pub async fn save_edit(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Form(form): Form<EditTaskForm>,
) -> Result<Redirect, ApiError> {
    let (state, token) = session(&state_lock, &headers).await?;
    let controller = state.controllers.for_session(&token).await;
    let mut ctrl = controller.lock().await;
    ctrl.update_edit_buffer(&form.title, &form.description);
    ctrl.save_edit(id).await;
    Ok(Redirect::to("/tasks"))
}

/// POST /tasks/edit/cancel
pub async fn cancel_edit(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
) -> Result<Redirect, ApiError> {
    let (state, token) = session(&state_lock, &headers).await?;
    let controller = state.controllers.for_session(&token).await;
    controller.lock().await.cancel_edit();
    Ok(Redirect::to("/tasks"))
}

/// POST /tasks/:id/delete
pub async fn delete_task(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Form(form): Form<DeleteTaskForm>,
) -> Result<Redirect, ApiError> {
    let (state, token) = session(&state_lock, &headers).await?;
    let controller = state.controllers.for_session(&token).await;
    controller.lock().await.delete(id, form.confirm == "yes").await;
    Ok(Redirect::to("/tasks"))
}

// ============================================================================
// Helpers
// ============================================================================

async fn session(
    state_lock: &Arc<RwLock<AppState>>,
    headers: &HeaderMap,
) -> Result<(AppState, String), ApiError> {
    let state = state_lock.read().await.clone();
    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|h| h.to_str().ok());
    let token = session_cookie_value(cookie_header)
        .ok_or_else(|| ApiError::Unauthorized("missing session cookie".to_string()))?;
    Ok((state, token))
}

fn login_redirect() -> Redirect {
    Redirect::to(&format!(
        "{}?redirect={}",
        LOGIN_PATH,
        urlencoding::encode("/tasks")
    ))
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Minimal markup for the task list; presentation is deliberately plain.
fn render_tasks_page(ctrl: &TaskController) -> String {
    let mut items = String::new();
    for task in &ctrl.tasks {
        if ctrl.editing_id == Some(task.id) {
            items.push_str(&format!(
                r#"<li class="task editing">
  <form method="post" action="/tasks/{id}/edit">
    <input name="title" value="{title}">
    <textarea name="description">{description}</textarea>
    <button type="submit">Save</button>
  </form>
  <form method="post" action="/tasks/edit/cancel"><button type="submit">Cancel</button></form>
</li>
"#,
                id = task.id,
                title = escape(&ctrl.edit_title),
                description = escape(&ctrl.edit_description),
            ));
        } else {
            items.push_str(&format!(
                r#"<li class="task{done_class}">
  <form method="post" action="/tasks/{id}/toggle"><button type="submit">{toggle_label}</button></form>
  <span class="title">{title}</span>
  <span class="description">{description}</span>
  <a href="/tasks/{id}/edit">Edit</a>
  <form method="post" action="/tasks/{id}/delete"
        onsubmit="return confirm('Are you sure you want to delete this task?')">
    <input type="hidden" name="confirm" value="yes">
    <button type="submit">Delete</button>
  </form>
</li>
"#,
                id = task.id,
                done_class = if task.is_completed { " completed" } else { "" },
                toggle_label = if task.is_completed { "✓" } else { "○" },
                title = escape(&task.title),
                description = escape(task.description.as_deref().unwrap_or("")),
            ));
        }
    }

    let error_banner = ctrl
        .error
        .as_deref()
        .map(|msg| format!(r#"<p class="error">{}</p>"#, escape(msg)))
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html>
<head><title>My Tasks - Taskboard</title><link rel="stylesheet" href="/static/app.css"></head>
<body>
<nav><a href="/">Taskboard</a><form method="post" action="/logout"><button type="submit">Sign out</button></form></nav>
<main>
<h1>My Tasks</h1>
<p>{completed} of {total} completed</p>
{error_banner}
<form method="post" action="/tasks/create">
  <input name="title" placeholder="What needs doing?">
  <textarea name="description" placeholder="Details (optional)"></textarea>
  <button type="submit">Add task</button>
</form>
<ul class="tasks">
{items}</ul>
</main>
</body>
</html>
"#,
        completed = ctrl.completed_count(),
        total = ctrl.tasks.len(),
        error_banner = error_banner,
        items = items,
    )
}
