//! Task routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the task router
///
/// # Routes
/// - `GET /tasks` - Task list page
/// - `POST /tasks/create` - Create a task
/// - `POST /tasks/:id/toggle` - Toggle completion
/// - `GET /tasks/:id/edit` - Open the edit form
/// - `POST /tasks/:id/edit` - Save the edit form
/// - `POST /tasks/edit/cancel` - Close the edit form
/// - `POST /tasks/:id/delete` - Delete (with confirmation)
pub fn tasks_routes() -> Router {
    Router::new()
        .route("/tasks", get(handlers::tasks_page))
        .route("/tasks/create", post(handlers::create_task))
        .route("/tasks/:id/toggle", post(handlers::toggle_task))
        .route(
            "/tasks/:id/edit",
            get(handlers::start_edit).post(handlers::save_edit),
        )
        .route("/tasks/edit/cancel", post(handlers::cancel_edit))
        .route("/tasks/:id/delete", post(handlers::delete_task))
}
