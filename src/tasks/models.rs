// src/tasks/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Task Models
// ============================================================================

/// A task as the backend returns it. `id` and `user_id` are assigned by the
/// server and never change; everything else is mutable through update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for POST /tasks. The server assigns id and timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskCreate {
    /// Empty descriptions are normalized to absent rather than sent as "".
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        }
    }
}

/// Partial payload for PUT /tasks/{id}. Fields left as `None` are omitted
/// from the request entirely and stay unchanged server-side.
///
/// `description` is doubly optional: `None` omits the field, `Some(None)`
/// sends an explicit null to clear it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TaskUpdate {
    /// Update carrying only a completion flag, used by the optimistic toggle.
    pub fn completion(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Self::default()
        }
    }

    /// Update carrying title and description from the edit form. An empty
    /// description clears the stored one.
    pub fn edit(title: &str, description: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            }),
            ..Self::default()
        }
    }
}

/// Response of GET /tasks.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    pub total: i64,
}

/// Response of GET /tasks/validate-token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenValidation {
    pub valid: bool,
    pub user_id: String,
    pub message: String,
}
