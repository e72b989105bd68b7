// src/tasks/tests/models_tests.rs

#[cfg(test)]
mod tests {
    use crate::tasks::models::*;

    #[test]
    fn test_task_deserializes_from_backend_json() {
        let json = r#"{
            "id": 1,
            "title": "A",
            "description": null,
            "is_completed": false,
            "user_id": 7,
            "created_at": "2025-01-15T09:30:00Z",
            "updated_at": "2025-01-15T09:30:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "A");
        assert_eq!(task.description, None);
        assert!(!task.is_completed);
        assert_eq!(task.user_id, 7);
    }

    #[test]
    fn test_list_response_shape() {
        let json = r#"{"tasks": [], "total": 0}"#;
        let response: TaskListResponse = serde_json::from_str(json).unwrap();
        assert!(response.tasks.is_empty());
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_toggle_payload_carries_only_the_flag() {
        let payload = TaskUpdate::completion(true);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "is_completed": true }));
    }

    #[test]
    fn test_edit_payload_sends_explicit_null_to_clear_description() {
        let payload = TaskUpdate::edit("A", "");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "A", "description": null })
        );
    }

    #[test]
    fn test_create_payload_omits_empty_description() {
        let payload = TaskCreate::new("A", "");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "A" }));

        let payload = TaskCreate::new("A", "details");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "A", "description": "details" })
        );
    }
}
