// src/tasks/validators.rs

use crate::common::{ValidationResult, Validator};

// Field limits enforced by the backend; checking here keeps obviously bad
// input from ever reaching the network.
const TITLE_MAX: usize = 500;
const DESCRIPTION_MAX: usize = 5000;

/// Input for both the create form and the edit buffer.
#[derive(Debug)]
pub struct TaskInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

pub struct TaskInputValidator;

impl Validator<TaskInput<'_>> for TaskInputValidator {
    fn validate(&self, data: &TaskInput<'_>) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Task title is required");
        } else if data.title.len() > TITLE_MAX {
            result.add_error("title", "Task title must be less than 500 characters");
        }

        if data.description.len() > DESCRIPTION_MAX {
            result.add_error(
                "description",
                "Description must be less than 5000 characters",
            );
        }

        result
    }
}
