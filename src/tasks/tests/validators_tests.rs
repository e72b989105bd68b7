// src/tasks/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::common::Validator;
    use crate::tasks::validators::*;

    #[test]
    fn test_valid_input_passes() {
        let result = TaskInputValidator.validate(&TaskInput {
            title: "Buy groceries",
            description: "Milk, eggs, bread",
        });
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = TaskInputValidator.validate(&TaskInput {
            title: "",
            description: "",
        });
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn test_whitespace_only_title_rejected() {
        let result = TaskInputValidator.validate(&TaskInput {
            title: "   \t ",
            description: "",
        });
        assert!(!result.is_valid());
        assert_eq!(result.first_message(), Some("Task title is required"));
    }

    #[test]
    fn test_overlong_title_rejected() {
        let title = "x".repeat(501);
        let result = TaskInputValidator.validate(&TaskInput {
            title: &title,
            description: "",
        });
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn test_overlong_description_rejected() {
        let description = "x".repeat(5001);
        let result = TaskInputValidator.validate(&TaskInput {
            title: "ok",
            description: &description,
        });
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "description"));
    }

    #[test]
    fn test_limits_are_inclusive() {
        let title = "x".repeat(500);
        let description = "y".repeat(5000);
        let result = TaskInputValidator.validate(&TaskInput {
            title: &title,
            description: &description,
        });
        assert!(result.is_valid());
    }
}
