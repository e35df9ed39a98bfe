//! JSON output formatting for focusflow.

use serde::Serialize;
use serde_json::json;

use crate::error::FlowError;
use crate::models::Task;

/// Format a task list as JSON with its heading and count.
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[&Task], list_name: &str) -> Result<String, FlowError> {
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FlowError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskStatus};

    fn make_task(title: &str, status: TaskStatus) -> Task {
        Task {
            id: "task-1".to_string(),
            title: title.to_string(),
            category: "Work".to_string(),
            due_date: None,
            priority: Priority::Low,
            status,
            progress: 0,
        }
    }

    #[test]
    fn test_format_tasks_json_empty_list() {
        let result = format_tasks_json(&[], "Completed").unwrap();

        assert!(result.contains("\"list\": \"Completed\""));
        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_tasks_json_uses_wire_names() {
        let task = make_task("Plan sprint", TaskStatus::InProgress);
        let result = format_tasks_json(&[&task], "All").unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"title\": \"Plan sprint\""));
        assert!(result.contains("\"status\": \"In Progress\""));
        assert!(result.contains("\"dueDate\""));
    }

    #[test]
    fn test_json_preserves_special_characters() {
        let task = make_task("Task with \"quotes\"\nand newline", TaskStatus::Todo);
        let result = to_json(&task).unwrap();

        assert!(result.contains("\\\"quotes\\\""));
        assert!(result.contains("\\n"));
    }
}
