use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{FieldValue, Filterable, Schedulable};
use crate::error::FlowError;

/// Category used when a new task does not name one.
pub const DEFAULT_CATEGORY: &str = "Work";

/// Categories offered by the task form.
pub const CATEGORIES: [&str; 5] = ["Work", "Personal", "Learning", "Health", "Admin"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "lenient_progress")]
    pub progress: u8,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Reads a stored progress value, clamped to 0..=100.
///
/// The server keeps whatever a client wrote, so null, strings, fractions and
/// out-of-range numbers all occur. None of them may fail a whole task list.
fn lenient_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    // NaN casts to 0
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = |f: f64| f.clamp(0.0, 100.0).round() as u8;

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => u8::try_from(n.clamp(0, 100)).unwrap_or(0),
        Some(Raw::Float(f)) => percent(f),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().map(percent).unwrap_or(0),
        Some(Raw::Other(_)) | None => 0,
    })
}

impl Task {
    /// Due date parsed from the wire string.
    ///
    /// The server stores whatever the client sent, so anything that isn't an
    /// ISO date is treated as no date.
    #[must_use]
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.get(..10).unwrap_or(d), "%Y-%m-%d").ok())
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(alias = "TODO", alias = "todo")]
    Todo,
    #[serde(rename = "In Progress", alias = "IN_PROGRESS", alias = "InProgress")]
    InProgress,
    #[serde(alias = "COMPLETED", alias = "completed")]
    Completed,
}

impl TaskStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// The status a task moves to when its checkbox is toggled.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Completed => Self::Todo,
            Self::Todo | Self::InProgress => Self::Completed,
        }
    }

    /// Parse from user input, accepting the display and server spellings.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidArgument` for unknown statuses.
    pub fn parse(s: &str) -> Result<Self, FlowError> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" | "progress" | "doing" => Ok(Self::InProgress),
            "completed" | "complete" | "done" => Ok(Self::Completed),
            _ => Err(FlowError::InvalidArgument(format!(
                "Unknown status '{s}' (expected Todo, In Progress or Completed)"
            ))),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(alias = "low", alias = "LOW")]
    Low,
    #[default]
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "high", alias = "HIGH")]
    High,
}

impl Priority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// # Errors
    ///
    /// Returns `FlowError::InvalidArgument` for unknown priorities.
    pub fn parse(s: &str) -> Result<Self, FlowError> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Ok(Self::Low),
            "medium" | "med" | "m" => Ok(Self::Medium),
            "high" | "h" => Ok(Self::High),
            _ => Err(FlowError::InvalidArgument(format!(
                "Unknown priority '{s}' (expected Low, Medium or High)"
            ))),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub priority: Priority,
}

impl NewTask {
    /// Build a task the way the add-task form does: title is required,
    /// category and priority fall back to Work/Medium, and a missing due
    /// date becomes today.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidArgument` if the title is blank.
    pub fn new(
        title: &str,
        category: Option<String>,
        due_date: Option<NaiveDate>,
        priority: Option<Priority>,
    ) -> Result<Self, FlowError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FlowError::InvalidArgument("Task title is required".to_string()));
        }

        let due = due_date.unwrap_or_else(|| chrono::Local::now().date_naive());

        Ok(Self {
            title: title.to_string(),
            category: category.unwrap_or_else(default_category),
            due_date: Some(due.format("%Y-%m-%d").to_string()),
            priority: priority.unwrap_or_default(),
        })
    }
}

/// Body of `PUT /tasks/{id}`. Only the fields that are set go on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl TaskUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.progress.is_none()
    }
}

impl Filterable for Task {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field.to_lowercase().as_str() {
            "id" => Some(FieldValue::String(self.id.clone())),
            "title" | "name" => Some(FieldValue::String(self.title.clone())),
            "category" => Some(FieldValue::String(self.category.clone())),
            "priority" => Some(FieldValue::String(self.priority.to_string())),
            "status" => Some(FieldValue::String(self.status.to_string())),
            "due" | "due_date" | "duedate" => Some(FieldValue::OptionalDate(self.due())),
            "progress" => Some(FieldValue::Integer(i64::from(self.progress))),
            _ => None,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }
}

impl Schedulable for Task {
    fn due_date(&self) -> Option<NaiveDate> {
        self.due()
    }

    fn is_done(&self) -> bool {
        self.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserialize_frontend_shape() {
        let json = r#"{
            "id": "1",
            "title": "Complete ML Model Report",
            "category": "Work",
            "dueDate": "2023-10-25",
            "priority": "High",
            "status": "In Progress",
            "progress": 65
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "1");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.progress, 65);
        assert_eq!(task.due(), NaiveDate::from_ymd_opt(2023, 10, 25));
    }

    #[test]
    fn test_task_deserialize_backend_shape() {
        let json = r#"{
            "id": "65a1",
            "user_id": "u1",
            "title": "Review Team PRs",
            "category": "Development",
            "dueDate": null,
            "priority": "Medium",
            "status": "TODO",
            "progress": 0
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.due().is_none());
    }

    #[test]
    fn test_task_list_survives_bad_progress() {
        let json = r#"[
            {"id": "1", "title": "a", "progress": null},
            {"id": "2", "title": "b", "progress": 300},
            {"id": "3", "title": "c", "progress": -5},
            {"id": "4", "title": "d", "progress": 42.6},
            {"id": "5", "title": "e", "progress": "75"},
            {"id": "6", "title": "f", "progress": {"done": 1}},
            {"id": "7", "title": "g"}
        ]"#;

        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();
        let progress: Vec<u8> = tasks.iter().map(|t| t.progress).collect();
        assert_eq!(progress, vec![0, 100, 0, 43, 75, 0, 0]);
    }

    #[test]
    fn test_task_deserialize_minimal() {
        let task: Task = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
        assert_eq!(task.category, "Work");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn test_task_due_ignores_garbage() {
        let task: Task =
            serde_json::from_str(r#"{"title": "x", "dueDate": "next week"}"#).unwrap();
        assert!(task.due().is_none());
    }

    #[test]
    fn test_task_due_accepts_datetime() {
        let task: Task =
            serde_json::from_str(r#"{"title": "x", "dueDate": "2024-03-01T00:00:00Z"}"#).unwrap();
        assert_eq!(task.due(), NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_status_serializes_display_form() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            r#""In Progress""#
        );
    }

    #[test]
    fn test_status_parse_variants() {
        assert_eq!(TaskStatus::parse("todo").unwrap(), TaskStatus::Todo);
        assert_eq!(TaskStatus::parse("In Progress").unwrap(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("IN_PROGRESS").unwrap(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("done").unwrap(), TaskStatus::Completed);
        assert!(TaskStatus::parse("blocked").is_err());
    }

    #[test]
    fn test_status_toggled() {
        assert_eq!(TaskStatus::Todo.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::InProgress.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Todo);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("HIGH").unwrap(), Priority::High);
        assert_eq!(Priority::parse("m").unwrap(), Priority::Medium);
        assert!(Priority::parse("urgent").is_err());
    }

    #[test]
    fn test_new_task_defaults() {
        let task = NewTask::new("  Write report ", None, None, None).unwrap();
        let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

        assert_eq!(task.title, "Write report");
        assert_eq!(task.category, "Work");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, Some(today));
    }

    #[test]
    fn test_new_task_requires_title() {
        assert!(matches!(
            NewTask::new("   ", None, None, None),
            Err(FlowError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_task_update_skips_unset_fields() {
        let update = TaskUpdate {
            progress: Some(40),
            ..TaskUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"progress": 40}));
        assert!(!update.is_empty());
        assert!(TaskUpdate::default().is_empty());
    }

    #[test]
    fn test_task_filterable_fields() {
        let task: Task = serde_json::from_str(
            r#"{"id": "7", "title": "Gym", "category": "Health", "priority": "Low", "progress": 10}"#,
        )
        .unwrap();

        assert_eq!(task.field_value("name"), Some(FieldValue::String("Gym".to_string())));
        assert_eq!(task.field_value("progress"), Some(FieldValue::Integer(10)));
        assert_eq!(task.field_value("due"), Some(FieldValue::OptionalDate(None)));
        assert!(task.field_value("tags").is_none());
    }
}
