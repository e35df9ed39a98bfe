use colored::Colorize;
use serde_json::json;

use crate::api::{ApiClient, Transport};
use crate::cli::args::{OutputFormat, TasksArgs, TasksCommands};
use crate::core::{filter_items, parse_filter, parse_natural_date};
use crate::error::FlowError;
use crate::features::tasks::TaskFilter;
use crate::models::{NewTask, Task, TaskUpdate};
use crate::output::{format_task, format_tasks, to_json};

/// Execute tasks command
///
/// # Errors
///
/// Returns an error if an argument is invalid, the API call fails or
/// output formatting fails.
pub fn tasks<T: Transport>(
    client: &ApiClient<T>,
    args: TasksArgs,
    format: OutputFormat,
) -> Result<String, FlowError> {
    match args.command {
        None => list(client, args.tab, None, format),
        Some(TasksCommands::List { tab, query }) => list(client, tab, query.as_deref(), format),
        Some(TasksCommands::Add {
            title,
            category,
            due,
            priority,
        }) => {
            let due = due.as_deref().map(parse_due).transpose()?;
            let new = NewTask::new(&title, category, due, priority)?;
            let task = client.create_task(&new)?;
            changed(&task, "Added", format)
        }
        Some(TasksCommands::Update {
            id,
            title,
            category,
            due,
            priority,
            status,
            progress,
        }) => {
            let due_date = due
                .as_deref()
                .map(parse_due)
                .transpose()?
                .map(|d| d.format("%Y-%m-%d").to_string());
            let update = TaskUpdate {
                title,
                category,
                due_date,
                priority,
                status,
                progress,
            };
            let task = client.update_task(&id, &update)?;
            changed(&task, "Updated", format)
        }
        Some(TasksCommands::Status { id, status }) => {
            let task = client.update_task_status(&id, status)?;
            changed(&task, "Marked", format)
        }
        Some(TasksCommands::Toggle { id }) => {
            let tasks = client.list_tasks()?;
            let task = tasks
                .iter()
                .find(|t| t.id == id)
                .ok_or_else(|| FlowError::NotFound(format!("task {id}")))?;
            let task = client.toggle_task(task)?;
            let verb = if task.is_completed() { "Completed" } else { "Reopened" };
            changed(&task, verb, format)
        }
        Some(TasksCommands::Delete { id }) => {
            let ack = client.delete_task(&id)?;
            match format {
                OutputFormat::Json => to_json(&json!({ "id": id, "status": ack.status })),
                OutputFormat::Pretty => Ok(format!("{} Deleted task {}", "✓".green(), id.dimmed())),
            }
        }
    }
}

fn list<T: Transport>(
    client: &ApiClient<T>,
    tab: TaskFilter,
    query: Option<&str>,
    format: OutputFormat,
) -> Result<String, FlowError> {
    let all = client.list_tasks()?;
    let on_tab: Vec<Task> = tab.apply(&all).into_iter().cloned().collect();

    let shown: Vec<&Task> = match query {
        Some(query) => {
            let expr = parse_filter(query)?;
            filter_items(&on_tab, &expr)
        }
        None => on_tab.iter().collect(),
    };

    format_tasks(&shown, tab.label(), format)
}

fn parse_due(input: &str) -> Result<chrono::NaiveDate, FlowError> {
    parse_natural_date(input).ok_or_else(|| {
        FlowError::InvalidArgument(format!(
            "Could not understand due date '{input}' (try today, tomorrow, friday, in 3 days or YYYY-MM-DD)"
        ))
    })
}

fn changed(task: &Task, verb: &str, format: OutputFormat) -> Result<String, FlowError> {
    match format {
        OutputFormat::Json => format_task(task, format),
        OutputFormat::Pretty => Ok(format!(
            "{} {verb} {} ({})",
            "✓".green(),
            task.title.bold(),
            task.status
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Method, MockTransport};
    use crate::cli::commands::test_support::{anonymous, client, ok};
    use crate::models::TaskStatus;

    const TASKS: &str = r#"[
        {"id": "1", "title": "Write report", "category": "Work", "priority": "High", "status": "Todo", "progress": 0, "dueDate": "2024-01-12"},
        {"id": "2", "title": "Gym", "category": "Health", "priority": "Low", "status": "IN_PROGRESS", "progress": 50},
        {"id": "3", "title": "Ship release", "category": "Work", "priority": "Medium", "status": "Completed", "progress": 100}
    ]"#;

    fn listing() -> MockTransport {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.method == Method::Get && req.path == "/tasks")
            .returning(|_| ok(TASKS));
        transport
    }

    fn run(transport: MockTransport, command: Option<TasksCommands>) -> Result<String, FlowError> {
        let args = TasksArgs {
            command,
            tab: TaskFilter::All,
        };
        tasks(&client(transport), args, OutputFormat::Json)
    }

    #[test]
    fn test_list_all() {
        let output = run(listing(), None).unwrap();
        assert!(output.contains("\"count\": 3"));
        assert!(output.contains("\"list\": \"All\""));
    }

    #[test]
    fn test_list_completed_tab() {
        let output = run(
            listing(),
            Some(TasksCommands::List {
                tab: TaskFilter::Completed,
                query: None,
            }),
        )
        .unwrap();

        assert!(output.contains("\"count\": 1"));
        assert!(output.contains("Ship release"));
        assert!(!output.contains("Write report"));
    }

    #[test]
    fn test_list_where_query() {
        let output = run(
            listing(),
            Some(TasksCommands::List {
                tab: TaskFilter::All,
                query: Some("category = 'Work' AND status != 'Completed'".to_string()),
            }),
        )
        .unwrap();

        assert!(output.contains("\"count\": 1"));
        assert!(output.contains("Write report"));
    }

    #[test]
    fn test_list_bad_query() {
        let result = run(
            listing(),
            Some(TasksCommands::List {
                tab: TaskFilter::All,
                query: Some("= 'Work'".to_string()),
            }),
        );
        assert!(matches!(result, Err(FlowError::Filter(_))));
    }

    #[test]
    fn test_list_requires_login() {
        let args = TasksArgs {
            command: None,
            tab: TaskFilter::All,
        };
        let result = tasks(&anonymous(MockTransport::new()), args, OutputFormat::Pretty);
        assert!(matches!(result, Err(FlowError::NotAuthenticated)));
    }

    #[test]
    fn test_add_with_natural_due_date() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                let body = req.body.as_ref();
                req.method == Method::Post
                    && body.and_then(|b| b.get("category")).and_then(|v| v.as_str()) == Some("Work")
                    && body.and_then(|b| b.get("dueDate")).and_then(|v| v.as_str()).is_some()
            })
            .returning(|_| {
                ok(r#"{"id": "9", "title": "Dentist", "category": "Work", "priority": "Medium", "status": "Todo", "progress": 0}"#)
            });

        let output = run(
            transport,
            Some(TasksCommands::Add {
                title: "Dentist".to_string(),
                category: None,
                due: Some("tomorrow".to_string()),
                priority: None,
            }),
        )
        .unwrap();
        assert!(output.contains("\"id\": \"9\""));
    }

    #[test]
    fn test_add_rejects_unknown_due_date() {
        let result = run(
            MockTransport::new(),
            Some(TasksCommands::Add {
                title: "Dentist".to_string(),
                category: None,
                due: Some("someday maybe".to_string()),
                priority: None,
            }),
        );
        assert!(matches!(result, Err(FlowError::InvalidArgument(_))));
    }

    #[test]
    fn test_toggle_completes_open_task() {
        let mut transport = listing();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::Patch
                    && req.path == "/tasks/1/status"
                    && req.query == vec![("status".to_string(), "Completed".to_string())]
            })
            .times(1)
            .returning(|_| {
                ok(r#"{"id": "1", "title": "Write report", "category": "Work", "priority": "High", "status": "Completed", "progress": 100}"#)
            });

        let args = TasksArgs {
            command: Some(TasksCommands::Toggle { id: "1".to_string() }),
            tab: TaskFilter::All,
        };
        let output = tasks(&client(transport), args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Completed"));
        assert!(output.contains("Write report"));
    }

    #[test]
    fn test_toggle_unknown_task() {
        let result = run(listing(), Some(TasksCommands::Toggle { id: "42".to_string() }));
        assert!(matches!(result, Err(FlowError::NotFound(_))));
    }

    #[test]
    fn test_status_change() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/tasks/2/status")
            .returning(|_| {
                ok(r#"{"id": "2", "title": "Gym", "category": "Health", "priority": "Low", "status": "Completed", "progress": 100}"#)
            });

        let output = run(
            transport,
            Some(TasksCommands::Status {
                id: "2".to_string(),
                status: TaskStatus::Completed,
            }),
        )
        .unwrap();
        assert!(output.contains("\"status\": \"Completed\""));
    }

    #[test]
    fn test_delete() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.method == Method::Delete && req.path == "/tasks/3")
            .returning(|_| ok(r#"{"status": "deleted"}"#));

        let output = run(transport, Some(TasksCommands::Delete { id: "3".to_string() })).unwrap();
        assert!(output.contains("\"status\": \"deleted\""));
    }
}
