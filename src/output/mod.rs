//! Output formatting for focusflow.
//!
//! Every command renders either for people (colored text, charts) or for
//! scripts (pretty-printed JSON).

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::FlowError;
use crate::models::Task;

pub use json::*;
pub use pretty::*;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn format_tasks(tasks: &[&Task], title: &str, format: OutputFormat) -> Result<String, FlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, FlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => to_json(task),
    }
}

/// Render `value` with `pretty` or as JSON.
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> Result<String, FlowError>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Pretty => Ok(pretty(value)),
        OutputFormat::Json => to_json(value),
    }
}
