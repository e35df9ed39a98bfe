use std::sync::Arc;

use chrono::Utc;
use colored::Colorize;
use serde_json::json;

use crate::api::{ApiClient, Transport};
use crate::cli::args::{FocusArgs, FocusCommands, OutputFormat};
use crate::config::FocusConfig;
use crate::error::FlowError;
use crate::features::focus::{format_mmss, FocusController, FocusTimer};
use crate::output::{format_session_pretty, format_timer_line, render, to_json};
use crate::storage::{Database, LocalStore, LAST_SESSION_KEY};
use crate::tui;

/// Execute focus command
///
/// # Errors
///
/// Returns an error if the API call fails, the local store cannot be
/// read or written, or the terminal cannot be set up.
pub fn focus<T: Transport + Send + Sync + 'static>(
    client: Arc<ApiClient<T>>,
    db: &Database,
    config: &FocusConfig,
    args: FocusArgs,
    format: OutputFormat,
) -> Result<String, FlowError> {
    let store = LocalStore::new(db);

    match args.command {
        FocusCommands::Run { minutes, block } => {
            let total = minutes.map_or_else(|| config.total_seconds(), |m| m.saturating_mul(60));
            let timer =
                FocusTimer::new(total).with_notifications_blocked(block || config.block_notifications);

            let timer = tui::run_focus(FocusController::new(timer, client))?;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "total_seconds": timer.total_seconds(),
                    "elapsed_seconds": timer.elapsed_seconds(),
                    "finished": timer.is_finished(),
                })),
                OutputFormat::Pretty => Ok(format_timer_line(&timer)),
            }
        }
        FocusCommands::Start { block } => {
            let record = client.start_focus(block || config.block_notifications, Utc::now())?;
            store.set(LAST_SESSION_KEY, &record.id)?;
            render(&record, format, format_session_pretty)
        }
        FocusCommands::End { session_id } => {
            let last = store.get(LAST_SESSION_KEY)?;
            let session_id = session_id.or_else(|| last.clone()).ok_or_else(|| {
                FlowError::InvalidArgument(
                    "No focus session to end. Pass a session id or run 'focusflow focus start'."
                        .to_string(),
                )
            })?;

            let record = client.end_focus(&session_id)?;
            if last.as_deref() == Some(session_id.as_str()) {
                store.remove(LAST_SESSION_KEY)?;
            }
            render(&record, format, format_session_pretty)
        }
        FocusCommands::Status => {
            let last = store.get(LAST_SESSION_KEY)?;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "duration_minutes": config.total_seconds() / 60,
                    "block_notifications": config.block_notifications,
                    "last_session": last,
                })),
                OutputFormat::Pretty => {
                    let mut output = format!("{}\n", "Focus".bold());
                    output.push_str(&format!(
                        "  {}: {}\n",
                        "Session length".dimmed(),
                        format_mmss(config.total_seconds())
                    ));
                    output.push_str(&format!(
                        "  {}: {}\n",
                        "Block notifications".dimmed(),
                        if config.block_notifications { "on" } else { "off" }
                    ));
                    output.push_str(&format!(
                        "  {}: {}",
                        "Open session".dimmed(),
                        last.as_deref().unwrap_or("none")
                    ));
                    Ok(output)
                }
            }
        }
    }
}
