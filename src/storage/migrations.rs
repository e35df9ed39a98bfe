//! Database migrations for focusflow.
//!
//! Each migration upgrades the schema by one version. Migrations run
//! automatically when the database is opened.

use rusqlite::Connection;

use crate::error::FlowError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, FlowError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| FlowError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), FlowError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| FlowError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), FlowError> {
    let current = get_version(conn)?;

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), FlowError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(FlowError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: key/value store for client state.
fn migrate_v1(conn: &Connection) -> Result<(), FlowError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS local_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| FlowError::Database(format!("Migration v1 failed: {e}")))
}
