//! `SQLite` database connection.
//!
//! The database is stored at `~/.focusflow/focusflow.db`.

use rusqlite::Connection;

use crate::config::Paths;
use crate::error::FlowError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database described by `paths`, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_with(paths: &Paths) -> Result<Self, FlowError> {
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, FlowError> {
        let conn = Connection::open(path).map_err(|e| {
            FlowError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, FlowError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| FlowError::Database(format!("Failed to open in-memory database: {e}")))?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    fn migrate(&self) -> Result<(), FlowError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, FlowError> {
        migrations::get_version(&self.conn)
    }

    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
