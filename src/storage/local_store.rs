//! Persistent key/value store for client state.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::FlowError;

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "ff_token";

/// Key holding the id of the most recently started focus session.
pub const LAST_SESSION_KEY: &str = "ff_last_session";

/// String key/value pairs backed by the `local_store` table.
pub struct LocalStore<'a> {
    db: &'a Database,
}

impl<'a> LocalStore<'a> {
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, key: &str) -> Result<Option<String>, FlowError> {
        Ok(self
            .db
            .connection()
            .query_row(
                "SELECT value FROM local_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set(&self, key: &str, value: &str) -> Result<(), FlowError> {
        self.db.connection().execute(
            "INSERT INTO local_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Remove a key. Returns whether it was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove(&self, key: &str) -> Result<bool, FlowError> {
        let removed = self
            .db
            .connection()
            .execute("DELETE FROM local_store WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn token(&self) -> Result<Option<String>, FlowError> {
        self.get(TOKEN_KEY)
    }

    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_token(&self, token: &str) -> Result<(), FlowError> {
        self.set(TOKEN_KEY, token)
    }

    /// Forget the token and anything tied to the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear_session(&self) -> Result<bool, FlowError> {
        let had_token = self.remove(TOKEN_KEY)?;
        self.remove(LAST_SESSION_KEY)?;
        Ok(had_token)
    }
}
