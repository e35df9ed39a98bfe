//! Storage layer for focusflow.
//!
//! A small SQLite database holds client-side state that must survive between
//! invocations: the auth token and the id of the last focus session.

mod database;
mod local_store;
mod migrations;

pub use database::Database;
pub use local_store::{LocalStore, LAST_SESSION_KEY, TOKEN_KEY};
