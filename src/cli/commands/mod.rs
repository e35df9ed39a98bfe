//! Command implementations for focusflow.
//!
//! Every command takes the API client it talks through, so tests can hand
//! in a client over a mocked transport.

mod account;
mod auth;
mod focus;
mod insights;
mod tasks;

pub use account::{account, onboard, profile, settings};
pub use auth::auth;
pub use focus::focus;
pub use insights::{analytics, dashboard, insights};
pub use tasks::tasks;

use std::sync::Arc;

use crate::api::{HttpClient, HttpTransport, StaticToken};
use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::FlowError;
use crate::storage::{Database, LocalStore};

/// Environment variable that supplies the bearer token, ahead of the
/// stored one.
pub const TOKEN_ENV: &str = "FOCUSFLOW_TOKEN";

/// Everything a command needs from the environment: settings, file
/// locations and the chosen output format.
pub struct AppContext {
    pub config: Config,
    pub paths: Paths,
    pub format: OutputFormat,
}

impl AppContext {
    /// Resolve config and paths for this invocation.
    ///
    /// `api_url` and `output` come from the command line and win over
    /// the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or the config
    /// file cannot be parsed.
    pub fn load(api_url: Option<String>, output: Option<OutputFormat>) -> Result<Self, FlowError> {
        let paths = Paths::new()?;
        let config = Config::load_from_path(&paths.config_file)?
            .with_env_overrides()
            .with_api_url(api_url);
        let format = output.unwrap_or(config.general.default_output);

        Ok(Self {
            config,
            paths,
            format,
        })
    }

    /// Open the local store database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn database(&self) -> Result<Database, FlowError> {
        Database::open_with(&self.paths)
    }

    /// Build the HTTP client, taking the token from `FOCUSFLOW_TOKEN` or
    /// the local store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the HTTP client
    /// cannot be built.
    pub fn client(&self, db: &Database) -> Result<HttpClient, FlowError> {
        let token = resolve_token(std::env::var(TOKEN_ENV).ok(), db)?;
        let transport = HttpTransport::new(&self.config.api.base_url, self.config.api.timeout())?;
        Ok(HttpClient::new(transport, Arc::new(StaticToken::from_option(token))))
    }
}

/// An explicit token wins over the stored one. Blank values count as unset.
fn resolve_token(explicit: Option<String>, db: &Database) -> Result<Option<String>, FlowError> {
    match explicit.filter(|t| !t.trim().is_empty()) {
        Some(token) => Ok(Some(token)),
        None => LocalStore::new(db).token(),
    }
}
