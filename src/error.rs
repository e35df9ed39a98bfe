//! Error types for focusflow.

use thiserror::Error;

/// Errors produced by the focusflow client.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The request never produced an HTTP response (connection refused,
    /// timeout, TLS failure).
    #[error("Request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `detail` message, or the raw body.
        detail: String,
    },

    /// The server rejected the bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A command needs a token but none is stored.
    #[error("Not logged in. Run 'focusflow auth login' first.")]
    NotAuthenticated,

    /// A response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local store failure.
    #[error("Database error: {0}")]
    Database(String),

    /// A user-supplied value was rejected before sending anything.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A `--where` query could not be parsed.
    #[error("Invalid filter: {0}")]
    Filter(String),

    /// Terminal or filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FlowError {
    /// Build an error from a non-success HTTP response.
    ///
    /// FastAPI reports failures as `{"detail": "..."}`; when that field is
    /// present it becomes the message, otherwise the trimmed body is used.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);

        match status {
            401 | 403 => Self::Unauthorized(detail),
            404 => Self::NotFound(detail),
            _ => Self::Api { status, detail },
        }
    }

    /// Whether this error means the stored credentials are no good.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::NotAuthenticated)
    }
}

fn extract_detail(body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match value.get("detail") {
            Some(serde_json::Value::String(s)) => return s.clone(),
            // Validation errors come back as a list of objects
            Some(other) if !other.is_null() => return other.to_string(),
            _ => {},
        }
    }

    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.to_string()
    }
}

impl From<reqwest::Error> for FlowError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<rusqlite::Error> for FlowError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}
