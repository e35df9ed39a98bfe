use chrono::{DateTime, Utc};

use super::client::ApiClient;
use super::transport::Transport;
use crate::error::FlowError;
use crate::models::{FocusEndRequest, FocusSessionRecord, FocusStartRequest};

impl<T: Transport> ApiClient<T> {
    /// `POST /focus/start`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn start_focus(
        &self,
        blocked_notifications: bool,
        start_time: DateTime<Utc>,
    ) -> Result<FocusSessionRecord, FlowError> {
        let body = FocusStartRequest {
            blocked_notifications,
            start_time,
        };
        self.post("/focus/start", &body)
    }

    /// `POST /focus/end`
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotFound` if the session is unknown.
    pub fn end_focus(&self, session_id: &str) -> Result<FocusSessionRecord, FlowError> {
        let body = FocusEndRequest {
            session_id: session_id.to_string(),
        };
        self.post("/focus/end", &body)
    }
}
