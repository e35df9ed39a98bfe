//! Session boundary notifications.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::{ApiClient, Transport};
use crate::error::FlowError;
use crate::models::FocusSessionRecord;

/// Reports focus session start and end to the session log.
#[cfg_attr(test, mockall::automock)]
pub trait SessionBoundaryNotifier {
    /// Open a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session log could not be reached.
    fn on_start(
        &self,
        block_notifications: bool,
        start_time: DateTime<Utc>,
    ) -> Result<FocusSessionRecord, FlowError>;

    /// Close a session previously returned by `on_start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session log could not be reached.
    fn on_end(&self, session_id: &str) -> Result<FocusSessionRecord, FlowError>;
}

impl<T: Transport> SessionBoundaryNotifier for ApiClient<T> {
    fn on_start(
        &self,
        block_notifications: bool,
        start_time: DateTime<Utc>,
    ) -> Result<FocusSessionRecord, FlowError> {
        self.start_focus(block_notifications, start_time)
    }

    fn on_end(&self, session_id: &str) -> Result<FocusSessionRecord, FlowError> {
        self.end_focus(session_id)
    }
}

impl<N: SessionBoundaryNotifier + ?Sized> SessionBoundaryNotifier for Arc<N> {
    fn on_start(
        &self,
        block_notifications: bool,
        start_time: DateTime<Utc>,
    ) -> Result<FocusSessionRecord, FlowError> {
        (**self).on_start(block_notifications, start_time)
    }

    fn on_end(&self, session_id: &str) -> Result<FocusSessionRecord, FlowError> {
        (**self).on_end(session_id)
    }
}
