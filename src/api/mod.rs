//! FocusFlow REST API client.
//!
//! Requests go through a [`Transport`] and carry the token from an injected
//! [`CredentialProvider`]. Endpoint methods are grouped by resource:
//!
//! - `auth`: login, signup, token verification
//! - `tasks`: task CRUD and status changes
//! - `insights`: dashboard, analytics and ML predictions
//! - `focus`: focus session boundaries
//! - `account`: profile, settings, onboarding, account deletion

mod account;
mod auth;
mod client;
mod credentials;
mod focus;
mod insights;
mod tasks;
mod transport;

pub use client::ApiClient;
pub use credentials::{CredentialProvider, StaticToken};
#[cfg(test)]
pub use transport::MockTransport;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

/// The client used by the binary.
pub type HttpClient = ApiClient<HttpTransport>;
