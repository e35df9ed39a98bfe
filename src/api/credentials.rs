//! Credential providers.
//!
//! The bearer token is handed to [`ApiClient`](super::ApiClient) explicitly
//! instead of living in process-wide state. Whoever builds the client decides
//! where the token comes from.

/// Supplies the bearer token for outgoing requests.
pub trait CredentialProvider: Send + Sync {
    /// The token to attach, or `None` to send the request anonymously.
    fn token(&self) -> Option<String>;
}

/// A fixed token (or none), e.g. from `FOCUSFLOW_TOKEN` or the local store.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(token))
        }
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn from_option(token: Option<String>) -> Self {
        token.map_or_else(Self::anonymous, Self::new)
    }
}

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}
