//! Authenticated JSON client over a [`Transport`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::credentials::CredentialProvider;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::FlowError;

/// Client for the FocusFlow REST API.
///
/// The bearer token comes from the injected [`CredentialProvider`] and is
/// read again for every request.
pub struct ApiClient<T: Transport> {
    transport: T,
    credentials: Arc<dyn CredentialProvider>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Send a request that needs a logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotAuthenticated` without touching the network
    /// when no token is available.
    pub(crate) fn send_authorized(&self, mut request: ApiRequest) -> Result<ApiResponse, FlowError> {
        let token = self.credentials.token().ok_or(FlowError::NotAuthenticated)?;
        request.bearer = Some(token);
        self.dispatch(&request)
    }

    /// Send a request that works without a token, attaching one if present.
    pub(crate) fn send_public(&self, mut request: ApiRequest) -> Result<ApiResponse, FlowError> {
        request.bearer = self.credentials.token();
        self.dispatch(&request)
    }

    fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, FlowError> {
        debug!(
            method = %request.method,
            path = %request.path,
            authorized = request.bearer.is_some(),
            "api request"
        );

        let response = self.transport.send(request)?;

        if response.is_success() {
            Ok(response)
        } else {
            let err = FlowError::from_response(response.status, &response.body);
            warn!(path = %request.path, status = response.status, "api request failed: {err}");
            Err(err)
        }
    }

    pub(crate) fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, FlowError> {
        decode(&self.send_authorized(ApiRequest::new(Method::Get, path))?)
    }

    pub(crate) fn post<B, R>(&self, path: &str, body: &B) -> Result<R, FlowError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        decode(&self.send_authorized(ApiRequest::new(Method::Post, path).json(body)?)?)
    }

    pub(crate) fn put<B, R>(&self, path: &str, body: &B) -> Result<R, FlowError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        decode(&self.send_authorized(ApiRequest::new(Method::Put, path).json(body)?)?)
    }

    pub(crate) fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, FlowError> {
        decode(&self.send_authorized(ApiRequest::new(Method::Delete, path))?)
    }
}

/// Decode a success body. An empty body decodes as JSON `null`.
pub(crate) fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, FlowError> {
    let body = response.body.trim();
    let body = if body.is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::credentials::StaticToken;
    use crate::api::transport::MockTransport;

    fn ok(body: &str) -> Result<ApiResponse, FlowError> {
        Ok(ApiResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    #[test]
    fn test_bearer_attached_when_token_present() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.bearer.as_deref() == Some("secret") && req.path == "/tasks")
            .times(1)
            .returning(|_| ok("[]"));

        let client = ApiClient::new(transport, Arc::new(StaticToken::new("secret")));
        let tasks: Vec<serde_json::Value> = client.get("/tasks").unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_authorized_request_without_token_never_sends() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(0);

        let client = ApiClient::new(transport, Arc::new(StaticToken::anonymous()));
        let result: Result<serde_json::Value, _> = client.get("/tasks");
        assert!(matches!(result, Err(FlowError::NotAuthenticated)));
    }

    #[test]
    fn test_public_request_without_token() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.bearer.is_none())
            .times(1)
            .returning(|_| ok(r#"{"token": "t"}"#));

        let client = ApiClient::new(transport, Arc::new(StaticToken::anonymous()));
        let response = client
            .send_public(ApiRequest::new(Method::Post, "/auth/login"))
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_error_status_mapped() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_| {
            Ok(ApiResponse {
                status: 404,
                body: r#"{"detail": "Task not found"}"#.to_string(),
            })
        });

        let client = ApiClient::new(transport, Arc::new(StaticToken::new("t")));
        let result: Result<serde_json::Value, _> = client.delete("/tasks/9");
        match result {
            Err(FlowError::NotFound(detail)) => assert_eq!(detail, "Task not found"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_transport_failure_propagates() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(FlowError::Http("connection refused".to_string())));

        let client = ApiClient::new(transport, Arc::new(StaticToken::new("t")));
        let result: Result<serde_json::Value, _> = client.get("/dashboard/summary");
        assert!(matches!(result, Err(FlowError::Http(_))));
    }

    #[test]
    fn test_decode_empty_body_as_null() {
        let response = ApiResponse {
            status: 204,
            body: String::new(),
        };
        let value: Option<serde_json::Value> = decode(&response).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_decode_bad_json() {
        let response = ApiResponse {
            status: 200,
            body: "<html>".to_string(),
        };
        let result: Result<serde_json::Value, _> = decode(&response);
        assert!(matches!(result, Err(FlowError::Parse(_))));
    }
}
