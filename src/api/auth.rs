use serde::Serialize;

use super::client::{decode, ApiClient};
use super::transport::{ApiRequest, Method, Transport};
use crate::error::FlowError;
use crate::models::AuthResponse;

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    goal: &'a str,
}

impl<T: Transport> ApiClient<T> {
    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Unauthorized` for bad credentials.
    pub fn login(&self, email: &str, password: &str) -> Result<AuthResponse, FlowError> {
        let request = ApiRequest::new(Method::Post, "/auth/login").json(&LoginBody { email, password })?;
        decode(&self.send_public(request)?)
    }

    /// `POST /auth/signup`
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Api` if the server rejects the registration.
    pub fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        goal: &str,
    ) -> Result<AuthResponse, FlowError> {
        let body = SignupBody {
            name,
            email,
            password,
            goal,
        };
        let request = ApiRequest::new(Method::Post, "/auth/signup").json(&body)?;
        decode(&self.send_public(request)?)
    }

    /// `GET /auth/verify`. A rejected token is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures and non-401 statuses.
    pub fn verify(&self) -> Result<Option<serde_json::Value>, FlowError> {
        match self.send_authorized(ApiRequest::new(Method::Get, "/auth/verify")) {
            Ok(response) => decode(&response).map(Some),
            Err(FlowError::Unauthorized(_) | FlowError::NotAuthenticated) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
