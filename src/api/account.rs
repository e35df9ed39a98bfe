//! Profile, settings, onboarding and account endpoints.

use super::client::ApiClient;
use super::transport::Transport;
use crate::error::FlowError;
use crate::models::{
    Ack, OnboardingPayload, OnboardingResult, Profile, ProfileUpdate, SettingsUpdate, UpdateAck,
    UserSettings,
};

impl<T: Transport> ApiClient<T> {
    /// `GET /user/profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn profile(&self) -> Result<Profile, FlowError> {
        self.get("/user/profile")
    }

    /// `PUT /user/profile`
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidArgument` for an empty update.
    pub fn update_profile(&self, update: &ProfileUpdate) -> Result<UpdateAck, FlowError> {
        if update.is_empty() {
            return Err(FlowError::InvalidArgument("Nothing to update".to_string()));
        }
        self.put("/user/profile", update)
    }

    /// `GET /user/settings`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn settings(&self) -> Result<UserSettings, FlowError> {
        self.get("/user/settings")
    }

    /// `PUT /user/settings`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn update_settings(&self, update: &SettingsUpdate) -> Result<UpdateAck, FlowError> {
        self.put("/user/settings", update)
    }

    /// `DELETE /user/delete`. The caller is responsible for forgetting the
    /// stored token afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete_account(&self) -> Result<Ack, FlowError> {
        self.delete("/user/delete")
    }

    /// `POST /onboarding/`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn complete_onboarding(&self, payload: &OnboardingPayload) -> Result<OnboardingResult, FlowError> {
        self.post("/onboarding/", payload)
    }
}
