use serde::{Deserialize, Serialize};

use super::ProductivityStyle;

/// Body of `POST /onboarding/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingPayload {
    pub style: ProductivityStyle,
    /// `HH:MM`
    pub work_start: String,
    /// `HH:MM`
    pub work_end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<OnboardedUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardedUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub work_start: Option<String>,
    #[serde(default)]
    pub work_end: Option<String>,
    #[serde(default)]
    pub onboarding_complete: bool,
}
