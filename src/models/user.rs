use serde::{Deserialize, Serialize};

use crate::error::FlowError;

/// Response of `POST /auth/login` and `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub style: Option<String>,
}

/// How the user prefers to structure focused work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductivityStyle {
    /// Pomodoro mixed with breaks.
    #[default]
    Balanced,
    /// Long deep-work sessions.
    #[serde(rename = "High-Focus")]
    HighFocus,
    /// Flow-state driven.
    Flexible,
}

impl ProductivityStyle {
    pub const ALL: [Self; 3] = [Self::Balanced, Self::HighFocus, Self::Flexible];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::HighFocus => "High-Focus",
            Self::Flexible => "Flexible",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Balanced => "Pomodoro mixed with breaks",
            Self::HighFocus => "Deep work sessions",
            Self::Flexible => "Flow state driven",
        }
    }

    /// # Errors
    ///
    /// Returns `FlowError::InvalidArgument` for unknown styles.
    pub fn parse(s: &str) -> Result<Self, FlowError> {
        let normalized: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "balanced" => Ok(Self::Balanced),
            "highfocus" | "focus" | "deep" => Ok(Self::HighFocus),
            "flexible" | "flow" => Ok(Self::Flexible),
            _ => Err(FlowError::InvalidArgument(format!(
                "Unknown productivity style '{s}' (expected Balanced, High-Focus or Flexible)"
            ))),
        }
    }
}

impl std::fmt::Display for ProductivityStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response of `GET /user/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub daily_goal_hours: Option<f64>,
}

/// Body of `PUT /user/profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ProductivityStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_goal_hours: Option<u32>,
}

impl ProfileUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.avatar.is_none()
            && self.style.is_none()
            && self.daily_goal_hours.is_none()
    }
}

/// Response of `GET /user/settings`. The server defaults every flag to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default = "default_true")]
    pub notifications_daily_summary: bool,
    #[serde(default = "default_true")]
    pub notifications_distraction_alerts: bool,
    #[serde(default = "default_true")]
    pub notifications_weekly_report: bool,
    #[serde(default = "default_true")]
    pub cloud_sync_enabled: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications_daily_summary: true,
            notifications_distraction_alerts: true,
            notifications_weekly_report: true,
            cloud_sync_enabled: true,
        }
    }
}

/// A single toggle on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SettingKey {
    /// Daily productivity summary
    DailySummary,
    /// Real-time distraction alerts
    DistractionAlerts,
    /// Weekly report emails
    WeeklyReport,
    /// Cloud sync
    CloudSync,
}

impl SettingKey {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DailySummary => "Daily productivity summary",
            Self::DistractionAlerts => "Distraction alerts (Real-time)",
            Self::WeeklyReport => "Weekly report emails",
            Self::CloudSync => "Cloud sync",
        }
    }
}

/// Body of `PUT /user/settings`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_daily_summary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_distraction_alerts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_weekly_report: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_sync_enabled: Option<bool>,
}

impl SettingsUpdate {
    /// An update that changes exactly one toggle.
    #[must_use]
    pub fn single(key: SettingKey, value: bool) -> Self {
        let mut update = Self::default();
        match key {
            SettingKey::DailySummary => update.notifications_daily_summary = Some(value),
            SettingKey::DistractionAlerts => update.notifications_distraction_alerts = Some(value),
            SettingKey::WeeklyReport => update.notifications_weekly_report = Some(value),
            SettingKey::CloudSync => update.cloud_sync_enabled = Some(value),
        }
        update
    }
}

/// Response of the profile and settings `PUT` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAck {
    pub status: String,
    #[serde(default)]
    pub updated: serde_json::Value,
}

/// Plain `{"status": ...}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub status: String,
}
