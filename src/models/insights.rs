//! Dashboard, analytics and prediction payloads.
//!
//! These are display-only: the client maps them straight to cards and charts.

use serde::{Deserialize, Serialize};

use super::Task;

/// Response of `GET /dashboard/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Preformatted, e.g. `"82/100"`.
    pub focus_score: String,
    pub tasks_completed: u32,
    /// Preformatted, e.g. `"45m"`.
    pub distraction_time: String,
    #[serde(default)]
    pub ai_alerts: Vec<AiAlert>,
    #[serde(default)]
    pub up_next_tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAlert {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(rename = "type", default)]
    pub kind: AlertKind,
    #[serde(default)]
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    #[serde(alias = "positive")]
    Success,
    #[default]
    #[serde(other)]
    Info,
}

/// One point of the hourly or daily focus/distraction series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub time: String,
    pub focus_score: f64,
    pub distraction_level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted: Option<f64>,
}

/// Response item of `GET /analytics/weekly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPoint {
    pub day: String,
    pub focus_hours: f64,
    pub efficiency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_completed: Option<u32>,
}

/// Response of `GET /analytics/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub most_productive_time: String,
    pub consistency_score: f64,
    pub top_distraction: String,
    pub distraction_minutes: u32,
}

/// Response of `GET /analytics/breakdown`, in minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Breakdown {
    pub productive: u32,
    pub neutral: u32,
    pub distracted: u32,
}

impl Breakdown {
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.productive + self.neutral + self.distracted
    }
}

/// Response of `GET /ml/tomorrow`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TomorrowPrediction {
    pub workload: String,
    /// Probability in `[0, 1]`.
    pub completion_probability: f64,
}

/// Response of `GET /ml/recommendation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusRecommendation {
    pub start: String,
    pub end: String,
}

/// Response item of `GET /ml/forecast`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub day: String,
    /// Percentage in `[0, 100]`.
    pub completion_prob: f64,
}
