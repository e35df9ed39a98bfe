//! Wire types exchanged with the FocusFlow API.

mod focus;
mod insights;
mod onboarding;
mod task;
mod user;

pub use focus::{FocusEndRequest, FocusSessionRecord, FocusStartRequest};
pub use insights::{
    AiAlert, AlertKind, AnalyticsSummary, Breakdown, DashboardSummary, FocusRecommendation,
    ForecastDay, TomorrowPrediction, TrendPoint, WeeklyPoint,
};
pub use onboarding::{OnboardedUser, OnboardingPayload, OnboardingResult};
pub use task::{NewTask, Priority, Task, TaskStatus, TaskUpdate, CATEGORIES, DEFAULT_CATEGORY};
pub use user::{
    Ack, AuthResponse, AuthUser, ProductivityStyle, Profile, ProfileUpdate, SettingKey,
    SettingsUpdate, UpdateAck, UserSettings,
};
