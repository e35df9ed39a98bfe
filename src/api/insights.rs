//! Read-only dashboard, analytics and prediction endpoints.

use super::client::ApiClient;
use super::transport::Transport;
use crate::error::FlowError;
use crate::models::{
    AnalyticsSummary, Breakdown, DashboardSummary, FocusRecommendation, ForecastDay,
    TomorrowPrediction, TrendPoint, WeeklyPoint,
};

impl<T: Transport> ApiClient<T> {
    /// `GET /dashboard/summary`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn dashboard_summary(&self) -> Result<DashboardSummary, FlowError> {
        self.get("/dashboard/summary")
    }

    /// `GET /dashboard/hourly`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn hourly_trend(&self) -> Result<Vec<TrendPoint>, FlowError> {
        self.get("/dashboard/hourly")
    }

    /// `GET /analytics/weekly`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn weekly(&self) -> Result<Vec<WeeklyPoint>, FlowError> {
        self.get("/analytics/weekly")
    }

    /// `GET /analytics/summary`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn analytics_summary(&self) -> Result<AnalyticsSummary, FlowError> {
        self.get("/analytics/summary")
    }

    /// `GET /analytics/breakdown`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn breakdown(&self) -> Result<Breakdown, FlowError> {
        self.get("/analytics/breakdown")
    }

    /// `GET /analytics/daily-trend`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn daily_trend(&self) -> Result<Vec<TrendPoint>, FlowError> {
        self.get("/analytics/daily-trend")
    }

    /// `GET /ml/tomorrow`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn tomorrow(&self) -> Result<TomorrowPrediction, FlowError> {
        self.get("/ml/tomorrow")
    }

    /// `GET /ml/recommendation`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn recommendation(&self) -> Result<FocusRecommendation, FlowError> {
        self.get("/ml/recommendation")
    }

    /// `GET /ml/forecast`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub fn forecast(&self) -> Result<Vec<ForecastDay>, FlowError> {
        self.get("/ml/forecast")
    }
}
