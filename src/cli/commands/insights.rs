use serde_json::json;

use crate::api::{ApiClient, Transport};
use crate::cli::args::{AnalyticsArgs, AnalyticsCommands, OutputFormat};
use crate::error::FlowError;
use crate::output::{
    format_analytics_summary_pretty, format_breakdown_pretty, format_dashboard_pretty,
    format_insights_pretty, format_trend_pretty, format_weekly_pretty, render, to_json,
};

/// Execute dashboard command
///
/// # Errors
///
/// Returns an error if the API call fails or output formatting fails.
pub fn dashboard<T: Transport>(client: &ApiClient<T>, format: OutputFormat) -> Result<String, FlowError> {
    let summary = client.dashboard_summary()?;
    let hourly = client.hourly_trend()?;

    match format {
        OutputFormat::Json => to_json(&json!({
            "summary": summary,
            "hourly": hourly,
        })),
        OutputFormat::Pretty => Ok(format_dashboard_pretty(&summary, &hourly)),
    }
}

/// Execute analytics command
///
/// # Errors
///
/// Returns an error if the API call fails or output formatting fails.
pub fn analytics<T: Transport>(
    client: &ApiClient<T>,
    args: AnalyticsArgs,
    format: OutputFormat,
) -> Result<String, FlowError> {
    match args.command {
        Some(AnalyticsCommands::Weekly) => {
            render(&client.weekly()?, format, |week| format_weekly_pretty(week))
        }
        Some(AnalyticsCommands::Summary) => {
            render(&client.analytics_summary()?, format, format_analytics_summary_pretty)
        }
        Some(AnalyticsCommands::Breakdown) => {
            render(&client.breakdown()?, format, format_breakdown_pretty)
        }
        Some(AnalyticsCommands::Trend) => render(&client.daily_trend()?, format, |points| {
            format_trend_pretty(points, "Daily trend")
        }),
        None => {
            let summary = client.analytics_summary()?;
            let breakdown = client.breakdown()?;
            let weekly = client.weekly()?;

            match format {
                OutputFormat::Json => to_json(&json!({
                    "summary": summary,
                    "breakdown": breakdown,
                    "weekly": weekly,
                })),
                OutputFormat::Pretty => Ok([
                    format_analytics_summary_pretty(&summary),
                    format_breakdown_pretty(&breakdown),
                    format_weekly_pretty(&weekly),
                ]
                .join("\n")),
            }
        }
    }
}

/// Execute insights command
///
/// # Errors
///
/// Returns an error if the API call fails or output formatting fails.
pub fn insights<T: Transport>(client: &ApiClient<T>, format: OutputFormat) -> Result<String, FlowError> {
    let tomorrow = client.tomorrow()?;
    let recommendation = client.recommendation()?;
    let forecast = client.forecast()?;

    match format {
        OutputFormat::Json => to_json(&json!({
            "tomorrow": tomorrow,
            "recommendation": recommendation,
            "forecast": forecast,
        })),
        OutputFormat::Pretty => Ok(format_insights_pretty(&tomorrow, &recommendation, &forecast)),
    }
}
