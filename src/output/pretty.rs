use colored::Colorize;

use crate::core::Schedulable;
use crate::features::charts::{format_minutes, render_bar_chart, render_gauge, render_sparkline};
use crate::features::focus::{format_mmss, render_progress_bar, FocusTimer};
use crate::models::{
    AlertKind, AnalyticsSummary, Breakdown, DashboardSummary, FocusRecommendation,
    FocusSessionRecord, ForecastDay, OnboardingResult, Priority, ProductivityStyle, Profile, SettingKey, Task,
    TaskStatus, TomorrowPrediction, TrendPoint, UserSettings, WeeklyPoint,
};

const RULE_WIDTH: usize = 60;
const CHART_WIDTH: usize = 30;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn status_icon(status: TaskStatus) -> colored::ColoredString {
    match status {
        TaskStatus::Todo => "[ ]".white(),
        TaskStatus::InProgress => "[~]".yellow(),
        TaskStatus::Completed => "[x]".green(),
    }
}

fn priority_label(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => "!high".red(),
        Priority::Medium => "!med".yellow(),
        Priority::Low => "!low".dimmed(),
    }
}

fn task_line(task: &Task) -> String {
    let title = if task.is_completed() {
        task.title.strikethrough().to_string()
    } else {
        task.title.bold().to_string()
    };

    let mut line = format!("{} {}", status_icon(task.status), title);
    line.push_str(&format!("  {}", task.category.dimmed()));
    line.push_str(&format!("  {}", priority_label(task.priority)));

    if let Some(due) = &task.due_date {
        let due = if task.is_overdue() { due.red() } else { due.yellow() };
        line.push_str(&format!("  {due}"));
    }
    if task.status == TaskStatus::InProgress {
        line.push_str(&format!("  {}%", task.progress));
    }
    line.push_str(&format!("  {}", format!("({})", task.id).dimmed()));

    line
}

/// Format a list of tasks under a heading.
#[must_use]
pub fn format_tasks_pretty(tasks: &[&Task], title: &str) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 tasks)\n  No tasks");
    }

    let mut output = format!("{title} ({} tasks)\n", tasks.len());
    output.push_str(&rule());
    output.push('\n');

    for task in tasks {
        output.push_str(&task_line(task));
        output.push('\n');
    }

    output
}

/// Format a single task with every field.
#[must_use]
pub fn format_task_pretty(task: &Task) -> String {
    let mut output = format!("{} {}\n", status_icon(task.status), task.title.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), task.id));
    output.push_str(&format!("  {}: {}\n", "Status".dimmed(), task.status));
    output.push_str(&format!("  {}: {}\n", "Category".dimmed(), task.category));
    output.push_str(&format!("  {}: {}\n", "Priority".dimmed(), task.priority));
    if let Some(due) = &task.due_date {
        output.push_str(&format!("  {}: {}\n", "Due".dimmed(), due));
    }
    output.push_str(&format!(
        "  {}: {}\n",
        "Progress".dimmed(),
        render_gauge(f64::from(task.progress) / 100.0, 20)
    ));
    output
}

fn alert_icon(kind: AlertKind) -> colored::ColoredString {
    match kind {
        AlertKind::Warning => "⚠".yellow(),
        AlertKind::Success => "✓".green(),
        AlertKind::Info => "ℹ".cyan(),
    }
}

/// Dashboard summary cards, alerts, next tasks and the hourly chart.
#[must_use]
pub fn format_dashboard_pretty(summary: &DashboardSummary, hourly: &[TrendPoint]) -> String {
    let mut output = format!("{}\n", "Dashboard".bold().underline());
    output.push_str(&rule());
    output.push('\n');

    output.push_str(&format!("  {:<18} {}\n", "Focus score".dimmed(), summary.focus_score.bold()));
    output.push_str(&format!(
        "  {:<18} {}\n",
        "Tasks completed".dimmed(),
        summary.tasks_completed.to_string().green()
    ));
    output.push_str(&format!(
        "  {:<18} {}\n",
        "Distraction time".dimmed(),
        summary.distraction_time.yellow()
    ));

    if !summary.ai_alerts.is_empty() {
        output.push_str(&format!("\n{}\n", "AI alerts".bold()));
        for alert in &summary.ai_alerts {
            output.push_str(&format!(
                "  {} {}: {}\n",
                alert_icon(alert.kind),
                alert.title.bold(),
                alert.message
            ));
        }
    }

    if !summary.up_next_tasks.is_empty() {
        output.push_str(&format!("\n{}\n", "Up next".bold()));
        for task in &summary.up_next_tasks {
            output.push_str(&format!("  {}\n", task_line(task)));
        }
    }

    if !hourly.is_empty() {
        output.push_str(&format!("\n{}\n", "Today by hour".bold()));
        output.push_str(&format_trend_body(hourly));
    }

    output
}

fn format_trend_body(points: &[TrendPoint]) -> String {
    let focus: Vec<f64> = points.iter().map(|p| p.focus_score).collect();
    let distraction: Vec<f64> = points.iter().map(|p| p.distraction_level).collect();

    let mut output = format!("  {:<12} {}\n", "Focus".dimmed(), render_sparkline(&focus).green());
    output.push_str(&format!(
        "  {:<12} {}\n",
        "Distraction".dimmed(),
        render_sparkline(&distraction).red()
    ));

    let data: Vec<(String, f64)> = points.iter().map(|p| (p.time.clone(), p.focus_score)).collect();
    for line in render_bar_chart(&data, CHART_WIDTH, |v| format!("{v:.0}")).lines() {
        output.push_str(&format!("  {line}\n"));
    }
    output
}

/// Focus/distraction trend (hourly or daily).
#[must_use]
pub fn format_trend_pretty(points: &[TrendPoint], title: &str) -> String {
    let mut output = format!("{}\n", title.bold().underline());
    output.push_str(&rule());
    output.push('\n');

    if points.is_empty() {
        output.push_str("  No data yet\n");
        return output;
    }

    output.push_str(&format_trend_body(points));
    output
}

/// Weekly focus hours chart.
#[must_use]
pub fn format_weekly_pretty(week: &[WeeklyPoint]) -> String {
    let mut output = format!("{}\n", "Weekly focus".bold().underline());
    output.push_str(&rule());
    output.push('\n');

    if week.is_empty() {
        output.push_str("  No data yet\n");
        return output;
    }

    let data: Vec<(String, f64)> = week.iter().map(|d| (d.day.clone(), d.focus_hours)).collect();
    for (line, day) in render_bar_chart(&data, CHART_WIDTH, |v| format!("{v:.1}h"))
        .lines()
        .zip(week)
    {
        output.push_str(&format!(
            "  {line}  {}\n",
            format!("{:.0}% efficient", day.efficiency).dimmed()
        ));
    }

    let total: f64 = week.iter().map(|d| d.focus_hours).sum();
    output.push_str(&format!("\n  {} {:.1}h\n", "Total:".dimmed(), total));
    output
}

/// Analytics summary card.
#[must_use]
pub fn format_analytics_summary_pretty(summary: &AnalyticsSummary) -> String {
    let mut output = format!("{}\n", "Analytics".bold().underline());
    output.push_str(&rule());
    output.push('\n');
    output.push_str(&format!(
        "  {:<22} {}\n",
        "Most productive time".dimmed(),
        summary.most_productive_time.bold()
    ));
    output.push_str(&format!(
        "  {:<22} {}\n",
        "Consistency".dimmed(),
        render_gauge(summary.consistency_score / 100.0, 20)
    ));
    output.push_str(&format!(
        "  {:<22} {} ({})\n",
        "Top distraction".dimmed(),
        summary.top_distraction.yellow(),
        format_minutes(summary.distraction_minutes)
    ));
    output
}

/// Productive/neutral/distracted split.
#[must_use]
pub fn format_breakdown_pretty(breakdown: &Breakdown) -> String {
    let mut output = format!("{}\n", "Time breakdown".bold().underline());
    output.push_str(&rule());
    output.push('\n');

    let total = breakdown.total();
    if total == 0 {
        output.push_str("  No tracked time yet\n");
        return output;
    }

    for (label, minutes) in [
        ("Productive", breakdown.productive),
        ("Neutral", breakdown.neutral),
        ("Distracted", breakdown.distracted),
    ] {
        output.push_str(&format!(
            "  {label:<11} {}  {}\n",
            render_gauge(f64::from(minutes) / f64::from(total), 20),
            format_minutes(minutes).dimmed()
        ));
    }
    output
}

/// ML predictions: tomorrow's workload, the best focus window, the forecast.
#[must_use]
pub fn format_insights_pretty(
    tomorrow: &TomorrowPrediction,
    recommendation: &FocusRecommendation,
    forecast: &[ForecastDay],
) -> String {
    let mut output = format!("{}\n", "Insights".bold().underline());
    output.push_str(&rule());
    output.push('\n');

    output.push_str(&format!(
        "  {:<22} {}\n",
        "Tomorrow's workload".dimmed(),
        tomorrow.workload.bold()
    ));
    output.push_str(&format!(
        "  {:<22} {}\n",
        "Completion chance".dimmed(),
        render_gauge(tomorrow.completion_probability, 20)
    ));
    output.push_str(&format!(
        "  {:<22} {} - {}\n",
        "Best focus window".dimmed(),
        recommendation.start.green(),
        recommendation.end.green()
    ));

    if !forecast.is_empty() {
        output.push_str(&format!("\n{}\n", "Completion forecast".bold()));
        let data: Vec<(String, f64)> = forecast
            .iter()
            .map(|d| (d.day.clone(), d.completion_prob))
            .collect();
        for line in render_bar_chart(&data, CHART_WIDTH, |v| format!("{v:.0}%")).lines() {
            output.push_str(&format!("  {line}\n"));
        }
    }

    output
}

#[must_use]
pub fn format_profile_pretty(profile: &Profile) -> String {
    let unset = || "(not set)".dimmed().to_string();

    let mut output = format!(
        "{}\n",
        profile.name.as_deref().unwrap_or("Profile").bold()
    );
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), profile.id));
    output.push_str(&format!(
        "  {}: {}\n",
        "Email".dimmed(),
        profile.email.clone().unwrap_or_else(unset)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Style".dimmed(),
        profile.style.clone().unwrap_or_else(unset)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Daily goal".dimmed(),
        profile
            .daily_goal_hours
            .map_or_else(unset, |h| format!("{h}h"))
    ));
    if let Some(avatar) = &profile.avatar {
        output.push_str(&format!("  {}: {}\n", "Avatar".dimmed(), avatar));
    }
    output
}

fn on_off(enabled: bool) -> colored::ColoredString {
    if enabled {
        "on".green()
    } else {
        "off".dimmed()
    }
}

#[must_use]
pub fn format_settings_pretty(settings: &UserSettings) -> String {
    let mut output = format!("{}\n", "Settings".bold());
    for (key, value) in [
        (SettingKey::DailySummary, settings.notifications_daily_summary),
        (SettingKey::DistractionAlerts, settings.notifications_distraction_alerts),
        (SettingKey::WeeklyReport, settings.notifications_weekly_report),
        (SettingKey::CloudSync, settings.cloud_sync_enabled),
    ] {
        output.push_str(&format!("  {:<32} {}\n", key.label(), on_off(value)));
    }
    output
}

#[must_use]
pub fn format_session_pretty(record: &FocusSessionRecord) -> String {
    let state = if record.is_open() {
        "open".green()
    } else {
        "closed".dimmed()
    };

    let mut output = format!("Focus session {} ({state})\n", record.id.bold());
    if let Some(start) = &record.start_time {
        output.push_str(&format!("  {}: {}\n", "Started".dimmed(), start));
    }
    if let Some(end) = &record.end_time {
        output.push_str(&format!("  {}: {}\n", "Ended".dimmed(), end));
    }
    if let Some(seconds) = record.duration_seconds {
        let seconds = u32::try_from(seconds.max(0)).unwrap_or(u32::MAX);
        output.push_str(&format!("  {}: {}\n", "Duration".dimmed(), format_mmss(seconds)));
    }
    output.push_str(&format!(
        "  {}: {}\n",
        "Notifications blocked".dimmed(),
        on_off(record.blocked_notifications)
    ));
    output
}

/// One-line timer readout: `▶ 12:34 [████░░░░] 50%  notifications blocked`.
#[must_use]
pub fn format_timer_line(timer: &FocusTimer) -> String {
    let state = if timer.is_active() {
        "▶".green()
    } else if timer.is_finished() {
        "✓".green()
    } else {
        "⏸".yellow()
    };

    let mut line = format!(
        "{state} {} {} {:.0}%",
        timer.format_remaining().bold(),
        render_progress_bar(timer.progress(), 30),
        timer.progress() * 100.0
    );
    if timer.notifications_blocked() {
        line.push_str(&format!("  {}", "notifications blocked".dimmed()));
    }
    line
}

#[must_use]
pub fn format_onboarding_pretty(result: &OnboardingResult) -> String {
    let mut output = format!("{} {}\n", "✓".green(), result.message);
    if let Some(user) = &result.user {
        if let Some(style) = &user.style {
            let blurb = ProductivityStyle::parse(style)
                .map(|s| format!(" ({})", s.description()))
                .unwrap_or_default();
            output.push_str(&format!("  {}: {style}{blurb}\n", "Style".dimmed()));
        }
        if let (Some(start), Some(end)) = (&user.work_start, &user.work_end) {
            output.push_str(&format!("  {}: {start} - {end}\n", "Working hours".dimmed()));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AiAlert;

    fn make_task(title: &str, status: TaskStatus) -> Task {
        Task {
            id: "t1".to_string(),
            title: title.to_string(),
            category: "Work".to_string(),
            due_date: Some("2024-01-12".to_string()),
            priority: Priority::High,
            status,
            progress: 40,
        }
    }

    #[test]
    fn test_format_tasks_empty() {
        let output = format_tasks_pretty(&[], "Completed");
        assert!(output.contains("Completed (0 tasks)"));
        assert!(output.contains("No tasks"));
    }

    #[test]
    fn test_format_tasks_lines() {
        let a = make_task("Write report", TaskStatus::InProgress);
        let b = make_task("Ship it", TaskStatus::Completed);
        let output = format_tasks_pretty(&[&a, &b], "All");

        assert!(output.contains("All (2 tasks)"));
        assert!(output.contains("Write report"));
        assert!(output.contains("Ship it"));
        assert!(output.contains("2024-01-12"));
        assert!(output.contains("40%"));
    }

    #[test]
    fn test_format_task_detail() {
        let output = format_task_pretty(&make_task("Write report", TaskStatus::Todo));
        assert!(output.contains("Write report"));
        assert!(output.contains("Todo"));
        assert!(output.contains("40%"));
    }

    #[test]
    fn test_format_dashboard() {
        let summary = DashboardSummary {
            focus_score: "82/100".to_string(),
            tasks_completed: 5,
            distraction_time: "35m".to_string(),
            ai_alerts: vec![AiAlert {
                id: serde_json::json!(1),
                kind: AlertKind::Warning,
                title: "Afternoon dip".to_string(),
                message: "Focus drops after 3pm".to_string(),
            }],
            up_next_tasks: vec![make_task("Review PR", TaskStatus::Todo)],
        };
        let hourly = vec![TrendPoint {
            time: "9AM".to_string(),
            focus_score: 80.0,
            distraction_level: 10.0,
            predicted: None,
        }];

        let output = format_dashboard_pretty(&summary, &hourly);
        assert!(output.contains("82/100"));
        assert!(output.contains("35m"));
        assert!(output.contains("Afternoon dip"));
        assert!(output.contains("Review PR"));
        assert!(output.contains("9AM"));
    }

    #[test]
    fn test_format_weekly_total() {
        let week = vec![
            WeeklyPoint {
                day: "Mon".to_string(),
                focus_hours: 4.5,
                efficiency: 80.0,
                tasks_completed: None,
            },
            WeeklyPoint {
                day: "Tue".to_string(),
                focus_hours: 3.0,
                efficiency: 60.0,
                tasks_completed: None,
            },
        ];
        let output = format_weekly_pretty(&week);
        assert!(output.contains("4.5h"));
        assert!(output.contains("7.5h"));
        assert!(output.contains("80% efficient"));
    }

    #[test]
    fn test_format_breakdown_empty() {
        let output = format_breakdown_pretty(&Breakdown {
            productive: 0,
            neutral: 0,
            distracted: 0,
        });
        assert!(output.contains("No tracked time yet"));
    }

    #[test]
    fn test_format_breakdown_split() {
        let output = format_breakdown_pretty(&Breakdown {
            productive: 300,
            neutral: 60,
            distracted: 40,
        });
        assert!(output.contains("75%"));
        assert!(output.contains("5h 00m"));
    }

    #[test]
    fn test_format_settings() {
        let settings = UserSettings {
            cloud_sync_enabled: false,
            ..UserSettings::default()
        };
        let output = format_settings_pretty(&settings);
        assert!(output.contains("Cloud sync"));
        assert!(output.contains("off"));
        assert!(output.contains("Weekly report emails"));
    }

    #[test]
    fn test_format_session() {
        let record = FocusSessionRecord {
            id: "s1".to_string(),
            start_time: Some("2024-01-10T09:00:00Z".to_string()),
            end_time: Some("2024-01-10T09:25:00Z".to_string()),
            duration_seconds: Some(1500),
            blocked_notifications: true,
        };
        let output = format_session_pretty(&record);
        assert!(output.contains("s1"));
        assert!(output.contains("closed"));
        assert!(output.contains("25:00"));
    }

    #[test]
    fn test_format_timer_line() {
        let mut timer = FocusTimer::new(100).with_notifications_blocked(true);
        timer.start();
        for _ in 0..50 {
            timer.tick();
        }
        let line = format_timer_line(&timer);
        assert!(line.contains("00:50"));
        assert!(line.contains("50%"));
        assert!(line.contains("notifications blocked"));
    }
}
