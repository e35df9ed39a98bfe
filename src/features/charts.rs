//! Terminal charts for dashboards and analytics.
//!
//! Everything here renders to plain strings so the same charts can go to
//! stdout or into a TUI paragraph.

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart.
///
/// Each row is `label |█████      value`. Bars are scaled to the largest
/// value; `format_value` renders the trailing number.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bar_chart<F>(data: &[(String, f64)], bar_width: usize, format_value: F) -> String
where
    F: Fn(f64) -> String,
{
    if data.is_empty() {
        return String::new();
    }

    let label_width = data.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max_value = data
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);
    let max_value = if max_value > 0.0 { max_value } else { 1.0 };

    data.iter()
        .map(|(label, value)| {
            let ratio = (value.max(0.0) / max_value).min(1.0);
            let bar_length = ((ratio * bar_width as f64).round() as usize).min(bar_width);
            format!(
                "{label:<label_width$} |{}{} {}",
                FULL_BLOCK.to_string().repeat(bar_length),
                " ".repeat(bar_width - bar_length),
                format_value(*value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a sparkline (compact inline chart).
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_sparkline(values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = values.iter().copied().fold(0.0_f64, f64::max);
    let max_value = if max_value > 0.0 { max_value } else { 1.0 };

    values
        .iter()
        .map(|&v| {
            if v <= 0.0 {
                BAR_CHARS[0]
            } else {
                let level = ((v / max_value) * 7.0).round() as usize;
                BAR_CHARS[level.clamp(1, 7)]
            }
        })
        .collect()
}

/// Render a percentage gauge such as `[██████░░░░] 60%`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_gauge(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = ((fraction * width as f64).round() as usize).min(width);

    format!(
        "[{}{}] {:.0}%",
        FULL_BLOCK.to_string().repeat(filled),
        "░".repeat(width - filled),
        fraction * 100.0
    )
}

/// Format a minute count as `2h 05m` or `45m`.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours}h {mins:02}m")
    } else {
        format!("{mins}m")
    }
}
