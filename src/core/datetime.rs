//! Date and time parsing for command-line input.
//!
//! Due dates accept a handful of natural phrases on top of ISO dates, and
//! working hours are plain `HH:MM` clock times.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};

/// Parse a natural language date expression relative to today.
///
/// Supports:
/// - `today`, `tomorrow`, `yesterday`
/// - `monday` .. `sunday` (next occurrence, never today), `next friday`
/// - `in 3 days`, `in 2 weeks`
/// - `2024-12-15`
#[must_use]
pub fn parse_natural_date(input: &str) -> Option<NaiveDate> {
    parse_date_from(input, Local::now().date_naive())
}

/// Same as [`parse_natural_date`] with an explicit anchor date.
#[must_use]
pub fn parse_date_from(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {},
    }

    if let Some(date) = parse_relative_offset(&input, today) {
        return Some(date);
    }

    let weekday_part = input.strip_prefix("next ").unwrap_or(&input);
    if let Some(day) = parse_weekday(weekday_part) {
        return Some(next_weekday(today, day));
    }

    NaiveDate::parse_from_str(&input, "%Y-%m-%d").ok()
}

/// "in N days" / "in N weeks".
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let rest = input.strip_prefix("in ")?;
    let mut parts = rest.split_whitespace();
    let amount: i64 = parts.next()?.parse().ok()?;
    let unit = parts.next()?;

    if parts.next().is_some() {
        return None;
    }

    match unit {
        "day" | "days" => Some(today + Duration::days(amount)),
        "week" | "weeks" => Some(today + Duration::weeks(amount)),
        _ => None,
    }
}

fn parse_weekday(input: &str) -> Option<Weekday> {
    match input {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let current = i64::from(today.weekday().num_days_from_monday());
    let wanted = i64::from(target.num_days_from_monday());
    let mut delta = (wanted - current).rem_euclid(7);
    if delta == 0 {
        delta = 7;
    }
    today + Duration::days(delta)
}

/// Parse a wall-clock time in 24-hour `HH:MM` form.
#[must_use]
pub fn parse_clock_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-10 is a Wednesday
    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_parse_relative_words() {
        assert_eq!(parse_date_from("today", anchor()), Some(anchor()));
        assert_eq!(
            parse_date_from("Tomorrow", anchor()),
            NaiveDate::from_ymd_opt(2024, 1, 11)
        );
        assert_eq!(
            parse_date_from("yesterday", anchor()),
            NaiveDate::from_ymd_opt(2024, 1, 9)
        );
    }

    #[test]
    fn test_parse_offsets() {
        assert_eq!(
            parse_date_from("in 3 days", anchor()),
            NaiveDate::from_ymd_opt(2024, 1, 13)
        );
        assert_eq!(
            parse_date_from("in 2 weeks", anchor()),
            NaiveDate::from_ymd_opt(2024, 1, 24)
        );
        assert_eq!(parse_date_from("in 2 fortnights", anchor()), None);
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            parse_date_from("friday", anchor()),
            NaiveDate::from_ymd_opt(2024, 1, 12)
        );
        assert_eq!(
            parse_date_from("next monday", anchor()),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        // Same weekday rolls over a full week
        assert_eq!(
            parse_date_from("wednesday", anchor()),
            NaiveDate::from_ymd_opt(2024, 1, 17)
        );
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(
            parse_date_from("2024-12-15", anchor()),
            NaiveDate::from_ymd_opt(2024, 12, 15)
        );
        assert_eq!(parse_date_from("someday", anchor()), None);
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("09:00"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_clock_time("17:30"), NaiveTime::from_hms_opt(17, 30, 0));
        assert!(parse_clock_time("25:00").is_none());
        assert!(parse_clock_time("9am").is_none());
    }
}
