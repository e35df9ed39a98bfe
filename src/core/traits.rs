//! Shared traits for items fetched from the API.

use chrono::NaiveDate;

/// A value that can be extracted from a filterable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// String value.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Optional date value.
    OptionalDate(Option<NaiveDate>),
}

impl FieldValue {
    /// Check if this value contains a substring (case-insensitive).
    #[must_use]
    pub fn contains_str(&self, needle: &str) -> bool {
        match self {
            Self::String(s) => s.to_lowercase().contains(&needle.to_lowercase()),
            Self::Integer(_) | Self::OptionalDate(_) => false,
        }
    }

    /// Check if this value is null/none.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::OptionalDate(None))
    }
}

/// Items that the filter engine can query by field name.
pub trait Filterable {
    /// Get the value of a named field, or `None` if the field doesn't exist.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    fn id(&self) -> &str;

    fn name(&self) -> &str;
}

/// Items with a due date.
pub trait Schedulable {
    fn due_date(&self) -> Option<NaiveDate>;

    /// Finished items are never overdue.
    fn is_done(&self) -> bool;

    /// Check if this item is past its due date.
    fn is_overdue(&self) -> bool {
        let today = chrono::Local::now().date_naive();
        !self.is_done() && self.due_date().is_some_and(|d| d < today)
    }

    /// Check if this item is due within the next N days.
    fn is_due_within(&self, days: i64) -> bool {
        let today = chrono::Local::now().date_naive();
        let horizon = today + chrono::Duration::days(days);
        self.due_date().is_some_and(|d| d <= horizon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        due: Option<NaiveDate>,
        done: bool,
    }

    impl Schedulable for Item {
        fn due_date(&self) -> Option<NaiveDate> {
            self.due
        }

        fn is_done(&self) -> bool {
            self.done
        }
    }

    #[test]
    fn test_field_value_contains_str() {
        let value = FieldValue::String("Quarterly Report".to_string());
        assert!(value.contains_str("report"));
        assert!(!value.contains_str("invoice"));
        assert!(!FieldValue::Integer(5).contains_str("5"));
    }

    #[test]
    fn test_field_value_is_null() {
        assert!(FieldValue::OptionalDate(None).is_null());
        assert!(!FieldValue::String(String::new()).is_null());
    }

    #[test]
    fn test_overdue_ignores_done_items() {
        let yesterday = chrono::Local::now().date_naive() - chrono::Duration::days(1);
        assert!(Item { due: Some(yesterday), done: false }.is_overdue());
        assert!(!Item { due: Some(yesterday), done: true }.is_overdue());
        assert!(!Item { due: None, done: false }.is_overdue());
    }

    #[test]
    fn test_due_within() {
        let in_two = chrono::Local::now().date_naive() + chrono::Duration::days(2);
        let item = Item { due: Some(in_two), done: false };
        assert!(item.is_due_within(3));
        assert!(!item.is_due_within(1));
    }
}
