//! Filter engine for querying tasks.
//!
//! Provides a SQL-like query language for narrowing a fetched task list.
//!
//! # Syntax
//!
//! ```text
//! field OPERATOR value [AND|OR condition...]
//! ```
//!
//! ## Operators
//! - `=`, `!=` - Equality (case-insensitive, ignores spaces and underscores)
//! - `<`, `>`, `<=`, `>=` - Comparison (dates and numbers)
//! - `LIKE` - Pattern matching (% for wildcard)
//! - `CONTAINS` - Substring match
//! - `IS NULL`, `IS NOT NULL` - Null checks
//! - `IN` - List membership
//!
//! ## Fields
//! - `title` - Task title
//! - `category` - Work, Personal, ...
//! - `priority` - Low, Medium, High
//! - `status` - Todo, In Progress, Completed
//! - `due` - Due date (YYYY-MM-DD or relative: today, tomorrow, friday)
//! - `progress` - 0 to 100
//!
//! ## Examples
//!
//! ```text
//! status = todo AND due < today
//! priority IN (High, Medium) AND category = Work
//! title LIKE '%report%' OR progress >= 50
//! NOT status = completed
//! ```

use chrono::NaiveDate;
use regex::Regex;

use crate::core::{parse_natural_date, FieldValue, Filterable};
use crate::error::FlowError;

/// Comparison operators for filter conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    /// Pattern match with wildcards (LIKE)
    Like,
    /// Substring containment (CONTAINS)
    Contains,
    IsNull,
    IsNotNull,
    /// List membership (IN)
    In,
}

/// A single filter condition.
#[derive(Debug, Clone)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: FilterValue,
}

/// A value on the right-hand side of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    String(String),
    Date(NaiveDate),
    Integer(i64),
    /// For the IN operator.
    StringList(Vec<String>),
    /// For IS NULL / IS NOT NULL.
    None,
}

impl FilterValue {
    fn parse(s: &str) -> Self {
        let trimmed = s.trim();

        if let Some(inner) = strip_quotes(trimmed) {
            return Self::String(inner.to_string());
        }

        if trimmed.starts_with('(') && trimmed.ends_with(')') {
            let inner = &trimmed[1..trimmed.len() - 1];
            let items = inner
                .split(',')
                .map(|item| {
                    let t = item.trim();
                    strip_quotes(t).unwrap_or(t).to_string()
                })
                .collect();
            return Self::StringList(items);
        }

        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::Integer(n);
        }

        if let Some(date) = parse_natural_date(trimmed) {
            return Self::Date(date);
        }

        Self::String(trimmed.to_string())
    }
}

fn strip_quotes(s: &str) -> Option<&str> {
    let quoted = s.len() >= 2
        && ((s.starts_with('\'') && s.ends_with('\'')) || (s.starts_with('"') && s.ends_with('"')));
    quoted.then(|| &s[1..s.len() - 1])
}

/// Logical operators for combining conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

/// A parsed filter expression.
#[derive(Debug, Clone)]
pub enum FilterExpr {
    Condition(Condition),
    Not(Box<FilterExpr>),
    Compound {
        left: Box<FilterExpr>,
        op: LogicalOp,
        right: Box<FilterExpr>,
    },
}

impl FilterExpr {
    /// Evaluate this expression against an item.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        match self {
            Self::Condition(cond) => evaluate_condition(item, cond),
            Self::Not(expr) => !expr.matches(item),
            Self::Compound { left, op, right } => match op {
                LogicalOp::And => left.matches(item) && right.matches(item),
                LogicalOp::Or => left.matches(item) || right.matches(item),
            },
        }
    }
}

fn evaluate_condition<T: Filterable>(item: &T, condition: &Condition) -> bool {
    let Some(field_value) = item.field_value(&condition.field) else {
        return matches!(condition.operator, Operator::IsNull);
    };

    match condition.operator {
        Operator::Equal => match_equal(&field_value, &condition.value),
        Operator::NotEqual => !match_equal(&field_value, &condition.value),
        Operator::LessThan => match_compare(&field_value, &condition.value, std::cmp::Ordering::is_lt),
        Operator::LessThanOrEqual => {
            match_compare(&field_value, &condition.value, std::cmp::Ordering::is_le)
        },
        Operator::GreaterThan => {
            match_compare(&field_value, &condition.value, std::cmp::Ordering::is_gt)
        },
        Operator::GreaterThanOrEqual => {
            match_compare(&field_value, &condition.value, std::cmp::Ordering::is_ge)
        },
        Operator::Like => match_like(&field_value, &condition.value),
        Operator::Contains => match_contains(&field_value, &condition.value),
        Operator::IsNull => field_value.is_null(),
        Operator::IsNotNull => !field_value.is_null(),
        Operator::In => match_in(&field_value, &condition.value),
    }
}

/// Equality that ignores case and word separators, so `in_progress`,
/// `InProgress` and `In Progress` all compare equal.
fn loose_eq(a: &str, b: &str) -> bool {
    let norm = |s: &str| -> String {
        s.chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect()
    };
    norm(a) == norm(b)
}

fn match_equal(field_value: &FieldValue, filter_value: &FilterValue) -> bool {
    match (field_value, filter_value) {
        (FieldValue::String(s), FilterValue::String(v)) => loose_eq(s, v),
        (FieldValue::String(s), FilterValue::Integer(v)) => s == &v.to_string(),
        (FieldValue::OptionalDate(Some(d)), FilterValue::Date(v)) => d == v,
        (FieldValue::Integer(i), FilterValue::Integer(v)) => i == v,
        _ => false,
    }
}

fn match_compare<F>(field_value: &FieldValue, filter_value: &FilterValue, accept: F) -> bool
where
    F: Fn(std::cmp::Ordering) -> bool,
{
    match (field_value, filter_value) {
        (FieldValue::OptionalDate(Some(d)), FilterValue::Date(v)) => accept(d.cmp(v)),
        (FieldValue::Integer(i), FilterValue::Integer(v)) => accept(i.cmp(v)),
        _ => false,
    }
}

fn match_like(field_value: &FieldValue, filter_value: &FilterValue) -> bool {
    let FilterValue::String(pattern) = filter_value else {
        return false;
    };

    let FieldValue::String(text) = field_value else {
        return false;
    };

    let escaped = regex::escape(&pattern.to_lowercase());
    let regex_pattern = escaped.replace('%', ".*").replace('_', ".");

    Regex::new(&format!("^{regex_pattern}$"))
        .map(|re| re.is_match(&text.to_lowercase()))
        .unwrap_or(false)
}

fn match_contains(field_value: &FieldValue, filter_value: &FilterValue) -> bool {
    let FilterValue::String(needle) = filter_value else {
        return false;
    };

    field_value.contains_str(needle)
}

fn match_in(field_value: &FieldValue, filter_value: &FilterValue) -> bool {
    let FilterValue::StringList(list) = filter_value else {
        return false;
    };

    match field_value {
        FieldValue::String(s) => list.iter().any(|v| loose_eq(s, v)),
        FieldValue::Integer(i) => list.iter().any(|v| v.parse::<i64>().is_ok_and(|n| n == *i)),
        FieldValue::OptionalDate(_) => false,
    }
}

/// Parse a filter query string into a filter expression.
///
/// # Errors
///
/// Returns `FlowError::Filter` if the query string is invalid.
///
/// # Examples
///
/// ```
/// use focusflow::core::filter::parse_filter;
///
/// let expr = parse_filter("status = todo").unwrap();
/// let expr = parse_filter("priority = High AND due < today").unwrap();
/// ```
pub fn parse_filter(query: &str) -> Result<FilterExpr, FlowError> {
    let query = query.trim();

    if query.is_empty() {
        return Err(FlowError::Filter("Empty filter query".to_string()));
    }

    if query.len() > 4 && query[..4].eq_ignore_ascii_case("NOT ") {
        let inner = parse_filter(&query[4..])?;
        return Ok(FilterExpr::Not(Box::new(inner)));
    }

    if query.starts_with('(') {
        let Some(end_idx) = find_matching_paren(query) else {
            return Err(FlowError::Filter("Unmatched parenthesis in filter".to_string()));
        };

        if end_idx == query.len() - 1 {
            return parse_filter(&query[1..end_idx]);
        }

        let inner = parse_filter(&query[1..end_idx])?;
        let rest = query[end_idx + 1..].trim();
        let rest_upper = rest.to_ascii_uppercase();

        let (op, right) = if rest_upper.starts_with("AND ") {
            (LogicalOp::And, &rest[4..])
        } else if rest_upper.starts_with("OR ") {
            (LogicalOp::Or, &rest[3..])
        } else {
            return Err(FlowError::Filter(format!("Unexpected text after ')': {rest}")));
        };

        return Ok(FilterExpr::Compound {
            left: Box::new(inner),
            op,
            right: Box::new(parse_filter(right)?),
        });
    }

    if let Some((left_str, op, right_str)) = split_by_logical_op(query) {
        return Ok(FilterExpr::Compound {
            left: Box::new(parse_filter(left_str)?),
            op,
            right: Box::new(parse_filter(right_str)?),
        });
    }

    parse_condition(query).map(FilterExpr::Condition)
}

/// Split on the first top-level OR, falling back to AND, so that AND binds
/// tighter.
fn split_by_logical_op(query: &str) -> Option<(&str, LogicalOp, &str)> {
    let upper = query.to_ascii_uppercase();

    for (keyword, op) in [(" OR ", LogicalOp::Or), (" AND ", LogicalOp::And)] {
        let mut depth = 0i32;
        let mut in_quote: Option<char> = None;

        for (i, c) in query.char_indices() {
            match (c, in_quote) {
                ('\'' | '"', None) => in_quote = Some(c),
                (q, Some(open)) if q == open => in_quote = None,
                ('(', None) => depth += 1,
                (')', None) => depth -= 1,
                _ => {},
            }

            if depth == 0 && in_quote.is_none() && upper[i..].starts_with(keyword) {
                return Some((&query[..i], op, &query[i + keyword.len()..]));
            }
        }
    }

    None
}

fn find_matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            },
            _ => {},
        }
    }
    None
}

/// Byte offset of `needle` in `haystack`, skipping anything inside quotes.
fn find_outside_quotes(haystack: &str, needle: &str) -> Option<usize> {
    let mut in_quote: Option<char> = None;

    for (i, c) in haystack.char_indices() {
        match (c, in_quote) {
            ('\'' | '"', None) => in_quote = Some(c),
            (q, Some(open)) if q == open => in_quote = None,
            (_, None) if haystack[i..].starts_with(needle) => return Some(i),
            _ => {},
        }
    }

    None
}

fn parse_condition(s: &str) -> Result<Condition, FlowError> {
    let s = s.trim();
    let s_upper = s.to_ascii_uppercase();

    for (suffix, op) in [(" IS NOT NULL", Operator::IsNotNull), (" IS NULL", Operator::IsNull)] {
        if let Some(idx) = find_outside_quotes(&s_upper, suffix) {
            return Ok(Condition {
                field: s[..idx].trim().to_lowercase(),
                operator: op,
                value: FilterValue::None,
            });
        }
    }

    // Longer symbols before their prefixes so ties resolve to "<=" over "<"
    let operators = [
        (" LIKE ", Operator::Like),
        (" CONTAINS ", Operator::Contains),
        (" IN ", Operator::In),
        ("!=", Operator::NotEqual),
        ("<>", Operator::NotEqual),
        ("<=", Operator::LessThanOrEqual),
        (">=", Operator::GreaterThanOrEqual),
        ("==", Operator::Equal),
        ("<", Operator::LessThan),
        (">", Operator::GreaterThan),
        ("=", Operator::Equal),
    ];

    let mut best: Option<(usize, &str, Operator)> = None;
    for (op_str, op) in operators {
        if let Some(idx) = find_outside_quotes(&s_upper, op_str) {
            if best.map_or(true, |(b, _, _)| idx < b) {
                best = Some((idx, op_str, op));
            }
        }
    }

    let Some((idx, op_str, operator)) = best else {
        return Err(FlowError::Filter(format!("Invalid filter condition: {s}")));
    };

    let field = s[..idx].trim().to_lowercase();
    if field.is_empty() {
        return Err(FlowError::Filter(format!("Missing field name in: {s}")));
    }

    Ok(Condition {
        field,
        operator,
        value: FilterValue::parse(&s[idx + op_str.len()..]),
    })
}

/// Apply a filter expression to a collection of items.
pub fn filter_items<'a, T: Filterable>(items: &'a [T], expr: &FilterExpr) -> Vec<&'a T> {
    items.iter().filter(|item| expr.matches(*item)).collect()
}
