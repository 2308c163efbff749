//! Filter type definitions
//!
//! Typed parameter values, the closed set of conditions a raw value can
//! classify into, and the compiled `(condition, values)` pair handed to the
//! query executor.

use serde::Serialize;

/// Positional parameter bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Text(String),
    /// Bound to a single `?` inside `in (?)` / `not in (?)`.
    /// The executor expands it to one placeholder per element.
    List(Vec<String>),
}

impl FilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Number of `?` placeholders this value occupies once expanded.
    /// An empty list renders as `NULL` and occupies none.
    pub fn placeholder_width(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            _ => 1,
        }
    }
}

/// Operator family a single raw value denotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Equality(FilterValue),
    Like(String),
    LessThan(FilterValue),
    GreaterThan(FilterValue),
    AtMost(FilterValue),
    AtLeast(FilterValue),
    In(Vec<String>),
    NotIn(Vec<String>),
    NotEqual(FilterValue),
    IsNull,
    IsNotNull,
    FullText(String),
}

impl Condition {
    /// Render against an already-quoted column.
    ///
    /// Returns the SQL fragment and the parameter bound to its placeholder,
    /// if any. Null tests carry no parameter.
    pub fn render(&self, column: &str) -> (String, Option<FilterValue>) {
        match self {
            Self::Equality(v) => (format!("{} = ?", column), Some(v.clone())),
            Self::Like(pattern) => (
                format!("{} LIKE ?", column),
                Some(FilterValue::Text(pattern.clone())),
            ),
            Self::LessThan(v) => (format!("{} < ?", column), Some(v.clone())),
            Self::GreaterThan(v) => (format!("{} > ?", column), Some(v.clone())),
            Self::AtMost(v) => (format!("{} <= ?", column), Some(v.clone())),
            Self::AtLeast(v) => (format!("{} >= ?", column), Some(v.clone())),
            Self::In(items) => (
                format!("{} in (?)", column),
                Some(FilterValue::List(items.clone())),
            ),
            Self::NotIn(items) => (
                format!("{} not in (?)", column),
                Some(FilterValue::List(items.clone())),
            ),
            Self::NotEqual(v) => (format!("{} <> ?", column), Some(v.clone())),
            Self::IsNull => (format!("{} IS NULL", column), None),
            Self::IsNotNull => (format!("{} IS NOT NULL", column), None),
            Self::FullText(text) => (
                format!("{} MATCH ?", column),
                Some(FilterValue::Text(text.clone())),
            ),
        }
    }
}

/// Parameterized predicate: condition with `?` placeholders plus the values
/// bound to them, in placeholder order.
///
/// An empty condition means "no filter", never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledPredicate {
    pub condition: String,
    pub values: Vec<FilterValue>,
}

impl CompiledPredicate {
    pub fn new(condition: impl Into<String>, values: Vec<FilterValue>) -> Self {
        Self {
            condition: condition.into(),
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.condition.is_empty()
    }

    /// Count `?` placeholders outside back-quoted identifiers
    pub fn placeholder_count(&self) -> usize {
        let mut quoted = false;
        self.condition
            .chars()
            .filter(|&c| {
                if c == '`' {
                    quoted = !quoted;
                }
                !quoted && c == '?'
            })
            .count()
    }
}
