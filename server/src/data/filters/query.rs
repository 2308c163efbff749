//! List query parameters
//!
//! Built once per list request from the raw query pairs. Pagination,
//! ordering and preload keys are consumed here; every other key is kept as
//! a raw filter for the predicate builder.

use std::collections::BTreeMap;

use serde::Serialize;

use super::builder::{ColumnRenderer, RawFilters, build_predicate_with};
use super::types::{CompiledPredicate, FilterValue};
use crate::utils::string::{capitalize, parse_string_array};

/// Items per page when `limit` is missing or non-positive
pub const DEFAULT_LIMIT: u32 = 20;
/// Upper bound for `limit`; larger values are clamped
pub const MAX_LIMIT: u32 = 100;
/// Offset when `offset` is missing or non-positive
pub const DEFAULT_OFFSET: u64 = 0;

pub const KEY_LIMIT: &str = "limit";
pub const KEY_OFFSET: &str = "offset";
pub const KEY_ORDER_BY: &str = "order_by";
pub const KEY_POPULATE: &str = "populate";

/// Reserved keys never treated as field filters
pub const RESERVED_KEYS: &[&str] = &[KEY_LIMIT, KEY_OFFSET, KEY_ORDER_BY, KEY_POPULATE];

/// Limit bounds applied while building [`QueryParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PageBounds {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

impl PageBounds {
    /// Resolve a raw `limit` value against these bounds
    pub fn resolve_limit(&self, raw: Option<&str>) -> u32 {
        match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(n) if n > 0 => n.min(self.max_limit as i64) as u32,
            _ => self.default_limit,
        }
    }

    /// Resolve a raw `offset` value; anything non-positive is the default
    pub fn resolve_offset(raw: Option<&str>) -> u64 {
        match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(n) if n > 0 => n as u64,
            _ => DEFAULT_OFFSET,
        }
    }
}

/// Sort direction of one order clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// One `{field} {asc|desc}` clause. The field is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: OrderDirection,
}

impl OrderBy {
    /// Parse an `order_by` value: a leading `-` means descending
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (field, direction) = match raw.strip_prefix('-') {
            Some(rest) => (rest.trim(), OrderDirection::Desc),
            None => (raw, OrderDirection::Asc),
        };
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            direction,
        })
    }

    pub fn to_clause(&self) -> String {
        format!("{} {}", self.field, self.direction.as_str())
    }
}

/// Everything a list executor needs from one request
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameters {
    pub limit: u32,
    pub offset: u64,
    pub order: Vec<OrderBy>,
    /// Opaque passthrough clauses set by service code, never by the wire
    pub group: Option<String>,
    pub having: Option<String>,
    pub joins: Option<String>,
    pub select: Option<String>,
    /// Association names, capitalized, without duplicates
    pub preload: Vec<String>,
    /// Canonical clause (with `?` placeholders) → values bound to it.
    /// ANDed with the compiled predicate by the executor.
    pub custom_query: BTreeMap<String, Vec<FilterValue>>,
    /// Field filters still pending compilation
    pub filters: RawFilters,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            order: Vec::new(),
            group: None,
            having: None,
            joins: None,
            select: None,
            preload: Vec::new(),
            custom_query: BTreeMap::new(),
            filters: RawFilters::new(),
        }
    }
}

impl QueryParameters {
    /// Build from raw query pairs in wire order (keys may repeat)
    pub fn from_pairs<I, K, V>(pairs: I, bounds: &PageBounds) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::default();
        let mut limit: Option<String> = None;
        let mut offset: Option<String> = None;

        for (key, value) in pairs {
            let key: String = key.into();
            let value: String = value.into();
            match key.as_str() {
                KEY_LIMIT => {
                    limit.get_or_insert(value);
                }
                KEY_OFFSET => {
                    offset.get_or_insert(value);
                }
                KEY_ORDER_BY => params.order.extend(OrderBy::parse(&value)),
                KEY_POPULATE => {
                    for name in parse_string_array(&value) {
                        params.add_preload(&name);
                    }
                }
                _ => params.filters.entry(key).or_default().push(value),
            }
        }

        params.limit = bounds.resolve_limit(limit.as_deref());
        params.offset = PageBounds::resolve_offset(offset.as_deref());

        tracing::trace!(
            limit = params.limit,
            offset = params.offset,
            order = ?params.order,
            preload = ?params.preload,
            filters = params.filters.len(),
            "Built query parameters"
        );
        params
    }

    /// Comma-joined order clause, `None` when no ordering was requested
    pub fn order_clause(&self) -> Option<String> {
        if self.order.is_empty() {
            return None;
        }
        Some(
            self.order
                .iter()
                .map(OrderBy::to_clause)
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    pub fn add_preload(&mut self, name: &str) {
        let name = capitalize(name.trim());
        if !name.is_empty() && !self.preload.contains(&name) {
            self.preload.push(name);
        }
    }

    /// Layer a canonical clause that the filter grammar cannot express.
    /// Re-adding the same clause replaces its values.
    pub fn add_custom(&mut self, clause: impl Into<String>, values: Vec<FilterValue>) {
        let clause = clause.into();
        tracing::trace!(clause = %clause, params = values.len(), "Adding custom clause");
        self.custom_query.insert(clause, values);
    }

    /// Remove a raw filter so service code can interpret it itself
    pub fn take_filter(&mut self, key: &str) -> Option<Vec<String>> {
        self.filters.remove(key)
    }

    /// Compile the pending field filters against an allow-list
    pub fn predicate(&self, allowed: &[&str], renderer: &dyn ColumnRenderer) -> CompiledPredicate {
        build_predicate_with(&self.filters, allowed, renderer)
    }
}
