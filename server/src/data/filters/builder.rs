//! Predicate builder
//!
//! Compiles raw `field → values` filters into one parameterized predicate.
//! Values supplied for one field are ANDed; alternative columns named in an
//! OR-expression (`a||b`) are ORed; fields are ANDed at the top level.
//!
//! Column rendering goes through a [`ColumnRenderer`], which lets the
//! executor veto columns the table does not have or rewrite conditions
//! that need table-specific SQL.

use std::collections::BTreeMap;

use super::parser::classify;
use super::types::{CompiledPredicate, Condition, FilterValue};
use crate::utils::sql::quote_identifier;

/// Separator for alternative column names in a filter key
pub const OR_SEPARATOR: &str = "||";

/// Field-name expression → raw values in supply order.
///
/// Ordered by key so compiled output is reproducible.
pub type RawFilters = BTreeMap<String, Vec<String>>;

/// Renders one condition against one named column
pub trait ColumnRenderer {
    /// Fragment and bound parameter for `condition` on the unquoted
    /// `column`; `None` drops the condition for that column.
    fn render(&self, column: &str, condition: &Condition) -> Option<(String, Option<FilterValue>)>;
}

/// Renders every condition against the backtick-quoted column name
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedColumns;

impl ColumnRenderer for QuotedColumns {
    fn render(&self, column: &str, condition: &Condition) -> Option<(String, Option<FilterValue>)> {
        Some(condition.render(&quote_identifier(column)))
    }
}

/// Compile one field expression and its raw values into a fragment.
///
/// Returns `None` when nothing usable was produced (unknown shapes, empty
/// values); the field then contributes no condition.
pub fn compile_field(expr: &str, raw_values: &[String]) -> Option<CompiledPredicate> {
    compile_field_with(expr, raw_values, &QuotedColumns)
}

/// [`compile_field`] with a custom renderer.
///
/// A column whose every condition is dropped by `renderer` is left out of
/// the OR group.
pub fn compile_field_with(
    expr: &str,
    raw_values: &[String],
    renderer: &dyn ColumnRenderer,
) -> Option<CompiledPredicate> {
    let conditions: Vec<Condition> = raw_values
        .iter()
        .filter(|v| !v.is_empty())
        .filter_map(|v| classify(v))
        .collect();
    if conditions.is_empty() {
        return None;
    }
    let grouped = raw_values.len() > 1;

    let mut alternatives = Vec::new();
    let mut values = Vec::new();
    for column in expr
        .split(OR_SEPARATOR)
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        let mut parts = Vec::with_capacity(conditions.len());
        for condition in &conditions {
            if let Some((sql, value)) = renderer.render(column, condition) {
                parts.push(sql);
                values.extend(value);
            }
        }
        if parts.is_empty() {
            continue;
        }
        alternatives.push(if grouped {
            format!("({})", parts.join(" AND "))
        } else {
            parts.join(" AND ")
        });
    }

    let condition = match alternatives.len() {
        0 => return None,
        1 => alternatives.remove(0),
        _ => format!("({})", alternatives.join(" OR ")),
    };
    Some(CompiledPredicate::new(condition, values))
}

/// Build the AND-joined predicate for every permitted field.
///
/// Keys containing [`OR_SEPARATOR`] are always compiled since they name
/// their columns explicitly; other keys must appear in `allowed`.
pub fn build_predicate(filters: &RawFilters, allowed: &[&str]) -> CompiledPredicate {
    build_predicate_with(filters, allowed, &QuotedColumns)
}

/// [`build_predicate`] with a custom renderer
pub fn build_predicate_with(
    filters: &RawFilters,
    allowed: &[&str],
    renderer: &dyn ColumnRenderer,
) -> CompiledPredicate {
    let mut fragments = Vec::new();
    let mut values = Vec::new();

    for (key, raw_values) in filters {
        if !key.contains(OR_SEPARATOR) && !allowed.contains(&key.as_str()) {
            tracing::trace!(field = %key, "Skipping field outside allow-list");
            continue;
        }
        if let Some(fragment) = compile_field_with(key, raw_values, renderer) {
            fragments.push(fragment.condition);
            values.extend(fragment.values);
        }
    }

    let predicate = CompiledPredicate::new(fragments.join(" AND "), values);
    tracing::trace!(
        condition = %predicate.condition,
        params = predicate.values.len(),
        "Compiled filter predicate"
    );
    predicate
}
