//! Value classification
//!
//! Decides which operator family a single raw query value denotes. Rules are
//! tried in a fixed order and the first one that recognises the value wins:
//!
//! | Form                      | Condition                    |
//! |---------------------------|------------------------------|
//! | `true`, `t`, `false`, `f` | equality against a boolean   |
//! | `%x`, `x%`, `%x%`         | `LIKE`, wildcards verbatim   |
//! | `(a,)` / `(,b)`           | `> a` / `< b`                |
//! | `[a,]` / `[,b]`           | `>= a` / `<= b`              |
//! | `{a,b,c}`                 | `in`                         |
//! | `~{a,b}` / `~x`           | `not in` / `<>`              |
//! | `e@is null@e`             | `IS NULL`                    |
//! | `e@is not null@e`         | `IS NOT NULL`                |
//! | `m[x]m`                   | full-text match              |
//! | anything else             | equality (timestamp-coerced) |
//!
//! Boolean spellings are `t`, `T`, `true`, `True`, `TRUE` and their `false`
//! counterparts; mixed case such as `tRuE` is plain text. `1` and `0` are
//! never read as booleans. A value that matches a rule's
//! shape but not its content (e.g. `(1,2)`, `{}`) yields no condition.

use chrono::DateTime;

use super::types::{Condition, FilterValue};

pub const NULL_SENTINEL: &str = "e@is null@e";
pub const NOT_NULL_SENTINEL: &str = "e@is not null@e";

/// Timestamps unwrapped from `tNNNt` are rendered in this layout (UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FULL_TEXT_OPEN: &str = "m[";
const FULL_TEXT_CLOSE: &str = "]m";

/// Outcome of a single rule
enum Rule {
    /// Value does not have this rule's shape; try the next one
    Pass,
    /// Value has this rule's shape but is unusable; contributes nothing
    Drop,
    Emit(Condition),
}

type Matcher = fn(&str) -> Rule;

/// Rules in evaluation order. Plain equality is the fallback after these.
const MATCHERS: &[Matcher] = &[
    match_boolean,
    match_like,
    match_exclusive_range,
    match_inclusive_range,
    match_set,
    match_negation,
    match_null,
    match_full_text,
];

/// Classify one raw value into a condition.
///
/// Returns `None` for empty values and for values that look like a special
/// form but cannot be used (fail-open: the caller simply omits them).
pub fn classify(raw: &str) -> Option<Condition> {
    if raw.is_empty() {
        return None;
    }

    for matcher in MATCHERS {
        match matcher(raw) {
            Rule::Pass => continue,
            Rule::Drop => {
                tracing::debug!(value = raw, "Dropping unusable filter value");
                return None;
            }
            Rule::Emit(condition) => return Some(condition),
        }
    }

    Some(Condition::Equality(coerce(raw)))
}

/// Coerce a plain operand: `tNNNt` becomes a normalized UTC timestamp,
/// everything else stays a string.
pub fn coerce(raw: &str) -> FilterValue {
    match parse_timestamp_wrapper(raw) {
        Some(ts) => FilterValue::Text(ts),
        None => FilterValue::Text(raw.to_string()),
    }
}

fn parse_timestamp_wrapper(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix('t')?.strip_suffix('t')?;
    let secs: i64 = inner.parse().ok()?;
    let dt = DateTime::from_timestamp(secs, 0)?;
    Some(dt.format(TIMESTAMP_FORMAT).to_string())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "t" | "T" | "true" | "True" | "TRUE" => Some(true),
        "f" | "F" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Strip `open` and `close` from both ends, requiring both
fn unwrap<'a>(raw: &'a str, open: &str, close: &str) -> Option<&'a str> {
    if raw.len() < open.len() + close.len() {
        return None;
    }
    raw.strip_prefix(open)?.strip_suffix(close)
}

fn split_set(inner: &str) -> Option<Vec<String>> {
    if inner.is_empty() {
        return None;
    }
    Some(inner.split(',').map(str::to_string).collect())
}

fn match_boolean(raw: &str) -> Rule {
    match parse_bool(raw) {
        Some(b) => Rule::Emit(Condition::Equality(FilterValue::Bool(b))),
        None => Rule::Pass,
    }
}

fn match_like(raw: &str) -> Rule {
    if raw.starts_with('%') || raw.ends_with('%') {
        Rule::Emit(Condition::Like(raw.to_string()))
    } else {
        Rule::Pass
    }
}

/// One-sided range. Two-sided and empty ranges are dropped.
fn range(
    raw: &str,
    open: &str,
    close: &str,
    upper: fn(FilterValue) -> Condition,
    lower: fn(FilterValue) -> Condition,
) -> Rule {
    let Some(inner) = unwrap(raw, open, close) else {
        return Rule::Pass;
    };
    let Some((left, right)) = inner.split_once(',') else {
        return Rule::Drop;
    };

    match (left.is_empty(), right.is_empty()) {
        (true, false) => Rule::Emit(upper(coerce(right))),
        (false, true) => Rule::Emit(lower(coerce(left))),
        // TODO: two-sided ranges need product sign-off on bound semantics
        _ => Rule::Drop,
    }
}

fn match_exclusive_range(raw: &str) -> Rule {
    range(raw, "(", ")", Condition::LessThan, Condition::GreaterThan)
}

fn match_inclusive_range(raw: &str) -> Rule {
    range(raw, "[", "]", Condition::AtMost, Condition::AtLeast)
}

fn match_set(raw: &str) -> Rule {
    match unwrap(raw, "{", "}") {
        Some(inner) => {
            split_set(inner).map_or(Rule::Drop, |items| Rule::Emit(Condition::In(items)))
        }
        None => Rule::Pass,
    }
}

fn match_negation(raw: &str) -> Rule {
    let Some(rest) = raw.strip_prefix('~') else {
        return Rule::Pass;
    };
    if rest.is_empty() {
        return Rule::Drop;
    }
    match unwrap(rest, "{", "}") {
        Some(inner) => {
            split_set(inner).map_or(Rule::Drop, |items| Rule::Emit(Condition::NotIn(items)))
        }
        None => Rule::Emit(Condition::NotEqual(coerce(rest))),
    }
}

fn match_null(raw: &str) -> Rule {
    match raw {
        NULL_SENTINEL => Rule::Emit(Condition::IsNull),
        NOT_NULL_SENTINEL => Rule::Emit(Condition::IsNotNull),
        _ => Rule::Pass,
    }
}

fn match_full_text(raw: &str) -> Rule {
    match unwrap(raw, FULL_TEXT_OPEN, FULL_TEXT_CLOSE) {
        Some("") => Rule::Drop,
        Some(inner) => Rule::Emit(Condition::FullText(inner.to_string())),
        None => Rule::Pass,
    }
}
