//! List query executor
//!
//! Turns a [`Resource`] and the [`QueryParameters`] of one request into a
//! SELECT, runs it with its count, and attaches requested associations.
//!
//! The compiled predicate binds each set to a single `?` (`in (?)`); it is
//! expanded to one placeholder per element here, right before binding.
//!
//! Columns are checked against the resource before rendering: names the
//! table does not have are dropped, and full-text conditions run against
//! the resource's FTS5 index or are dropped when it has none.

use std::collections::HashMap;

use serde_json::Value;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Column, Row, Sqlite, SqlitePool, TypeInfo, ValueRef};

use super::error::SqliteError;
use crate::data::filters::{
    ColumnRenderer, CompiledPredicate, Condition, FilterValue, QueryParameters,
};
use crate::data::types::{Association, AssociationKind, RecordRow, Resource};
use crate::utils::sql::{placeholders, quote_identifier};

/// Scalar bound to exactly one `?`
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
}

impl From<&Value> for BindValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Real(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Rendered SELECT with its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct SelectPlan {
    /// Page query; `LIMIT ? OFFSET ?` are the last two placeholders
    pub sql: String,
    /// Total count over the same FROM/WHERE/GROUP BY/HAVING
    pub count_sql: String,
    /// Arguments for the WHERE placeholders (shared by both queries)
    pub args: Vec<BindValue>,
    pub limit: i64,
    pub offset: i64,
}

/// FTS5 query matching every whitespace-separated term of `text`.
///
/// Each term is a quoted string so FTS5 operators in user input stay
/// literal. `None` when there are no terms.
pub fn full_text_query(text: &str) -> Option<String> {
    let terms: Vec<String> = text
        .split_whitespace()
        .map(|term| format!("\"{}\"", term.replace('"', "\"\"")))
        .collect();
    (!terms.is_empty()).then(|| terms.join(" "))
}

/// Renders conditions only for columns the resource actually has
struct ResourceColumns<'a>(&'a Resource);

impl ColumnRenderer for ResourceColumns<'_> {
    fn render(&self, column: &str, condition: &Condition) -> Option<(String, Option<FilterValue>)> {
        let resource = self.0;
        if !resource.has_column(column) {
            tracing::debug!(resource = resource.name, column, "Dropping filter on unknown column");
            return None;
        }
        let Condition::FullText(text) = condition else {
            return Some(condition.render(&quote_identifier(column)));
        };
        let Some(index) = resource.full_text_table(column) else {
            tracing::debug!(resource = resource.name, column, "No full-text index, dropping match");
            return None;
        };
        let Some(query) = full_text_query(text) else {
            tracing::debug!(resource = resource.name, column, "Empty full-text match, dropping");
            return None;
        };
        let sql = format!(
            "{}.{} IN (SELECT rowid FROM {} WHERE {} MATCH ?)",
            quote_identifier(resource.table),
            quote_identifier(resource.primary_key),
            quote_identifier(index),
            quote_identifier(column)
        );
        Some((sql, Some(FilterValue::Text(query))))
    }
}

/// Combine the compiled field predicate with service-injected clauses.
///
/// Returns an empty predicate when there is nothing to filter on.
pub fn where_predicate(resource: &Resource, params: &QueryParameters) -> CompiledPredicate {
    let compiled = params.predicate(resource.filterable, &ResourceColumns(resource));

    let mut parts = Vec::new();
    let mut values = Vec::new();
    if !compiled.is_empty() {
        parts.push(compiled.condition);
        values.extend(compiled.values);
    }
    for (clause, clause_values) in &params.custom_query {
        parts.push(format!("({})", clause));
        values.extend(clause_values.iter().cloned());
    }

    CompiledPredicate::new(parts.join(" AND "), values)
}

/// Expand list values to one placeholder per element and flatten all
/// values into scalar arguments, in placeholder order.
///
/// An empty list renders as `NULL`, which neither `in` nor `not in` match.
pub fn expand_placeholders(predicate: &CompiledPredicate) -> (String, Vec<BindValue>) {
    let mut sql = String::with_capacity(predicate.condition.len());
    let width = predicate.values.iter().map(FilterValue::placeholder_width).sum();
    let mut args = Vec::with_capacity(width);
    let mut values = predicate.values.iter();
    let mut quoted = false;

    for c in predicate.condition.chars() {
        if c == '`' {
            quoted = !quoted;
        }
        if c != '?' || quoted {
            sql.push(c);
            continue;
        }
        match values.next() {
            Some(FilterValue::List(items)) if items.is_empty() => sql.push_str("NULL"),
            Some(FilterValue::List(items)) => {
                sql.push_str(&placeholders(items.len()));
                args.extend(items.iter().cloned().map(BindValue::Text));
            }
            Some(FilterValue::Bool(b)) => {
                sql.push('?');
                args.push(BindValue::Bool(*b));
            }
            Some(FilterValue::Text(s)) => {
                sql.push('?');
                args.push(BindValue::Text(s.clone()));
            }
            None => {
                tracing::warn!(condition = %predicate.condition, "More placeholders than values, binding NULL");
                sql.push('?');
                args.push(BindValue::Null);
            }
        }
    }

    if values.next().is_some() {
        tracing::warn!(condition = %predicate.condition, "More values than placeholders");
    }
    (sql, args)
}

/// ORDER BY clause restricted to the resource's sortable fields.
///
/// Falls back to the primary key so pages are stable.
fn order_clause(resource: &Resource, params: &QueryParameters) -> String {
    let clauses: Vec<String> = params
        .order
        .iter()
        .filter(|o| {
            let sortable = resource.is_sortable(&o.field);
            if !sortable {
                tracing::warn!(resource = resource.name, field = %o.field, "Ignoring order on non-sortable field");
            }
            sortable
        })
        .map(|o| {
            format!(
                "{} {}",
                quote_identifier(&o.field),
                o.direction.as_str().to_uppercase()
            )
        })
        .collect();

    if clauses.is_empty() {
        format!("{} ASC", quote_identifier(resource.primary_key))
    } else {
        clauses.join(", ")
    }
}

/// Render the page and count queries for one request
pub fn plan_select(resource: &Resource, params: &QueryParameters) -> SelectPlan {
    let table = quote_identifier(resource.table);
    let (condition, args) = expand_placeholders(&where_predicate(resource, params));

    let mut from = format!("FROM {}", table);
    if let Some(joins) = params.joins.as_deref().filter(|s| !s.is_empty()) {
        from.push(' ');
        from.push_str(joins);
    }
    if !condition.is_empty() {
        from.push_str(" WHERE ");
        from.push_str(&condition);
    }
    if let Some(group) = params.group.as_deref().filter(|s| !s.is_empty()) {
        from.push_str(" GROUP BY ");
        from.push_str(group);
    }
    if let Some(having) = params.having.as_deref().filter(|s| !s.is_empty()) {
        from.push_str(" HAVING ");
        from.push_str(having);
    }

    let select = params
        .select
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("{}.*", table));

    SelectPlan {
        sql: format!(
            "SELECT {} {} ORDER BY {} LIMIT ? OFFSET ?",
            select,
            from,
            order_clause(resource, params)
        ),
        count_sql: format!("SELECT COUNT(*) FROM (SELECT 1 {})", from),
        args,
        limit: i64::from(params.limit),
        offset: i64::try_from(params.offset).unwrap_or(i64::MAX),
    }
}

fn bind_args<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    args: &[BindValue],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for arg in args {
        query = match arg {
            BindValue::Null => query.bind(None::<String>),
            BindValue::Bool(b) => query.bind(*b),
            BindValue::Int(i) => query.bind(*i),
            BindValue::Real(f) => query.bind(*f),
            BindValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}

/// Decode a row by SQLite storage class. Blobs become hex strings.
fn decode_row(row: &SqliteRow) -> Result<RecordRow, sqlx::Error> {
    let mut record = RecordRow::new();
    for column in row.columns() {
        let idx = column.ordinal();
        let raw = row.try_get_raw(idx)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" => Value::from(row.try_get::<i64, _>(idx)?),
                "REAL" => Value::from(row.try_get::<f64, _>(idx)?),
                "BLOB" => Value::String(hex::encode(row.try_get::<Vec<u8>, _>(idx)?)),
                _ => Value::String(row.try_get::<String, _>(idx)?),
            }
        };
        record.insert(column.name().to_string(), value);
    }
    Ok(record)
}

/// Grouping key for association matching
fn key_of(value: &Value) -> String {
    value.to_string()
}

/// Load one association for every parent row and attach it under the
/// association's name
async fn attach_association(
    pool: &SqlitePool,
    association: &Association,
    records: &mut [RecordRow],
) -> Result<(), SqliteError> {
    let mut seen = HashMap::new();
    for record in records.iter() {
        if let Some(value) = record.get(association.local_key).filter(|v| !v.is_null()) {
            seen.entry(key_of(value))
                .or_insert_with(|| BindValue::from(value));
        }
    }
    let keys: Vec<BindValue> = seen.into_values().collect();

    let mut related: HashMap<String, Vec<Value>> = HashMap::new();
    if !keys.is_empty() {
        // ORDER BY 1: related rows come back in first-column (key) order
        let sql = format!(
            "SELECT * FROM {} WHERE {} IN ({}) ORDER BY 1",
            quote_identifier(association.table),
            quote_identifier(association.remote_key),
            placeholders(keys.len())
        );
        let rows = bind_args(sqlx::query(&sql), &keys)
            .fetch_all(pool)
            .await?;
        for row in &rows {
            let record = decode_row(row)?;
            let key = record
                .get(association.remote_key)
                .map(key_of)
                .unwrap_or_default();
            related.entry(key).or_default().push(Value::Object(record));
        }
    }

    for record in records.iter_mut() {
        let matches = record
            .get(association.local_key)
            .and_then(|v| related.get(&key_of(v)));
        let attached = match association.kind {
            AssociationKind::HasMany => Value::Array(matches.cloned().unwrap_or_default()),
            AssociationKind::BelongsTo => matches
                .and_then(|rows| rows.first().cloned())
                .unwrap_or(Value::Null),
        };
        record.insert(association.name.to_string(), attached);
    }

    Ok(())
}

/// Execute a list request: one page of rows plus the total match count
pub async fn list_rows(
    pool: &SqlitePool,
    resource: &Resource,
    params: &QueryParameters,
) -> Result<(Vec<RecordRow>, u64), SqliteError> {
    let plan = plan_select(resource, params);
    tracing::debug!(
        resource = resource.name,
        sql = %plan.sql,
        args = plan.args.len(),
        "Executing list query"
    );

    let rows = bind_args(sqlx::query(&plan.sql), &plan.args)
        .bind(plan.limit)
        .bind(plan.offset)
        .fetch_all(pool)
        .await?;
    let total: i64 = bind_args(sqlx::query(&plan.count_sql), &plan.args)
        .fetch_one(pool)
        .await?
        .try_get(0)?;

    let mut records = rows
        .iter()
        .map(decode_row)
        .collect::<Result<Vec<_>, _>>()?;

    for name in &params.preload {
        match resource.association(name) {
            Some(association) => attach_association(pool, association, &mut records).await?,
            None => {
                tracing::debug!(resource = resource.name, preload = %name, "Unknown association, skipping")
            }
        }
    }

    Ok((records, total.max(0) as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::PageBounds;
    use crate::data::sqlite::SqliteService;
    use crate::data::sqlite::seed::seed_demo;
    use crate::domain::catalog::{AUTHORS, BOOKS, REVIEWS};

    fn params(pairs: &[(&str, &str)]) -> QueryParameters {
        QueryParameters::from_pairs(pairs.iter().copied(), &PageBounds::default())
    }

    async fn seeded() -> SqliteService {
        let service = SqliteService::in_memory().await.unwrap();
        seed_demo(service.pool()).await.unwrap();
        service
    }

    fn ids(rows: &[RecordRow]) -> Vec<i64> {
        rows.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn test_expand_lists_into_placeholders() {
        let predicate = CompiledPredicate::new(
            "`genre` in (?) AND `title` = ?",
            vec![
                FilterValue::List(vec!["a".into(), "b".into(), "c".into()]),
                FilterValue::text("x"),
            ],
        );
        let (sql, args) = expand_placeholders(&predicate);
        assert_eq!(sql, "`genre` in (?, ?, ?) AND `title` = ?");
        assert_eq!(
            args,
            vec![
                BindValue::Text("a".into()),
                BindValue::Text("b".into()),
                BindValue::Text("c".into()),
                BindValue::Text("x".into()),
            ]
        );
    }

    #[test]
    fn test_expand_empty_list_to_null() {
        let predicate =
            CompiledPredicate::new("`genre` not in (?)", vec![FilterValue::List(vec![])]);
        let (sql, args) = expand_placeholders(&predicate);
        assert_eq!(sql, "`genre` not in (NULL)");
        assert!(args.is_empty());
    }

    #[test]
    fn test_expand_skips_question_marks_in_identifiers() {
        let predicate = CompiledPredicate::new("`why?` = ?", vec![FilterValue::Bool(true)]);
        let (sql, args) = expand_placeholders(&predicate);
        assert_eq!(sql, "`why?` = ?");
        assert_eq!(args, vec![BindValue::Bool(true)]);
    }

    #[test]
    fn test_plan_without_filters_has_no_where() {
        let plan = plan_select(&BOOKS, &params(&[]));
        assert_eq!(
            plan.sql,
            "SELECT `books`.* FROM `books` ORDER BY `id` ASC LIMIT ? OFFSET ?"
        );
        assert_eq!(plan.count_sql, "SELECT COUNT(*) FROM (SELECT 1 FROM `books`)");
        assert!(plan.args.is_empty());
        assert_eq!((plan.limit, plan.offset), (20, 0));
    }

    #[test]
    fn test_plan_combines_predicate_and_custom_clauses() {
        let mut p = params(&[("genre", "{fantasy,crime}"), ("order_by", "-price")]);
        p.add_custom(
            "`published_at` >= ?",
            vec![FilterValue::text("1990-01-01 00:00:00")],
        );
        let plan = plan_select(&BOOKS, &p);
        assert_eq!(
            plan.sql,
            "SELECT `books`.* FROM `books` WHERE `genre` in (?, ?) AND (`published_at` >= ?) \
             ORDER BY `price` DESC LIMIT ? OFFSET ?"
        );
        assert_eq!(plan.args.len(), 3);
    }

    #[test]
    fn test_plan_drops_unsortable_order() {
        let plan = plan_select(&BOOKS, &params(&[("order_by", "isbn; DROP TABLE books")]));
        assert!(plan.sql.ends_with("ORDER BY `id` ASC LIMIT ? OFFSET ?"));
    }

    #[test]
    fn test_plan_uses_passthrough_clauses() {
        let mut p = params(&[]);
        p.select = Some("`genre`, COUNT(*) AS `count`".into());
        p.group = Some("`genre`".into());
        p.having = Some("COUNT(*) > 1".into());
        let plan = plan_select(&BOOKS, &p);
        assert_eq!(
            plan.sql,
            "SELECT `genre`, COUNT(*) AS `count` FROM `books` GROUP BY `genre` HAVING COUNT(*) > 1 \
             ORDER BY `id` ASC LIMIT ? OFFSET ?"
        );
        assert_eq!(
            plan.count_sql,
            "SELECT COUNT(*) FROM (SELECT 1 FROM `books` GROUP BY `genre` HAVING COUNT(*) > 1)"
        );
    }

    #[tokio::test]
    async fn test_list_all_with_total() {
        let db = seeded().await;
        let (rows, total) = list_rows(db.pool(), &BOOKS, &params(&[("limit", "2")]))
            .await
            .unwrap();
        assert_eq!(total, 6);
        assert_eq!(ids(&rows), vec![1, 2]);
        assert_eq!(rows[0]["title"], "A Wizard of Earthsea");
    }

    #[tokio::test]
    async fn test_list_with_offset_and_order() {
        let db = seeded().await;
        let p = params(&[("order_by", "-price"), ("offset", "1"), ("limit", "2")]);
        let (rows, total) = list_rows(db.pool(), &BOOKS, &p).await.unwrap();
        assert_eq!(total, 6);
        // Prices: 15.99 (5), 12.50 (2), 11.25 (6), ...
        assert_eq!(ids(&rows), vec![2, 6]);
    }

    #[tokio::test]
    async fn test_list_filters_by_grammar() {
        let db = seeded().await;

        let (rows, total) = list_rows(db.pool(), &BOOKS, &params(&[("genre", "fantasy")]))
            .await
            .unwrap();
        assert_eq!(total, 4);
        assert_eq!(ids(&rows), vec![1, 3, 4, 5]);

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("price", "[10,]")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![2, 4, 5, 6]);

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("isbn", "e@is null@e")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![2, 4]);

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("genre", "~{fantasy}")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![2, 6]);

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("title", "%Gods%")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![4]);
    }

    #[tokio::test]
    async fn test_list_filters_booleans_and_timestamps() {
        let db = seeded().await;

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("in_stock", "false")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![2, 6]);

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("in_stock", "f")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![2, 6]);

        // 2000-01-01 00:00:00 UTC
        let (rows, _) = list_rows(
            db.pool(),
            &BOOKS,
            &params(&[("published_at", "(t946684800t,)")]),
        )
        .await
        .unwrap();
        assert_eq!(ids(&rows), vec![5, 6]);
    }

    #[tokio::test]
    async fn test_list_or_expression() {
        let db = seeded().await;
        let (rows, _) = list_rows(db.pool(), &AUTHORS, &params(&[("name||bio", "%Earthsea%")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![1]);
    }

    #[tokio::test]
    async fn test_list_ignores_fields_outside_allow_list() {
        let db = seeded().await;
        let (rows, total) = list_rows(db.pool(), &BOOKS, &params(&[("secret_column", "x")]))
            .await
            .unwrap();
        assert_eq!(total, 6);
        assert_eq!(rows.len(), 6);
    }

    #[tokio::test]
    async fn test_preload_has_many_and_belongs_to() {
        let db = seeded().await;
        let p = params(&[("id", "{1,3}"), ("populate", "[author,reviews]")]);
        let (rows, _) = list_rows(db.pool(), &BOOKS, &p).await.unwrap();

        assert_eq!(ids(&rows), vec![1, 3]);
        assert_eq!(rows[0]["Author"]["name"], "Ursula K. Le Guin");
        assert_eq!(rows[1]["Author"]["name"], "Terry Pratchett");
        assert_eq!(rows[0]["Reviews"].as_array().unwrap().len(), 2);
        assert_eq!(rows[1]["Reviews"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_preload_with_no_matches_attaches_empty() {
        let db = seeded().await;
        let p = params(&[("id", "4"), ("populate", "[reviews]")]);
        let (rows, _) = list_rows(db.pool(), &BOOKS, &p).await.unwrap();
        assert_eq!(rows[0]["Reviews"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_unknown_preload_is_skipped() {
        let db = seeded().await;
        let p = params(&[("id", "1"), ("populate", "[publisher]")]);
        let (rows, _) = list_rows(db.pool(), &BOOKS, &p).await.unwrap();
        assert!(!rows[0].contains_key("Publisher"));
    }

    #[tokio::test]
    async fn test_reviews_belong_to_books() {
        let db = seeded().await;
        let p = params(&[("rating", "5"), ("populate", "[book]")]);
        let (rows, total) = list_rows(db.pool(), &REVIEWS, &p).await.unwrap();
        assert_eq!(total, 2);
        assert_eq!(rows[0]["Book"]["title"], "A Wizard of Earthsea");
        assert_eq!(rows[1]["Book"]["title"], "Guards! Guards!");
    }

    #[test]
    fn test_full_text_query_quotes_terms() {
        assert_eq!(
            full_text_query("dragon  \"slayer\" OR").as_deref(),
            Some("\"dragon\" \"\"\"slayer\"\"\" \"OR\"")
        );
        assert_eq!(full_text_query("   "), None);
    }

    #[test]
    fn test_plan_renders_full_text_against_index() {
        let plan = plan_select(&BOOKS, &params(&[("title", "m[wizard]m")]));
        assert_eq!(
            plan.sql,
            "SELECT `books`.* FROM `books` WHERE `books`.`id` IN \
             (SELECT rowid FROM `books_fts` WHERE `title` MATCH ?) \
             ORDER BY `id` ASC LIMIT ? OFFSET ?"
        );
        assert_eq!(plan.args, vec![BindValue::Text("\"wizard\"".into())]);
    }

    #[test]
    fn test_plan_drops_unknown_and_unindexed_columns() {
        let plan = plan_select(&BOOKS, &params(&[("nope||title", "x"), ("genre", "m[x]m")]));
        assert_eq!(
            plan.sql,
            "SELECT `books`.* FROM `books` WHERE `title` = ? ORDER BY `id` ASC LIMIT ? OFFSET ?"
        );
        assert_eq!(plan.args, vec![BindValue::Text("x".into())]);
    }

    #[tokio::test]
    async fn test_list_full_text_on_indexed_column() {
        let db = seeded().await;

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("title", "m[guards]m")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![3]);

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("title", "m[darkness left]m")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![2]);

        let (rows, total) = list_rows(db.pool(), &BOOKS, &params(&[("title", "m[\"AND]m")]))
            .await
            .unwrap();
        assert_eq!(total, 0);
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_list_full_text_without_index_is_ignored() {
        let db = seeded().await;
        let (_, total) = list_rows(db.pool(), &AUTHORS, &params(&[("bio", "m[earthsea]m")]))
            .await
            .unwrap();
        assert_eq!(total, 4);

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("title||genre", "m[gods]m")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![4]);
    }

    #[tokio::test]
    async fn test_list_or_expression_skips_unknown_columns() {
        let db = seeded().await;

        let (rows, _) = list_rows(db.pool(), &BOOKS, &params(&[("nope||title", "Small Gods")]))
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![4]);

        let (_, total) = list_rows(db.pool(), &BOOKS, &params(&[("nope||other", "x")]))
            .await
            .unwrap();
        assert_eq!(total, 6);
    }
}
