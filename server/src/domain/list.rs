//! List service
//!
//! Resolves a resource by name, builds its [`QueryParameters`] from the raw
//! query pairs, layers service-level clauses the filter grammar cannot
//! express, and hands the result to the repository.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use super::catalog;
use crate::data::error::DataError;
use crate::data::filters::{FilterValue, PageBounds, QueryParameters, TIMESTAMP_FORMAT};
use crate::data::traits::ListRepository;
use crate::data::types::{RecordRow, Resource};

/// Books published within the last N days
pub const KEY_PUBLISHED_WITHIN_DAYS: &str = "published_within_days";

/// Result of one list request, with the bounds that were actually applied
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult {
    pub rows: Vec<RecordRow>,
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
}

#[derive(Clone)]
pub struct ListService {
    repository: Arc<dyn ListRepository>,
    bounds: PageBounds,
}

impl ListService {
    pub fn new(repository: Arc<dyn ListRepository>, bounds: PageBounds) -> Self {
        Self { repository, bounds }
    }

    pub async fn list(
        &self,
        resource_name: &str,
        pairs: Vec<(String, String)>,
    ) -> Result<ListResult, DataError> {
        let resource = catalog::find(resource_name)
            .ok_or_else(|| DataError::UnknownResource(resource_name.to_string()))?;

        let mut params = QueryParameters::from_pairs(pairs, &self.bounds);
        apply_service_filters(resource, &mut params, Utc::now());

        let page = self.repository.list(resource, &params).await?;
        tracing::debug!(
            resource = resource.name,
            rows = page.rows.len(),
            total = page.total,
            "Listed resource"
        );

        Ok(ListResult {
            rows: page.rows,
            total: page.total,
            limit: params.limit,
            offset: params.offset,
        })
    }

    pub async fn ping(&self) -> Result<(), DataError> {
        self.repository.ping().await
    }
}

/// Translate service-level query keys into custom clauses.
///
/// Malformed values are dropped, like any other unusable filter.
pub fn apply_service_filters(
    resource: &Resource,
    params: &mut QueryParameters,
    now: DateTime<Utc>,
) {
    if resource.name != catalog::BOOKS.name {
        return;
    }
    let Some(values) = params.take_filter(KEY_PUBLISHED_WITHIN_DAYS) else {
        return;
    };

    match values.first().and_then(|v| v.trim().parse::<u32>().ok()) {
        Some(days) if days > 0 => {
            let cutoff = now - Duration::days(i64::from(days));
            params.add_custom(
                "`published_at` >= ?",
                vec![FilterValue::Text(cutoff.format(TIMESTAMP_FORMAT).to_string())],
            );
        }
        _ => tracing::debug!(values = ?values, "Ignoring invalid published_within_days"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::data::sqlite::SqliteService;
    use crate::data::sqlite::seed::seed_demo;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    async fn service() -> ListService {
        let db = Arc::new(SqliteService::in_memory().await.unwrap());
        seed_demo(db.pool()).await.unwrap();
        ListService::new(db, PageBounds::default())
    }

    #[test]
    fn test_published_within_days_becomes_custom_clause() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let mut params = QueryParameters::from_pairs(
            [("published_within_days", "30")],
            &PageBounds::default(),
        );
        apply_service_filters(&catalog::BOOKS, &mut params, now);

        assert!(params.filters.is_empty());
        assert_eq!(
            params.custom_query.get("`published_at` >= ?"),
            Some(&vec![FilterValue::text("2024-03-01 12:00:00")])
        );
    }

    #[test]
    fn test_published_within_days_ignored_when_invalid() {
        let now = Utc::now();
        for raw in ["0", "-3", "soon", ""] {
            let mut params = QueryParameters::from_pairs(
                [("published_within_days", raw)],
                &PageBounds::default(),
            );
            apply_service_filters(&catalog::BOOKS, &mut params, now);
            assert!(params.custom_query.is_empty(), "{raw}");
            assert!(params.filters.is_empty());
        }
    }

    #[test]
    fn test_other_resources_keep_the_key_as_filter() {
        let mut params =
            QueryParameters::from_pairs([("published_within_days", "7")], &PageBounds::default());
        apply_service_filters(&catalog::AUTHORS, &mut params, Utc::now());
        assert!(params.custom_query.is_empty());
        assert!(params.filters.contains_key("published_within_days"));
    }

    #[tokio::test]
    async fn test_list_reports_applied_bounds() {
        let svc = service().await;
        let result = svc
            .list("books", pairs(&[("limit", "500"), ("offset", "-1")]))
            .await
            .unwrap();
        assert_eq!(result.limit, 100);
        assert_eq!(result.offset, 0);
        assert_eq!(result.total, 6);
    }

    #[tokio::test]
    async fn test_list_unknown_resource() {
        let svc = service().await;
        let err = svc.list("users", Vec::new()).await.unwrap_err();
        assert!(matches!(err, DataError::UnknownResource(name) if name == "users"));
    }

    #[tokio::test]
    async fn test_list_with_published_window() {
        let svc = service().await;
        // Newest seeded book is from 2015
        let result = svc
            .list("books", pairs(&[("published_within_days", "365")]))
            .await
            .unwrap();
        assert_eq!(result.total, 0);

        let result = svc
            .list("books", pairs(&[("published_within_days", "36500")]))
            .await
            .unwrap();
        assert_eq!(result.total, 6);
    }
}
