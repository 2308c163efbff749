//! ListRepository trait implementation for SQLite

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::QueryParameters;
use crate::data::traits::{ListPage, ListRepository};
use crate::data::types::Resource;

use super::SqliteService;
use super::executor;

#[async_trait]
impl ListRepository for SqliteService {
    async fn list(
        &self,
        resource: &Resource,
        params: &QueryParameters,
    ) -> Result<ListPage, DataError> {
        let (rows, total) = executor::list_rows(self.pool(), resource, params).await?;
        Ok(ListPage { rows, total })
    }

    async fn ping(&self) -> Result<(), DataError> {
        sqlx::query("SELECT 1")
            .execute(self.pool())
            .await
            .map_err(DataError::Sqlite)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::filters::PageBounds;
    use crate::data::sqlite::seed::seed_demo;
    use crate::domain::catalog::AUTHORS;

    #[tokio::test]
    async fn test_list_through_trait_object() {
        let service = Arc::new(SqliteService::in_memory().await.unwrap());
        seed_demo(service.pool()).await.unwrap();

        let repo: Arc<dyn ListRepository> = service.clone();
        repo.ping().await.unwrap();

        let params = QueryParameters::from_pairs([("country", "US")], &PageBounds::default());
        let page = repo.list(&AUTHORS, &params).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.rows.len(), 2);
    }

    #[tokio::test]
    async fn test_ping_fails_after_close() {
        let service = SqliteService::in_memory().await.unwrap();
        service.close().await;

        let err = service.ping().await.unwrap_err();
        assert!(err.is_transient());
    }
}
