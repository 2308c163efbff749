//! Repository traits for database backends
//!
//! The list endpoints talk to storage only through [`ListRepository`], so a
//! test double or another backend can stand in for SQLite.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::QueryParameters;
use crate::data::types::{RecordRow, Resource};

/// One page of a list query
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub rows: Vec<RecordRow>,
    /// Rows matching the filters, ignoring limit and offset
    pub total: u64,
}

/// Repository trait for filtered, paginated listing
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// List rows of a resource with filters, ordering, pagination and preloads
    async fn list(
        &self,
        resource: &Resource,
        params: &QueryParameters,
    ) -> Result<ListPage, DataError>;

    /// Cheap liveness probe
    async fn ping(&self) -> Result<(), DataError>;
}
