//! Data storage layer
//!
//! - `filters` - Query-string filter grammar and list parameters
//! - `sqlite` - Embedded relational store and the list executor
//! - `types` - Resource descriptors and row types
//! - `traits` - Repository traits the API layer depends on
//! - `error` - Error type for all storage operations

pub mod error;
pub mod filters;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::DataError;
pub use sqlite::SqliteService;
pub use traits::{ListPage, ListRepository};
pub use types::{Association, AssociationKind, FullTextIndex, RecordRow, Resource};
