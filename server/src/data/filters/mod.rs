//! Query filter system
//!
//! Translates flat query-string filters written in a compact grammar into a
//! parameterized predicate, and collects the pagination, ordering and
//! preload directives that travel with it.
//!
//! ## Usage
//!
//! ```
//! use sieve_server::data::filters::{PageBounds, QueryParameters, QuotedColumns};
//!
//! let pairs = [("limit", "500"), ("genre", "{fantasy,horror}"), ("order_by", "-price")];
//! let params = QueryParameters::from_pairs(pairs, &PageBounds::default());
//! let predicate = params.predicate(&["genre"], &QuotedColumns);
//!
//! assert_eq!(params.limit, 100);
//! assert_eq!(predicate.condition, "`genre` in (?)");
//! assert_eq!(params.order_clause().as_deref(), Some("price desc"));
//! ```

mod builder;
mod parser;
mod query;
mod types;

pub use builder::{
    ColumnRenderer, OR_SEPARATOR, QuotedColumns, RawFilters, build_predicate, build_predicate_with,
    compile_field, compile_field_with,
};
pub use parser::{NOT_NULL_SENTINEL, NULL_SENTINEL, TIMESTAMP_FORMAT, classify, coerce};
pub use query::{
    DEFAULT_LIMIT, DEFAULT_OFFSET, MAX_LIMIT, OrderBy, OrderDirection, PageBounds,
    QueryParameters, RESERVED_KEYS,
};
pub use types::{CompiledPredicate, Condition, FilterValue};
