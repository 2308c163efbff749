//! Resource descriptors
//!
//! A resource is one listable table: what may be filtered, what may be
//! sorted, and which associations may be preloaded alongside it.

use serde::Serialize;

/// Cardinality of an association as seen from the parent row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    /// Parent column `local_key` references the related row's `remote_key`;
    /// attached as a single object (or null)
    BelongsTo,
    /// Related rows whose `remote_key` equals the parent's `local_key`;
    /// attached as an array
    HasMany,
}

/// Preloadable association, addressed by its capitalized name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Association {
    pub name: &'static str,
    pub table: &'static str,
    pub kind: AssociationKind,
    pub local_key: &'static str,
    pub remote_key: &'static str,
}

/// FTS5 index shadowing some text columns of a resource.
///
/// `table` is an external-content FTS5 table whose rowid is the resource's
/// primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FullTextIndex {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

/// A listable table and the fields callers may use on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
    /// Every physical column of the table
    pub columns: &'static [&'static str],
    /// Allow-list handed to the predicate builder
    pub filterable: &'static [&'static str],
    pub sortable: &'static [&'static str],
    pub full_text: Option<FullTextIndex>,
    pub associations: &'static [Association],
}

impl Resource {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }

    /// FTS5 table searchable on `column`, if one is indexed
    pub fn full_text_table(&self, column: &str) -> Option<&'static str> {
        self.full_text
            .filter(|index| index.columns.contains(&column))
            .map(|index| index.table)
    }

    pub fn association(&self, name: &str) -> Option<&'static Association> {
        self.associations.iter().find(|a| a.name == name)
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.sortable.contains(&field)
    }
}

/// One result row decoded column-by-column
pub type RecordRow = serde_json::Map<String, serde_json::Value>;
