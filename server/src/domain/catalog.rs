//! Built-in resource catalog
//!
//! The tables exposed by the list endpoints, with the columns callers may
//! filter and sort on and the associations they may preload.

use crate::data::types::{Association, AssociationKind, FullTextIndex, Resource};

pub const AUTHORS: Resource = Resource {
    name: "authors",
    table: "authors",
    primary_key: "id",
    columns: &[
        "id",
        "name",
        "country",
        "bio",
        "active",
        "born_at",
        "created_at",
    ],
    filterable: &[
        "id",
        "name",
        "country",
        "bio",
        "active",
        "born_at",
        "created_at",
    ],
    sortable: &["id", "name", "country", "born_at", "created_at"],
    full_text: None,
    associations: &[Association {
        name: "Books",
        table: "books",
        kind: AssociationKind::HasMany,
        local_key: "id",
        remote_key: "author_id",
    }],
};

pub const BOOKS: Resource = Resource {
    name: "books",
    table: "books",
    primary_key: "id",
    columns: &[
        "id",
        "author_id",
        "title",
        "genre",
        "price",
        "pages",
        "in_stock",
        "isbn",
        "published_at",
    ],
    filterable: &[
        "id",
        "author_id",
        "title",
        "genre",
        "price",
        "pages",
        "in_stock",
        "isbn",
        "published_at",
    ],
    sortable: &["id", "title", "genre", "price", "pages", "published_at"],
    full_text: Some(FullTextIndex {
        table: "books_fts",
        columns: &["title"],
    }),
    associations: &[
        Association {
            name: "Author",
            table: "authors",
            kind: AssociationKind::BelongsTo,
            local_key: "author_id",
            remote_key: "id",
        },
        Association {
            name: "Reviews",
            table: "reviews",
            kind: AssociationKind::HasMany,
            local_key: "id",
            remote_key: "book_id",
        },
    ],
};

pub const REVIEWS: Resource = Resource {
    name: "reviews",
    table: "reviews",
    primary_key: "id",
    columns: &["id", "book_id", "reviewer", "rating", "body", "created_at"],
    filterable: &["id", "book_id", "reviewer", "rating", "body", "created_at"],
    sortable: &["id", "rating", "reviewer", "created_at"],
    full_text: None,
    associations: &[Association {
        name: "Book",
        table: "books",
        kind: AssociationKind::BelongsTo,
        local_key: "book_id",
        remote_key: "id",
    }],
};

/// Every listable resource, in display order
pub const CATALOG: &[Resource] = &[AUTHORS, BOOKS, REVIEWS];

/// Look up a resource by its URL name
pub fn find(name: &str) -> Option<&'static Resource> {
    CATALOG.iter().find(|r| r.name == name)
}
