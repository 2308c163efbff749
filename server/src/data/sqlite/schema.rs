//! SQLite schema definitions
//!
//! Initial schema with all tables. Later versions are applied by
//! `migrations.rs`.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 3;

/// Complete initial schema SQL (version 1)
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success INTEGER NOT NULL DEFAULT 1
);

-- =============================================================================
-- 1. Authors
-- =============================================================================
CREATE TABLE IF NOT EXISTS authors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL CHECK(length(name) >= 1 AND length(name) <= 200),
    country TEXT CHECK(country IS NULL OR length(country) = 2),
    bio TEXT,
    active INTEGER NOT NULL DEFAULT 1 CHECK(active IN (0, 1)),
    born_at TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_authors_country ON authors(country);

-- =============================================================================
-- 2. Books (references authors)
-- =============================================================================
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY,
    author_id INTEGER NOT NULL REFERENCES authors(id) ON DELETE CASCADE,
    title TEXT NOT NULL CHECK(length(title) >= 1),
    genre TEXT,
    price REAL NOT NULL CHECK(price >= 0),
    pages INTEGER CHECK(pages IS NULL OR pages > 0),
    in_stock INTEGER NOT NULL DEFAULT 1 CHECK(in_stock IN (0, 1)),
    isbn TEXT UNIQUE,
    published_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_books_author ON books(author_id);
CREATE INDEX IF NOT EXISTS idx_books_genre ON books(genre);
CREATE INDEX IF NOT EXISTS idx_books_published ON books(published_at);

-- =============================================================================
-- 3. Reviews (references books)
-- =============================================================================
CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY,
    book_id INTEGER NOT NULL REFERENCES books(id) ON DELETE CASCADE,
    reviewer TEXT NOT NULL,
    rating INTEGER NOT NULL CHECK(rating BETWEEN 1 AND 5),
    body TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_reviews_book ON reviews(book_id);
"#;

/// Version 2: reviewer lookups for per-reviewer listings
pub const MIGRATION_V2: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_reviews_reviewer ON reviews(reviewer)",
    "CREATE INDEX IF NOT EXISTS idx_reviews_created ON reviews(created_at)",
];

/// Version 3: full-text index over book titles.
///
/// External-content FTS5 table kept in sync by triggers; rowid is `books.id`.
/// Trigger bodies contain `;`, so statements are listed one by one.
pub const MIGRATION_V3: &[&str] = &[
    "CREATE VIRTUAL TABLE IF NOT EXISTS books_fts USING fts5(title, content='books', content_rowid='id')",
    r#"CREATE TRIGGER IF NOT EXISTS books_fts_insert AFTER INSERT ON books BEGIN
    INSERT INTO books_fts(rowid, title) VALUES (new.id, new.title);
END"#,
    r#"CREATE TRIGGER IF NOT EXISTS books_fts_delete AFTER DELETE ON books BEGIN
    INSERT INTO books_fts(books_fts, rowid, title) VALUES ('delete', old.id, old.title);
END"#,
    r#"CREATE TRIGGER IF NOT EXISTS books_fts_update AFTER UPDATE OF title ON books BEGIN
    INSERT INTO books_fts(books_fts, rowid, title) VALUES ('delete', old.id, old.title);
    INSERT INTO books_fts(rowid, title) VALUES (new.id, new.title);
END"#,
    "INSERT INTO books_fts(books_fts) VALUES ('rebuild')",
];
