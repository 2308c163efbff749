//! Demo catalog data
//!
//! Deterministic rows used by `sieve system seed` and by the tests.
//! Seeding is skipped when the authors table already has rows.

use sqlx::SqlitePool;

use super::error::SqliteError;

type AuthorSeed = (i64, &'static str, &'static str, &'static str, bool, &'static str);
type BookSeed = (
    i64,
    i64,
    &'static str,
    &'static str,
    f64,
    i64,
    bool,
    Option<&'static str>,
    &'static str,
);
type ReviewSeed = (i64, i64, &'static str, i64, Option<&'static str>, &'static str);

const AUTHORS: &[AuthorSeed] = &[
    (
        1,
        "Ursula K. Le Guin",
        "US",
        "Wrote the Earthsea cycle and the Hainish novels.",
        false,
        "1929-10-21 00:00:00",
    ),
    (
        2,
        "Terry Pratchett",
        "GB",
        "Author of the Discworld series.",
        false,
        "1948-04-28 00:00:00",
    ),
    (
        3,
        "N. K. Jemisin",
        "US",
        "Three consecutive Hugo awards for the Broken Earth trilogy.",
        true,
        "1972-09-19 00:00:00",
    ),
    (
        4,
        "Jo Nesbø",
        "NO",
        "Crime novelist and musician.",
        true,
        "1960-03-29 00:00:00",
    ),
];

const BOOKS: &[BookSeed] = &[
    (1, 1, "A Wizard of Earthsea", "fantasy", 9.99, 183, true, Some("9780547773742"), "1968-11-01 00:00:00"),
    (2, 1, "The Left Hand of Darkness", "scifi", 12.50, 304, false, None, "1969-03-01 00:00:00"),
    (3, 2, "Guards! Guards!", "fantasy", 8.99, 416, true, Some("9780062225757"), "1989-11-01 00:00:00"),
    (4, 2, "Small Gods", "fantasy", 10.00, 400, true, None, "1992-05-01 00:00:00"),
    (5, 3, "The Fifth Season", "fantasy", 15.99, 512, true, Some("9780316229296"), "2015-08-04 00:00:00"),
    (6, 4, "The Snowman", "crime", 11.25, 528, false, Some("9780307595867"), "2007-01-01 00:00:00"),
];

const REVIEWS: &[ReviewSeed] = &[
    (1, 1, "mira", 5, Some("Timeless"), "2023-01-10 00:00:00"),
    (2, 1, "oskar", 4, Some("Quiet and deep"), "2023-02-11 00:00:00"),
    (3, 3, "mira", 5, Some("Hilarious"), "2023-03-12 00:00:00"),
    (4, 5, "li", 3, None, "2024-04-13 00:00:00"),
    (5, 6, "oskar", 2, Some("Too bleak"), "2024-05-14 00:00:00"),
];

/// Insert the demo catalog. Returns `false` when data already exists.
pub async fn seed_demo(pool: &SqlitePool) -> Result<bool, SqliteError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Catalog already populated, skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    for (id, name, country, bio, active, born_at) in AUTHORS {
        sqlx::query(
            "INSERT INTO authors (id, name, country, bio, active, born_at, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(country)
        .bind(bio)
        .bind(active)
        .bind(born_at)
        .bind(&now)
        .execute(&mut *tx)
        .await?;
    }

    for (id, author_id, title, genre, price, pages, in_stock, isbn, published_at) in BOOKS {
        sqlx::query(
            "INSERT INTO books (id, author_id, title, genre, price, pages, in_stock, isbn, published_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(author_id)
        .bind(title)
        .bind(genre)
        .bind(price)
        .bind(pages)
        .bind(in_stock)
        .bind(isbn)
        .bind(published_at)
        .execute(&mut *tx)
        .await?;
    }

    for (id, book_id, reviewer, rating, body, created_at) in REVIEWS {
        sqlx::query(
            "INSERT INTO reviews (id, book_id, reviewer, rating, body, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(book_id)
        .bind(reviewer)
        .bind(rating)
        .bind(body)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        authors = AUTHORS.len(),
        books = BOOKS.len(),
        reviews = REVIEWS.len(),
        "Seeded demo catalog"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sqlite::SqliteService;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let service = SqliteService::in_memory().await.unwrap();
        assert!(seed_demo(service.pool()).await.unwrap());
        assert!(!seed_demo(service.pool()).await.unwrap());

        let books: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(service.pool())
            .await
            .unwrap();
        assert_eq!(books, 6);
    }
}
