//! SQLite implementation of the quote repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewQuote, Quote, QuotePatch, Rating, RatingDirection};
use crate::domain::quote_filter::QuoteFilter;
use crate::domain::repositories::QuoteRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct QuoteRow {
    id: i64,
    author_id: i64,
    text: String,
    rating: i64,
    deleted: bool,
}

impl From<QuoteRow> for Quote {
    fn from(r: QuoteRow) -> Self {
        // The column carries a CHECK constraint, so the fallback is unreachable in practice.
        let rating = Rating::new(r.rating).unwrap_or_default();
        Quote::new(r.id, r.author_id, r.text, rating, r.deleted)
    }
}

/// SQLite repository for quotes.
///
/// Hard deletes remove the row; soft-delete flags are driven by the author
/// cascade in [`super::SqliteAuthorRepository`].
pub struct SqliteQuoteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteQuoteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteRepository for SqliteQuoteRepository {
    async fn create(&self, new_quote: NewQuote) -> Result<Quote, AppError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            INSERT INTO quotes (author_id, text, rating)
            VALUES (?1, ?2, ?3)
            RETURNING id, author_id, text, rating, deleted
            "#,
        )
        .bind(new_quote.author_id)
        .bind(new_quote.text)
        .bind(i64::from(new_quote.rating))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Quote>, AppError> {
        // Does NOT filter deleted; the service decides visibility.
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT id, author_id, text, rating, deleted
            FROM quotes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Quote::from))
    }

    async fn list(&self, include_deleted: bool) -> Result<Vec<Quote>, AppError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT id, author_id, text, rating, deleted
            FROM quotes
            WHERE ?1 OR deleted = FALSE
            ORDER BY id
            "#,
        )
        .bind(include_deleted)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Quote::from).collect())
    }

    async fn list_by_author(
        &self,
        author_id: i64,
        include_deleted: bool,
    ) -> Result<Vec<Quote>, AppError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT id, author_id, text, rating, deleted
            FROM quotes
            WHERE author_id = ?1 AND (?2 OR deleted = FALSE)
            ORDER BY id
            "#,
        )
        .bind(author_id)
        .bind(include_deleted)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Quote::from).collect())
    }

    async fn update(&self, id: i64, patch: QuotePatch) -> Result<Option<Quote>, AppError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            UPDATE quotes SET
                author_id = COALESCE(?2, author_id),
                text      = COALESCE(?3, text),
                rating    = COALESCE(?4, rating)
            WHERE id = ?1 AND deleted = FALSE
            RETURNING id, author_id, text, rating, deleted
            "#,
        )
        .bind(id)
        .bind(patch.author_id)
        .bind(patch.text)
        .bind(patch.rating.map(i64::from))
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Quote::from))
    }

    async fn step_rating(
        &self,
        id: i64,
        direction: RatingDirection,
    ) -> Result<Option<Quote>, AppError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            UPDATE quotes SET rating = rating + ?2
            WHERE id = ?1
              AND deleted = FALSE
              AND rating + ?2 BETWEEN ?3 AND ?4
            RETURNING id, author_id, text, rating, deleted
            "#,
        )
        .bind(id)
        .bind(direction.delta())
        .bind(i64::from(Rating::MIN))
        .bind(i64::from(Rating::MAX))
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Quote::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = ?1 AND deleted = FALSE")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, include_deleted: bool) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM quotes WHERE ?1 OR deleted = FALSE")
                .bind(include_deleted)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }

    async fn random(&self, include_deleted: bool) -> Result<Option<Quote>, AppError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT id, author_id, text, rating, deleted
            FROM quotes
            WHERE ?1 OR deleted = FALSE
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(include_deleted)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Quote::from))
    }

    async fn filter(&self, filter: QuoteFilter) -> Result<Vec<Quote>, AppError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT q.id, q.author_id, q.text, q.rating, q.deleted
            FROM quotes q
            JOIN authors a ON a.id = q.author_id
            WHERE q.deleted = FALSE
              AND (?1 IS NULL OR q.id = ?1)
              AND (?2 IS NULL OR q.author_id = ?2)
              AND (?3 IS NULL OR q.text = ?3)
              AND (?4 IS NULL OR q.rating = ?4)
              AND (?5 IS NULL OR a.name = ?5)
              AND (?6 IS NULL OR a.surname = ?6)
            ORDER BY q.id
            "#,
        )
        .bind(filter.id)
        .bind(filter.author_id)
        .bind(filter.text)
        .bind(filter.rating)
        .bind(filter.name)
        .bind(filter.surname)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Quote::from).collect())
    }
}
