//! SQLite implementation of the author repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Author, AuthorOrder, AuthorPatch, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    surname: String,
    deleted: bool,
}

impl From<AuthorRow> for Author {
    fn from(r: AuthorRow) -> Self {
        Author::new(r.id, r.name, r.surname, r.deleted)
    }
}

/// SQLite repository for authors.
///
/// Uses soft delete: `deleted = TRUE` marks a removed author. Flipping the flag
/// runs in a transaction that also flips every quote of the author.
pub struct SqliteAuthorRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAuthorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO authors (name, surname)
            VALUES (?1, ?2)
            RETURNING id, name, surname, deleted
            "#,
        )
        .bind(new_author.name)
        .bind(new_author.surname)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        // Does NOT filter deleted; the service decides visibility.
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, surname, deleted
            FROM authors
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn list(&self, order: AuthorOrder, deleted: bool) -> Result<Vec<Author>, AppError> {
        let sql = match order {
            AuthorOrder::Id => {
                "SELECT id, name, surname, deleted FROM authors \
                 WHERE deleted = ?1 ORDER BY id"
            }
            AuthorOrder::Name => {
                "SELECT id, name, surname, deleted FROM authors \
                 WHERE deleted = ?1 ORDER BY name, id"
            }
            AuthorOrder::Surname => {
                "SELECT id, name, surname, deleted FROM authors \
                 WHERE deleted = ?1 ORDER BY surname, id"
            }
        };

        let rows = sqlx::query_as::<_, AuthorRow>(sql)
            .bind(deleted)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            UPDATE authors SET
                name    = COALESCE(?2, name),
                surname = COALESCE(?3, surname)
            WHERE id = ?1 AND deleted = FALSE
            RETURNING id, name, surname, deleted
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.surname)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn set_deleted(&self, id: i64, deleted: bool) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE authors SET deleted = ?1 WHERE id = ?2 AND deleted <> ?1")
            .bind(deleted)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        let quotes = sqlx::query("UPDATE quotes SET deleted = ?1 WHERE author_id = ?2")
            .bind(deleted)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            author_id = id,
            deleted,
            quotes = quotes.rows_affected(),
            "Cascaded deleted flag"
        );
        Ok(true)
    }

    async fn count(&self, include_deleted: bool) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM authors WHERE ?1 OR deleted = FALSE")
                .bind(include_deleted)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }

    async fn purge_deleted(&self) -> Result<u64, AppError> {
        // Quotes go with their author through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM authors WHERE deleted = TRUE")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
