//! Repository trait for author management.

use crate::domain::entities::{Author, AuthorOrder, AuthorPatch, NewAuthor};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for authors.
///
/// Lookups return deleted rows too; the service layer decides what is visible.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAuthorRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Creates a new author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `(name, surname)` is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by ID, deleted or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError>;

    /// Lists authors whose `deleted` flag equals `deleted`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, order: AuthorOrder, deleted: bool) -> Result<Vec<Author>, AppError>;

    /// Applies a partial update to a non-deleted author.
    ///
    /// Returns `None` when no live author has this ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new `(name, surname)` is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<Option<Author>, AppError>;

    /// Sets the author's `deleted` flag and the flag of all its quotes atomically.
    ///
    /// Returns `false` when the author is absent or already in the target state;
    /// in that case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_deleted(&self, id: i64, deleted: bool) -> Result<bool, AppError>;

    /// Counts authors, optionally including deleted ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, include_deleted: bool) -> Result<i64, AppError>;

    /// Permanently removes every soft-deleted author together with its quotes.
    ///
    /// Returns the number of authors removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn purge_deleted(&self) -> Result<u64, AppError>;
}
