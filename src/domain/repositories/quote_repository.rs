//! Repository trait for quote storage.

use crate::domain::entities::{NewQuote, Quote, QuotePatch, RatingDirection};
use crate::domain::quote_filter::QuoteFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for quotes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteQuoteRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Creates a new quote.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the referenced author row does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_quote: NewQuote) -> Result<Quote, AppError>;

    /// Finds a quote by ID, deleted or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Quote>, AppError>;

    /// Lists quotes ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, include_deleted: bool) -> Result<Vec<Quote>, AppError>;

    /// Lists the quotes of one author ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_author(
        &self,
        author_id: i64,
        include_deleted: bool,
    ) -> Result<Vec<Quote>, AppError>;

    /// Applies a partial update to a non-deleted quote.
    ///
    /// Returns `None` when no live quote has this ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `author_id` points at a missing row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: QuotePatch) -> Result<Option<Quote>, AppError>;

    /// Moves the rating of a non-deleted quote one step in a single write.
    ///
    /// Returns `None` when no live quote has this ID or its rating already
    /// sits on the bound in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn step_rating(
        &self,
        id: i64,
        direction: RatingDirection,
    ) -> Result<Option<Quote>, AppError>;

    /// Permanently removes a non-deleted quote.
    ///
    /// Returns `false` when no live quote has this ID. Quotes hidden by a
    /// soft-deleted author are left alone so a restore brings them back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts quotes, optionally including deleted ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store cannot be reached.
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, include_deleted: bool) -> Result<i64, AppError>;

    /// Picks one quote uniformly at random, or `None` if there is nothing to pick.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn random(&self, include_deleted: bool) -> Result<Option<Quote>, AppError>;

    /// Returns the live quotes matching every criterion in `filter`, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn filter(&self, filter: QuoteFilter) -> Result<Vec<Quote>, AppError>;
}
