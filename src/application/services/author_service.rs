//! Author management service.

use crate::domain::entities::{Author, AuthorOrder, AuthorPatch, NewAuthor, Quote};
use crate::domain::repositories::{AuthorRepository, QuoteRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Service for creating, editing and soft-deleting authors.
///
/// Deleted authors are invisible to every lookup except
/// [`AuthorService::list_authors`] with `deleted = true`.
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
    quotes: Arc<dyn QuoteRepository>,
}

impl AuthorService {
    /// Creates a new author service.
    pub fn new(authors: Arc<dyn AuthorRepository>, quotes: Arc<dyn QuoteRepository>) -> Self {
        Self { authors, quotes }
    }

    /// Creates a new author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::Conflict`] if `(name, surname)` already exists.
    pub async fn create_author(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        if new_author.name.trim().is_empty() {
            return Err(AppError::bad_request("Author name must not be empty"));
        }

        let author = self.authors.create(new_author).await?;
        tracing::info!(author_id = author.id, "Author created");

        Ok(author)
    }

    /// Retrieves a live author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author is absent or soft-deleted.
    pub async fn get_author(&self, id: i64) -> Result<Author, AppError> {
        self.authors
            .find_by_id(id)
            .await?
            .filter(|author| !author.is_deleted())
            .ok_or_else(|| author_not_found(id))
    }

    /// Retrieves a live author together with its live quotes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author is absent or soft-deleted.
    pub async fn get_author_with_quotes(&self, id: i64) -> Result<(Author, Vec<Quote>), AppError> {
        let author = self.get_author(id).await?;
        let quotes = self.quotes.list_by_author(author.id, false).await?;

        Ok((author, quotes))
    }

    /// Lists either the live authors or, with `deleted = true`, the deleted ones.
    pub async fn list_authors(
        &self,
        order: AuthorOrder,
        deleted: bool,
    ) -> Result<Vec<Author>, AppError> {
        self.authors.list(order, deleted).await
    }

    /// Updates the name and/or surname of a live author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new name is blank.
    /// Returns [`AppError::NotFound`] if the author is absent or soft-deleted.
    /// Returns [`AppError::Conflict`] if the new `(name, surname)` is taken.
    pub async fn update_author(&self, id: i64, patch: AuthorPatch) -> Result<Author, AppError> {
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::bad_request("Author name must not be empty"));
        }

        if patch.is_empty() {
            return self.get_author(id).await;
        }

        self.authors
            .update(id, patch)
            .await?
            .ok_or_else(|| author_not_found(id))
    }

    /// Soft-deletes an author and all of its quotes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author is absent or already deleted.
    pub async fn soft_delete_author(&self, id: i64) -> Result<(), AppError> {
        if !self.authors.set_deleted(id, true).await? {
            return Err(author_not_found(id));
        }

        tracing::info!(author_id = id, "Author soft-deleted with its quotes");
        Ok(())
    }

    /// Restores a soft-deleted author and all of its quotes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author is absent or not deleted.
    pub async fn restore_author(&self, id: i64) -> Result<Author, AppError> {
        if !self.authors.set_deleted(id, false).await? {
            return Err(AppError::not_found(format!(
                "Deleted author with id={id} not found"
            )));
        }

        tracing::info!(author_id = id, "Author restored with its quotes");
        self.get_author(id).await
    }

    /// Counts authors, optionally including deleted ones.
    pub async fn count_authors(&self, include_deleted: bool) -> Result<i64, AppError> {
        self.authors.count(include_deleted).await
    }

    /// Permanently removes soft-deleted authors and their quotes.
    pub async fn purge_deleted(&self) -> Result<u64, AppError> {
        let purged = self.authors.purge_deleted().await?;
        tracing::info!(purged, "Purged soft-deleted authors");

        Ok(purged)
    }
}

fn author_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Author with id={id} not found"))
}
