//! Quote management service.

use std::sync::Arc;

use crate::domain::entities::{
    NewQuote, Quote, QuotePatch, Rating, RatingAdjustment, RatingDirection,
};
use crate::domain::quote_filter::QuoteFilter;
use crate::domain::repositories::{AuthorRepository, QuoteRepository};
use crate::error::AppError;

/// Requested changes to a quote, as received from a client.
///
/// `rating` is raw: values outside the allowed range are dropped by
/// [`QuoteService::update_quote`] and the stored rating is kept.
#[derive(Debug, Clone, Default)]
pub struct QuoteUpdate {
    pub author_id: Option<i64>,
    pub text: Option<String>,
    pub rating: Option<i64>,
}

/// Service for quotes and their ratings.
///
/// Enforces that quotes only ever point at live authors and that ratings stay
/// within [`Rating::MIN`]..=[`Rating::MAX`].
pub struct QuoteService {
    quotes: Arc<dyn QuoteRepository>,
    authors: Arc<dyn AuthorRepository>,
}

impl QuoteService {
    /// Creates a new quote service.
    pub fn new(quotes: Arc<dyn QuoteRepository>, authors: Arc<dyn AuthorRepository>) -> Self {
        Self { quotes, authors }
    }

    /// Creates a quote under a live author.
    ///
    /// A missing or out-of-range `rating` becomes the default rating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author is absent or soft-deleted.
    /// Returns [`AppError::Validation`] if the text is blank.
    pub async fn create_quote(
        &self,
        author_id: i64,
        text: String,
        rating: Option<i64>,
    ) -> Result<Quote, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::bad_request("Quote text must not be empty"));
        }

        if !self.is_live_author(author_id).await? {
            return Err(AppError::not_found(format!(
                "Author with id={author_id} not found"
            )));
        }

        let rating = Rating::or_default(rating);
        let quote = self
            .quotes
            .create(NewQuote {
                author_id,
                text,
                rating,
            })
            .await?;

        tracing::info!(quote_id = quote.id, author_id, "Quote created");
        Ok(quote)
    }

    /// Lists quotes, live ones only unless `include_deleted` is set.
    pub async fn list_quotes(&self, include_deleted: bool) -> Result<Vec<Quote>, AppError> {
        self.quotes.list(include_deleted).await
    }

    /// Retrieves a live quote.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the quote is absent or soft-deleted.
    pub async fn get_quote(&self, id: i64) -> Result<Quote, AppError> {
        self.quotes
            .find_by_id(id)
            .await?
            .filter(|quote| !quote.is_deleted())
            .ok_or_else(|| quote_not_found(id))
    }

    /// Partially updates a live quote.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the quote is absent or soft-deleted.
    /// Returns [`AppError::Validation`] if `author_id` does not name a live author
    /// or the new text is blank.
    pub async fn update_quote(&self, id: i64, update: QuoteUpdate) -> Result<Quote, AppError> {
        let current = self.get_quote(id).await?;

        if update.text.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::bad_request("Quote text must not be empty"));
        }

        if let Some(author_id) = update.author_id
            && !self.is_live_author(author_id).await?
        {
            return Err(AppError::bad_request(format!(
                "Author with id={author_id} does not exist"
            )));
        }

        let rating = match update.rating {
            Some(raw) => {
                let rating = Rating::new(raw);
                if rating.is_none() {
                    tracing::debug!(quote_id = id, rating = raw, "Ignoring out-of-range rating");
                }
                rating
            }
            None => None,
        };

        let patch = QuotePatch {
            author_id: update.author_id,
            text: update.text,
            rating,
        };

        if patch == QuotePatch::default() {
            return Ok(current);
        }

        self.quotes
            .update(id, patch)
            .await?
            .ok_or_else(|| quote_not_found(id))
    }

    /// Moves a quote's rating one step up or down.
    ///
    /// The step is a single conditional write, so concurrent votes never
    /// overwrite each other. At the bound the quote is returned unchanged as
    /// [`RatingAdjustment::AtBound`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the quote is absent or soft-deleted.
    pub async fn adjust_rating(
        &self,
        id: i64,
        direction: RatingDirection,
    ) -> Result<RatingAdjustment, AppError> {
        if let Some(quote) = self.quotes.step_rating(id, direction).await? {
            return Ok(RatingAdjustment::Changed(quote));
        }

        let quote = self.get_quote(id).await?;
        Ok(RatingAdjustment::AtBound(quote))
    }

    /// Permanently deletes a live quote.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the quote is absent or hidden by a
    /// soft-deleted author.
    pub async fn delete_quote(&self, id: i64) -> Result<(), AppError> {
        if !self.quotes.delete(id).await? {
            return Err(quote_not_found(id));
        }

        tracing::info!(quote_id = id, "Quote deleted");
        Ok(())
    }

    /// Counts quotes, live ones only unless `include_deleted` is set.
    pub async fn count_quotes(&self, include_deleted: bool) -> Result<i64, AppError> {
        self.quotes.count(include_deleted).await
    }

    /// Picks a random quote.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Empty`] if there are no quotes to pick from.
    pub async fn random_quote(&self, include_deleted: bool) -> Result<Quote, AppError> {
        self.quotes
            .random(include_deleted)
            .await?
            .ok_or_else(|| AppError::empty("No quotes available"))
    }

    /// Returns the live quotes matching every criterion of `filter`.
    pub async fn filter_quotes(&self, filter: QuoteFilter) -> Result<Vec<Quote>, AppError> {
        self.quotes.filter(filter).await
    }

    async fn is_live_author(&self, author_id: i64) -> Result<bool, AppError> {
        Ok(self
            .authors
            .find_by_id(author_id)
            .await?
            .is_some_and(|author| !author.is_deleted()))
    }
}

fn quote_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Quote with id={id} not found"))
}
