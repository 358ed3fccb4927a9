//! In-process store implementing both repository traits.

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{
    Author, AuthorOrder, AuthorPatch, NewAuthor, NewQuote, Quote, QuotePatch, RatingDirection,
};
use crate::domain::quote_filter::QuoteFilter;
use crate::domain::repositories::{AuthorRepository, QuoteRepository};
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    authors: BTreeMap<i64, Author>,
    quotes: BTreeMap<i64, Quote>,
    last_author_id: i64,
    last_quote_id: i64,
}

impl Tables {
    fn name_taken(&self, name: &str, surname: &str, except: Option<i64>) -> bool {
        self.authors
            .values()
            .any(|a| a.name == name && a.surname == surname && Some(a.id) != except)
    }
}

/// A store that keeps authors and quotes in memory.
///
/// Enforces the same constraints as the SQLite schema: unique
/// `(name, surname)`, quotes referencing existing authors, and cascading
/// removal on purge. Every operation holds the table lock for its whole
/// duration, so writes and their confirmatory reads are atomic.
///
/// # Use Cases
///
/// - Local runs without a database file (`STORAGE_BACKEND=memory`)
/// - Tests that do not need SQL semantics
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory store (data is not persisted)");
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn duplicate_author() -> AppError {
    AppError::conflict("A record with the same values already exists")
}

#[async_trait]
impl AuthorRepository for MemoryStore {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let mut tables = self.tables.write().await;

        if tables.name_taken(&new_author.name, &new_author.surname, None) {
            return Err(duplicate_author());
        }

        tables.last_author_id += 1;
        let author = Author::new(
            tables.last_author_id,
            new_author.name,
            new_author.surname,
            false,
        );
        tables.authors.insert(author.id, author.clone());

        Ok(author)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        Ok(self.tables.read().await.authors.get(&id).cloned())
    }

    async fn list(&self, order: AuthorOrder, deleted: bool) -> Result<Vec<Author>, AppError> {
        let tables = self.tables.read().await;

        let mut authors: Vec<Author> = tables
            .authors
            .values()
            .filter(|a| a.deleted == deleted)
            .cloned()
            .collect();

        match order {
            AuthorOrder::Id => {}
            AuthorOrder::Name => authors.sort_by(|a, b| a.name.cmp(&b.name)),
            AuthorOrder::Surname => authors.sort_by(|a, b| a.surname.cmp(&b.surname)),
        }

        Ok(authors)
    }

    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<Option<Author>, AppError> {
        let mut tables = self.tables.write().await;

        let Some(current) = tables.authors.get(&id).filter(|a| !a.deleted) else {
            return Ok(None);
        };

        let name = patch.name.unwrap_or_else(|| current.name.clone());
        let surname = patch.surname.unwrap_or_else(|| current.surname.clone());

        if tables.name_taken(&name, &surname, Some(id)) {
            return Err(duplicate_author());
        }

        let author = Author::new(id, name, surname, false);
        tables.authors.insert(id, author.clone());

        Ok(Some(author))
    }

    async fn set_deleted(&self, id: i64, deleted: bool) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;

        match tables.authors.get_mut(&id) {
            Some(author) if author.deleted != deleted => author.deleted = deleted,
            _ => return Ok(false),
        }

        tables
            .quotes
            .values_mut()
            .filter(|q| q.author_id == id)
            .for_each(|q| q.deleted = deleted);

        Ok(true)
    }

    async fn count(&self, include_deleted: bool) -> Result<i64, AppError> {
        let tables = self.tables.read().await;
        let count = tables
            .authors
            .values()
            .filter(|a| include_deleted || !a.deleted)
            .count();

        Ok(count as i64)
    }

    async fn purge_deleted(&self) -> Result<u64, AppError> {
        let mut tables = self.tables.write().await;

        let before = tables.authors.len();
        tables.authors.retain(|_, a| !a.deleted);
        let purged = before - tables.authors.len();

        let Tables {
            authors, quotes, ..
        } = &mut *tables;
        quotes.retain(|_, q| authors.contains_key(&q.author_id));

        Ok(purged as u64)
    }
}

#[async_trait]
impl QuoteRepository for MemoryStore {
    async fn create(&self, new_quote: NewQuote) -> Result<Quote, AppError> {
        let mut tables = self.tables.write().await;

        if !tables.authors.contains_key(&new_quote.author_id) {
            return Err(AppError::bad_request("Referenced record does not exist"));
        }

        tables.last_quote_id += 1;
        let quote = Quote::new(
            tables.last_quote_id,
            new_quote.author_id,
            new_quote.text,
            new_quote.rating,
            false,
        );
        tables.quotes.insert(quote.id, quote.clone());

        Ok(quote)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Quote>, AppError> {
        Ok(self.tables.read().await.quotes.get(&id).cloned())
    }

    async fn list(&self, include_deleted: bool) -> Result<Vec<Quote>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables
            .quotes
            .values()
            .filter(|q| include_deleted || !q.deleted)
            .cloned()
            .collect())
    }

    async fn list_by_author(
        &self,
        author_id: i64,
        include_deleted: bool,
    ) -> Result<Vec<Quote>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables
            .quotes
            .values()
            .filter(|q| q.author_id == author_id && (include_deleted || !q.deleted))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, patch: QuotePatch) -> Result<Option<Quote>, AppError> {
        let mut tables = self.tables.write().await;

        if let Some(author_id) = patch.author_id
            && !tables.authors.contains_key(&author_id)
        {
            return Err(AppError::bad_request("Referenced record does not exist"));
        }

        let Some(quote) = tables.quotes.get_mut(&id).filter(|q| !q.deleted) else {
            return Ok(None);
        };

        if let Some(author_id) = patch.author_id {
            quote.author_id = author_id;
        }
        if let Some(text) = patch.text {
            quote.text = text;
        }
        if let Some(rating) = patch.rating {
            quote.rating = rating;
        }

        Ok(Some(quote.clone()))
    }

    async fn step_rating(
        &self,
        id: i64,
        direction: RatingDirection,
    ) -> Result<Option<Quote>, AppError> {
        let mut tables = self.tables.write().await;

        let Some(quote) = tables.quotes.get_mut(&id).filter(|q| !q.deleted) else {
            return Ok(None);
        };

        Ok(quote.rating.step(direction).map(|rating| {
            quote.rating = rating;
            quote.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;

        if !tables.quotes.get(&id).is_some_and(|q| !q.deleted) {
            return Ok(false);
        }

        Ok(tables.quotes.remove(&id).is_some())
    }

    async fn count(&self, include_deleted: bool) -> Result<i64, AppError> {
        let tables = self.tables.read().await;
        let count = tables
            .quotes
            .values()
            .filter(|q| include_deleted || !q.deleted)
            .count();

        Ok(count as i64)
    }

    async fn random(&self, include_deleted: bool) -> Result<Option<Quote>, AppError> {
        let tables = self.tables.read().await;

        let candidates: Vec<&Quote> = tables
            .quotes
            .values()
            .filter(|q| include_deleted || !q.deleted)
            .collect();

        Ok(candidates.choose(&mut rand::rng()).map(|q| (*q).clone()))
    }

    async fn filter(&self, filter: QuoteFilter) -> Result<Vec<Quote>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables
            .quotes
            .values()
            .filter(|q| !q.deleted)
            .filter(|q| {
                let author = tables.authors.get(&q.author_id);
                filter.id.is_none_or(|id| q.id == id)
                    && filter.author_id.is_none_or(|id| q.author_id == id)
                    && filter.text.as_ref().is_none_or(|t| &q.text == t)
                    && filter
                        .rating
                        .is_none_or(|r| i64::from(q.rating) == r)
                    && filter
                        .name
                        .as_ref()
                        .is_none_or(|n| author.is_some_and(|a| &a.name == n))
                    && filter
                        .surname
                        .as_ref()
                        .is_none_or(|s| author.is_some_and(|a| &a.surname == s))
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Rating;

    async fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        AuthorRepository::create(&store, NewAuthor::new("Mark".into(), Some("Twain".into())))
            .await
            .unwrap();
        AuthorRepository::create(&store, NewAuthor::new("Oscar".into(), Some("Wilde".into())))
            .await
            .unwrap();

        for (author_id, text, rating) in [(1, "Quote A", 5), (1, "Quote B", 2), (2, "Quote C", 5)] {
            QuoteRepository::create(
                &store,
                NewQuote {
                    author_id,
                    text: text.to_string(),
                    rating: Rating::new(rating).unwrap(),
                },
            )
            .await
            .unwrap();
        }

        store
    }

    #[tokio::test]
    async fn test_ids_start_at_one() {
        let store = seeded().await;

        let author = AuthorRepository::find_by_id(&store, 1).await.unwrap();
        assert_eq!(author.unwrap().name, "Mark");

        let quote = QuoteRepository::find_by_id(&store, 1).await.unwrap();
        assert_eq!(quote.unwrap().text, "Quote A");
    }

    #[tokio::test]
    async fn test_duplicate_author_conflicts() {
        let store = seeded().await;

        let result =
            AuthorRepository::create(&store, NewAuthor::new("Mark".into(), Some("Twain".into())))
                .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_quote_requires_author_row() {
        let store = MemoryStore::new();

        let result = QuoteRepository::create(
            &store,
            NewQuote {
                author_id: 9,
                text: "Orphan".to_string(),
                rating: Rating::default(),
            },
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        assert_eq!(QuoteRepository::count(&store, true).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_soft_delete_cascades_and_restores() {
        let store = seeded().await;

        assert!(store.set_deleted(1, true).await.unwrap());
        assert!(!store.set_deleted(1, true).await.unwrap());

        let live = QuoteRepository::list(&store, false).await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].author_id, 2);

        assert!(store.set_deleted(1, false).await.unwrap());
        assert_eq!(QuoteRepository::count(&store, false).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_hidden_quote_survives_delete_until_restore() {
        let store = seeded().await;
        let hidden = QuoteRepository::list(&store, false).await.unwrap()[0].id;

        store.set_deleted(1, true).await.unwrap();
        assert!(!QuoteRepository::delete(&store, hidden).await.unwrap());

        store.set_deleted(1, false).await.unwrap();
        assert!(QuoteRepository::find_by_id(&store, hidden).await.unwrap().is_some());
        assert!(QuoteRepository::delete(&store, hidden).await.unwrap());
    }

    #[tokio::test]
    async fn test_step_rating_stops_at_bounds() {
        let store = seeded().await;
        // "Quote B" starts at 2.
        let id = QuoteRepository::list(&store, false).await.unwrap()[1].id;

        let mut last = None;
        for _ in 0..6 {
            if let Some(q) = store.step_rating(id, RatingDirection::Up).await.unwrap() {
                last = Some(q.rating.value());
            }
        }

        assert_eq!(last, Some(5));
        assert!(store.step_rating(id, RatingDirection::Up).await.unwrap().is_none());
        assert!(store.step_rating(99, RatingDirection::Down).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_filter_by_rating_and_name() {
        let store = seeded().await;

        let top = store
            .filter(QuoteFilter {
                rating: Some(5),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(top.len(), 2);

        let twain = store
            .filter(QuoteFilter {
                rating: Some(5),
                surname: Some("Twain".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(twain.len(), 1);
        assert_eq!(twain[0].text, "Quote A");
    }

    #[tokio::test]
    async fn test_random_skips_deleted() {
        let store = seeded().await;
        store.set_deleted(1, true).await.unwrap();

        for _ in 0..10 {
            let quote = store.random(false).await.unwrap().unwrap();
            assert_eq!(quote.author_id, 2);
        }
    }

    #[tokio::test]
    async fn test_purge_removes_quotes_of_deleted_authors() {
        let store = seeded().await;
        store.set_deleted(2, true).await.unwrap();

        assert_eq!(store.purge_deleted().await.unwrap(), 1);
        assert_eq!(AuthorRepository::count(&store, true).await.unwrap(), 1);
        assert_eq!(QuoteRepository::count(&store, true).await.unwrap(), 2);
    }
}
