//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{AuthorService, QuoteService};
use crate::domain::repositories::{AuthorRepository, QuoteRepository};
use crate::infrastructure::persistence::{
    MemoryStore, SqliteAuthorRepository, SqliteQuoteRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<AuthorService>,
    pub quote_service: Arc<QuoteService>,
}

impl AppState {
    /// Wires the services on top of any pair of repositories.
    pub fn new(authors: Arc<dyn AuthorRepository>, quotes: Arc<dyn QuoteRepository>) -> Self {
        Self {
            author_service: Arc::new(AuthorService::new(authors.clone(), quotes.clone())),
            quote_service: Arc::new(QuoteService::new(quotes, authors)),
        }
    }

    /// State backed by SQLite repositories sharing one pool.
    pub fn with_sqlite(pool: SqlitePool) -> Self {
        let pool = Arc::new(pool);
        Self::new(
            Arc::new(SqliteAuthorRepository::new(pool.clone())),
            Arc::new(SqliteQuoteRepository::new(pool)),
        )
    }

    /// State backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store)
    }
}
