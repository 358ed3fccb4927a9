//! Repository implementations.
//!
//! Concrete implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`SqliteAuthorRepository`] - Author storage and the soft-delete cascade
//! - [`SqliteQuoteRepository`] - Quote storage, random pick and filtering
//! - [`MemoryStore`] - Both traits over in-process tables
//!
//! [`pool`] opens the SQLite pool and applies the embedded migrations.

pub mod memory_store;
pub mod pool;
pub mod sqlite_author_repository;
pub mod sqlite_quote_repository;

pub use memory_store::MemoryStore;
pub use sqlite_author_repository::SqliteAuthorRepository;
pub use sqlite_quote_repository::SqliteQuoteRepository;
