//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so the storage backend can be swapped
//! without touching services or handlers.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AuthorRepository`] - Author CRUD and the soft-delete cascade
//! - [`QuoteRepository`] - Quote CRUD, counting, random pick and filtering
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod author_repository;
pub mod quote_repository;

pub use author_repository::AuthorRepository;
pub use quote_repository::QuoteRepository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use quote_repository::MockQuoteRepository;
