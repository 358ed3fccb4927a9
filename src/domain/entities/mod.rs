//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the rules that govern them live in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`Author`] - A quote author, soft-deletable
//! - [`Quote`] - A quote owned by an author, carrying a bounded [`Rating`]
//!
//! Creation and partial updates use separate structs:
//! - `NewAuthor`, `NewQuote` - For creating new records
//! - `AuthorPatch`, `QuotePatch` - For partial updates

pub mod author;
pub mod quote;

pub use author::{Author, AuthorOrder, AuthorPatch, NewAuthor};
pub use quote::{NewQuote, Quote, QuotePatch, Rating, RatingAdjustment, RatingDirection};
