//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API that
//! already enforces the visibility and rating rules.
//!
//! # Available Services
//!
//! - [`services::author_service::AuthorService`] - Authors and the soft-delete cascade
//! - [`services::quote_service::QuoteService`] - Quotes, ratings, counting and filtering

pub mod services;
