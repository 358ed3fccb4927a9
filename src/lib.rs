//! # Quotes API
//!
//! A REST service for authors and their quotes, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, filters and repository traits
//! - **Application Layer** ([`application`]) - Business rules over the repositories
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors and middleware
//!
//! ## Features
//!
//! - Soft deletion of authors that cascades to their quotes, with restore
//! - Bounded 1-5 quote ratings with up/down voting
//! - Random quote and exact-match quote filtering
//! - Interchangeable SQLite and in-memory storage
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://quotes.db?mode=rwc"
//! cargo run
//! ```
//!
//! Migrations are applied on startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthorService, QuoteService, QuoteUpdate};
    pub use crate::domain::entities::{Author, NewAuthor, NewQuote, Quote, Rating};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
