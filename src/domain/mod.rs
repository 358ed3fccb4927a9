//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`quote_filter`] - Whitelisted exact-match quote criteria
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits are implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod quote_filter;
pub mod repositories;
