//! DTOs for author endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::FieldWhitelist;
use super::quote::QuoteResponse;
use crate::domain::entities::{Author, Quote};

/// Request body for `POST /authors`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAuthorRequest {
    #[validate(length(min = 1, max = 32, message = "must be 1-32 characters"))]
    pub name: String,

    #[validate(length(max = 32, message = "must be at most 32 characters"))]
    pub surname: Option<String>,
}

impl FieldWhitelist for CreateAuthorRequest {
    const FIELDS: &'static [&'static str] = &["name", "surname"];
}

/// Request body for `PUT /authors/{id}`.
///
/// All fields are optional; only provided fields are changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAuthorRequest {
    #[validate(length(min = 1, max = 32, message = "must be 1-32 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 32, message = "must be at most 32 characters"))]
    pub surname: Option<String>,
}

impl FieldWhitelist for UpdateAuthorRequest {
    const FIELDS: &'static [&'static str] = &["name", "surname"];
}

/// Public representation of an author.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

impl From<Author> for AuthorResponse {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
            surname: a.surname,
        }
    }
}

/// An author together with its live quotes.
#[derive(Debug, Serialize)]
pub struct AuthorWithQuotesResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub quotes: Vec<QuoteResponse>,
}

impl AuthorWithQuotesResponse {
    pub fn new(author: Author, quotes: Vec<Quote>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            surname: author.surname,
            quotes: quotes.into_iter().map(QuoteResponse::from).collect(),
        }
    }
}
