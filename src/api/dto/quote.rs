//! DTOs for quote endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::FieldWhitelist;
use crate::domain::entities::{Quote, Rating};

/// Request body for `POST /authors/{id}/quotes`.
///
/// A missing or out-of-range `rating` is stored as the default rating.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub text: String,

    pub rating: Option<i64>,
}

impl FieldWhitelist for CreateQuoteRequest {
    const FIELDS: &'static [&'static str] = &["text", "rating"];
}

/// Request body for `PUT /quotes/{id}`.
///
/// All fields are optional. An out-of-range `rating` is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuoteRequest {
    pub author_id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub text: Option<String>,

    pub rating: Option<i64>,
}

impl FieldWhitelist for UpdateQuoteRequest {
    const FIELDS: &'static [&'static str] = &["author_id", "text", "rating"];
}

/// Public representation of a quote.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub rating: Rating,
}

impl From<Quote> for QuoteResponse {
    fn from(q: Quote) -> Self {
        Self {
            id: q.id,
            author_id: q.author_id,
            text: q.text,
            rating: q.rating,
        }
    }
}

/// Response for `GET /quotes/count`.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}
