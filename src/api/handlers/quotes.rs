//! Handlers for quote endpoints.

use axum::{
    Json,
    extract::State,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::api::dto::MessageResponse;
use crate::api::dto::quote::{CountResponse, QuoteResponse, UpdateQuoteRequest};
use crate::api::extract::{EntityId, ValidJson};
use crate::application::services::QuoteUpdate;
use crate::domain::entities::{RatingAdjustment, RatingDirection};
use crate::domain::quote_filter::QuoteFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Header set when a rating adjustment hit the bound and changed nothing.
pub const RATING_NOTICE_HEADER: HeaderName = HeaderName::from_static("x-rating-notice");

/// Lists all non-deleted quotes.
///
/// # Endpoint
///
/// `GET /quotes`
pub async fn quote_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuoteResponse>>, AppError> {
    let quotes = state.quote_service.list_quotes(false).await?;

    Ok(Json(quotes.into_iter().map(QuoteResponse::from).collect()))
}

/// Fetches one quote.
///
/// # Endpoint
///
/// `GET /quotes/{id}`
///
/// # Errors
///
/// Returns 404 if the quote does not exist or is deleted.
pub async fn get_quote_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = state.quote_service.get_quote(id).await?;

    Ok(Json(quote.into()))
}

/// Partially updates a quote.
///
/// # Endpoint
///
/// `PUT /quotes/{id}`
///
/// ```json
/// { "author_id": 2, "text": "Quote B", "rating": 4 }
/// ```
///
/// A `rating` outside 1-5 is ignored and the stored rating is kept.
///
/// # Errors
///
/// Returns 400 on unknown keys or when `author_id` names no live author.
/// Returns 404 if the quote does not exist or is deleted.
pub async fn update_quote_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UpdateQuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let update = QuoteUpdate {
        author_id: payload.author_id,
        text: payload.text,
        rating: payload.rating,
    };

    let quote = state.quote_service.update_quote(id, update).await?;

    Ok(Json(quote.into()))
}

/// `PUT /quotes/{id}/up`
pub async fn rating_up_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    adjust(&state, id, RatingDirection::Up).await
}

/// `PUT /quotes/{id}/down`
pub async fn rating_down_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    adjust(&state, id, RatingDirection::Down).await
}

/// Moves the rating one step and always answers 200 with the quote.
///
/// When the rating already sits on the bound the quote is returned unchanged
/// and the `x-rating-notice` header says so.
async fn adjust(
    state: &AppState,
    id: i64,
    direction: RatingDirection,
) -> Result<Response, AppError> {
    let adjustment = state.quote_service.adjust_rating(id, direction).await?;

    let notice = match (&adjustment, direction) {
        (RatingAdjustment::Changed(_), _) => None,
        (RatingAdjustment::AtBound(_), RatingDirection::Up) => {
            Some("rating is already at maximum")
        }
        (RatingAdjustment::AtBound(_), RatingDirection::Down) => {
            Some("rating is already at minimum")
        }
    };

    let body = Json(QuoteResponse::from(adjustment.into_quote()));

    Ok(match notice {
        Some(text) => (
            [(RATING_NOTICE_HEADER, HeaderValue::from_static(text))],
            body,
        )
            .into_response(),
        None => body.into_response(),
    })
}

/// Permanently deletes a quote.
///
/// # Endpoint
///
/// `DELETE /quotes/{id}`
///
/// # Errors
///
/// Returns 404 if the quote does not exist.
pub async fn delete_quote_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.quote_service.delete_quote(id).await?;

    Ok(Json(MessageResponse::new(format!("Quote with id={id} deleted"))))
}

/// Counts non-deleted quotes.
///
/// # Endpoint
///
/// `GET /quotes/count`
///
/// # Errors
///
/// Returns 503 if the store cannot be reached.
pub async fn quote_count_handler(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let count = state.quote_service.count_quotes(false).await?;

    Ok(Json(CountResponse { count }))
}

/// Returns one random non-deleted quote.
///
/// # Endpoint
///
/// `GET /quotes/random`
///
/// # Errors
///
/// Returns 404 if there are no quotes.
pub async fn random_quote_handler(
    State(state): State<AppState>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = state.quote_service.random_quote(false).await?;

    Ok(Json(quote.into()))
}

/// Filters non-deleted quotes by exact field values.
///
/// # Endpoint
///
/// `GET /quotes/filter?rating=5&surname=Twain`
///
/// Accepted keys: `id`, `author_id`, `text`, `rating`, `name`, `surname`.
/// All given criteria must match.
///
/// # Errors
///
/// Returns 400 on unknown keys or non-numeric values for numeric fields.
pub async fn filter_quotes_handler(
    State(state): State<AppState>,
    filter: QuoteFilter,
) -> Result<Json<Vec<QuoteResponse>>, AppError> {
    let quotes = state.quote_service.filter_quotes(filter).await?;

    Ok(Json(quotes.into_iter().map(QuoteResponse::from).collect()))
}
