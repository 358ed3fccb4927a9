//! Handlers for author endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::MessageResponse;
use crate::api::dto::author::{
    AuthorResponse, AuthorWithQuotesResponse, CreateAuthorRequest, UpdateAuthorRequest,
};
use crate::api::dto::quote::{CreateQuoteRequest, QuoteResponse};
use crate::api::extract::{EntityId, ValidJson};
use crate::domain::entities::{AuthorOrder, AuthorPatch, NewAuthor};
use crate::error::AppError;
use crate::state::AppState;

async fn list(
    state: &AppState,
    order: AuthorOrder,
    deleted: bool,
) -> Result<Json<Vec<AuthorResponse>>, AppError> {
    let authors = state.author_service.list_authors(order, deleted).await?;

    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// Lists all non-deleted authors.
///
/// # Endpoint
///
/// `GET /authors`
pub async fn author_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorResponse>>, AppError> {
    list(&state, AuthorOrder::Id, false).await
}

/// Lists soft-deleted authors.
///
/// # Endpoint
///
/// `GET /authors/deleted`
pub async fn deleted_author_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorResponse>>, AppError> {
    list(&state, AuthorOrder::Id, true).await
}

/// `GET /authors/name`
pub async fn authors_by_name_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorResponse>>, AppError> {
    list(&state, AuthorOrder::Name, false).await
}

/// `GET /authors/surname`
pub async fn authors_by_surname_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorResponse>>, AppError> {
    list(&state, AuthorOrder::Surname, false).await
}

/// Fetches one author.
///
/// # Endpoint
///
/// `GET /authors/{id}`
///
/// # Errors
///
/// Returns 404 if the author does not exist or is deleted.
pub async fn get_author_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<AuthorResponse>, AppError> {
    let author = state.author_service.get_author(id).await?;

    Ok(Json(author.into()))
}

/// Creates a new author.
///
/// # Endpoint
///
/// `POST /authors`
///
/// ```json
/// { "name": "Mark", "surname": "Twain" }
/// ```
///
/// `surname` is optional and defaults to `""`.
///
/// # Errors
///
/// Returns 400 if `name` is missing or unknown keys are present.
/// Returns 409 if the same name and surname already exist.
pub async fn create_author_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateAuthorRequest>,
) -> Result<(StatusCode, Json<AuthorResponse>), AppError> {
    let author = state
        .author_service
        .create_author(NewAuthor::new(payload.name, payload.surname))
        .await?;

    Ok((StatusCode::CREATED, Json(author.into())))
}

/// Partially updates an author.
///
/// # Endpoint
///
/// `PUT /authors/{id}`
///
/// # Errors
///
/// Returns 400 on unknown keys or invalid values.
/// Returns 404 if the author does not exist or is deleted.
/// Returns 409 if the new name and surname collide with another author.
pub async fn update_author_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UpdateAuthorRequest>,
) -> Result<Json<AuthorResponse>, AppError> {
    let patch = AuthorPatch {
        name: payload.name,
        surname: payload.surname,
    };

    let author = state.author_service.update_author(id, patch).await?;

    Ok(Json(author.into()))
}

/// Soft-deletes an author and all of its quotes.
///
/// # Endpoint
///
/// `DELETE /authors/{id}`
///
/// # Errors
///
/// Returns 404 if the author does not exist or is already deleted.
pub async fn delete_author_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.author_service.soft_delete_author(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Author with id={id} deleted"
    ))))
}

/// Restores a soft-deleted author and all of its quotes.
///
/// # Endpoint
///
/// `PUT /authors/restore/{id}`
///
/// # Errors
///
/// Returns 404 if the author does not exist or is not deleted.
pub async fn restore_author_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<AuthorResponse>, AppError> {
    let author = state.author_service.restore_author(id).await?;

    Ok(Json(author.into()))
}

/// Fetches an author together with its quotes.
///
/// # Endpoint
///
/// `GET /authors/{id}/quotes`
///
/// # Errors
///
/// Returns 404 if the author does not exist or is deleted.
pub async fn author_quotes_handler(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<AuthorWithQuotesResponse>, AppError> {
    let (author, quotes) = state.author_service.get_author_with_quotes(id).await?;

    Ok(Json(AuthorWithQuotesResponse::new(author, quotes)))
}

/// Creates a quote under an author.
///
/// # Endpoint
///
/// `POST /authors/{id}/quotes`
///
/// ```json
/// { "text": "Quote A", "rating": 3 }
/// ```
///
/// # Errors
///
/// Returns 400 on unknown keys or a missing/empty `text`.
/// Returns 404 if the author does not exist or is deleted.
pub async fn create_quote_handler(
    EntityId(author_id): EntityId,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteResponse>), AppError> {
    let quote = state
        .quote_service
        .create_quote(author_id, payload.text, payload.rating)
        .await?;

    Ok((StatusCode::CREATED, Json(quote.into())))
}
