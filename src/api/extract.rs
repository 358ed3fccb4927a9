//! Request extractors that reject with the uniform JSON error body.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use crate::api::dto::FieldWhitelist;
use crate::domain::quote_filter::QuoteFilter;
use crate::error::AppError;

/// JSON body checked against the DTO's key whitelist, then deserialized and validated.
///
/// Unknown keys are reported together in one error, e.g.
/// `Unknown fields: color, likes`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + FieldWhitelist,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Map<String, Value>>::from_request(req, state).await?;

        let mut unknown: Vec<&str> = body
            .keys()
            .map(String::as_str)
            .filter(|key| !T::FIELDS.contains(key))
            .collect();

        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(AppError::bad_request(format!(
                "Unknown fields: {}",
                unknown.join(", ")
            )));
        }

        let payload: T = serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::bad_request(format!("Invalid request body: {e}")))?;
        payload.validate()?;

        Ok(Self(payload))
    }
}

/// Numeric entity ID taken from the single path parameter.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

impl<S> FromRequestParts<S> for QuoteFilter
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) =
            Query::<HashMap<String, String>>::from_request_parts(parts, state).await?;
        QuoteFilter::from_params(&params)
    }
}
