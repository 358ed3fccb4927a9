//! Exact-match quote filter built from request parameters.
//!
//! Only the whitelisted field names below are accepted. Criteria are combined
//! with AND; deleted quotes are never matched.

use std::collections::HashMap;

use crate::error::AppError;

/// Quote and author field names accepted by [`QuoteFilter::from_params`].
pub const FILTER_FIELDS: &[&str] = &["id", "author_id", "text", "rating", "name", "surname"];

/// Exact-match criteria over quote fields and the owning author's fields.
///
/// `None` means the field is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
    pub id: Option<i64>,
    pub author_id: Option<i64>,
    pub text: Option<String>,
    pub rating: Option<i64>,
    pub name: Option<String>,
    pub surname: Option<String>,
}

impl QuoteFilter {
    /// Parses raw query parameters into a filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming every unknown key, or the first
    /// numeric field whose value does not parse.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut unknown: Vec<&str> = params
            .keys()
            .map(String::as_str)
            .filter(|key| !FILTER_FIELDS.contains(key))
            .collect();

        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(AppError::bad_request(format!(
                "Unknown filter fields: {}",
                unknown.join(", ")
            )));
        }

        Ok(Self {
            id: parse_int(params, "id")?,
            author_id: parse_int(params, "author_id")?,
            text: params.get("text").cloned(),
            rating: parse_int(params, "rating")?,
            name: params.get("name").cloned(),
            surname: params.get("surname").cloned(),
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_int(params: &HashMap<String, String>, key: &str) -> Result<Option<i64>, AppError> {
    params
        .get(key)
        .map(|raw| {
            raw.trim().parse::<i64>().map_err(|_| {
                AppError::bad_request(format!(
                    "Filter field '{key}' must be an integer, got '{raw}'"
                ))
            })
        })
        .transpose()
}
