//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs declare the exact set of JSON keys they accept through
//! [`FieldWhitelist`]; see [`crate::api::extract::ValidJson`].

pub mod author;
pub mod health;
pub mod quote;

use serde::Serialize;

/// Keys a request body may contain. Anything else is rejected.
pub trait FieldWhitelist {
    const FIELDS: &'static [&'static str];
}

/// Plain confirmation body, e.g. after a deletion.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
