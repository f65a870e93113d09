//! HTTP request handlers (route handlers).
//!
//! Each handler extracts request data, calls one service operation and
//! maps the outcome to a status code and JSON body.

use axum::Json;
use serde::Serialize;

/// Service health endpoint
pub mod health;
/// Ledger endpoints
pub mod ledger;
/// Stock endpoints
pub mod stock;
/// Trip listing endpoint
pub mod trips;

/// Confirmation body returned by mutating endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn json(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}
