//! Error types and HTTP error response handling.
//!
//! Services and handlers share one error type, [`AppError`]. Input
//! validation failures are kept apart in [`ValidationError`] so their
//! user-facing messages stay fixed.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide result type.
pub type AppResult<T> = Result<T, AppError>;

/// Message returned when a stock delivery cannot be fulfilled.
pub const INSUFFICIENT_STOCK_MESSAGE: &str = "Quantidade insuficiente ou item não encontrado";

/// Message returned when a ledger entry id does not exist.
pub const LEDGER_ENTRY_NOT_FOUND: &str = "Financeiro não encontrado";

/// Invalid input rejected by a service before any storage call.
///
/// The `Display` text of each variant is part of the public API and
/// must not change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Descrição é obrigatória")]
    MissingDescription,

    #[error("Valor deve ser maior que zero")]
    NonPositiveAmount,

    #[error("Tipo financeiro inválido. Use: Entrada, Saída")]
    InvalidKind,

    #[error("Data início não pode ser maior que data fim")]
    InvertedRange,
}

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
/// "Not found" is reported by services as `None`/`false`; handlers turn
/// it into [`AppError::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error).
    ///
    /// Returns HTTP 500 and hides the details from the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request data failed a business validation rule.
    ///
    /// Returns HTTP 400 with the validation message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Requested resource does not exist.
    ///
    /// Returns HTTP 404.
    #[error("{0}")]
    NotFound(&'static str),

    /// Stock item is missing or holds less than the requested quantity.
    ///
    /// Returns HTTP 400.
    #[error("{}", INSUFFICIENT_STOCK_MESSAGE)]
    InsufficientStock,

    /// Body, query string or path could not be parsed.
    ///
    /// Returns HTTP 400 with the parser's explanation.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Validation` → 400 Bad Request
/// - `InsufficientStock` → 400 Bad Request
/// - `BadRequest` → 400 Bad Request
/// - `NotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(ref err) => {
                (StatusCode::BAD_REQUEST, "invalid_request", err.to_string())
            }
            AppError::InsufficientStock => (
                StatusCode::BAD_REQUEST,
                "insufficient_stock",
                self.to_string(),
            ),
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.to_string()),
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
