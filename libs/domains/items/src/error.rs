use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::ItemId;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<sea_orm::DbErr> for ItemError {
    fn from(err: sea_orm::DbErr) -> Self {
        tracing::error!(error = %err, "Item storage failure");
        ItemError::Database(err.to_string())
    }
}

/// Error body returned by every item endpoint
///
/// ```json
/// { "code": 1004, "error": "NOT_FOUND", "message": "Item 42 not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric code for logging and monitoring
    pub code: i32,
    /// Machine-readable identifier
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Extra structured context, such as field validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

pub const CODE_VALIDATION: i32 = 1001;
pub const CODE_INVALID_PARAMETER: i32 = 1002;
pub const CODE_JSON_EXTRACTION: i32 = 1003;
pub const CODE_NOT_FOUND: i32 = 1004;
pub const CODE_INTERNAL: i32 = 1005;
pub const CODE_DATABASE: i32 = 2003;

impl ErrorResponse {
    pub fn new(code: i32, error: &str, message: impl Into<String>) -> Self {
        Self {
            code,
            error: error.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ItemError::NotFound(id) => {
                tracing::info!(error_code = CODE_NOT_FOUND, item_id = id, "Item not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(CODE_NOT_FOUND, "NOT_FOUND", format!("Item {} not found", id)),
                )
            }
            ItemError::Database(msg) => {
                tracing::error!(error_code = CODE_DATABASE, "Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(CODE_DATABASE, "DATABASE_ERROR", "A database error occurred."),
                )
            }
            ItemError::Internal(msg) => {
                tracing::error!(error_code = CODE_INTERNAL, "Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(CODE_INTERNAL, "INTERNAL_ERROR", "An unexpected error occurred."),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
