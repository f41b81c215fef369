//! Extractors that reject bad input with an `ErrorResponse` body instead of
//! axum's plain-text rejections.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::{CODE_INVALID_PARAMETER, CODE_JSON_EXTRACTION, CODE_VALIDATION, ErrorResponse};
use crate::models::ItemId;

/// JSON body that passed its `Validate` rules
///
/// Malformed JSON keeps the status axum picks for it (400, 415 or 422);
/// a body that parses but breaks a rule is rejected with 400 and the failing
/// fields under `details`.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        data.validate().map_err(validation_rejection)?;

        Ok(ValidatedJson(data))
    }
}

/// Numeric `{id}` path segment
pub struct ItemIdPath(pub ItemId);

impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| invalid_parameter(rejection.body_text()))?;

        raw.parse::<ItemId>()
            .map(ItemIdPath)
            .map_err(|_| invalid_parameter(format!("Invalid item id: {}", raw)))
    }
}

/// Query string deserialized into `T`
pub struct SearchQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for SearchQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| invalid_parameter(rejection.body_text()))?;

        Ok(SearchQuery(value))
    }
}

fn invalid_parameter(message: impl Into<String>) -> Response {
    let body = ErrorResponse::new(CODE_INVALID_PARAMETER, "INVALID_PARAMETER", message);
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn json_rejection(rejection: JsonRejection) -> Response {
    let body = ErrorResponse::new(CODE_JSON_EXTRACTION, "BAD_REQUEST", rejection.body_text());
    (rejection.status(), Json(body)).into_response()
}

fn validation_rejection(errors: ValidationErrors) -> Response {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(messages))
        })
        .collect::<serde_json::Map<_, _>>();

    tracing::debug!(fields = ?details.keys().collect::<Vec<_>>(), "Request validation failed");

    let body = ErrorResponse::new(CODE_VALIDATION, "VALIDATION_ERROR", "Request validation failed")
        .with_details(serde_json::Value::Object(details));

    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
