//! Typed errors, their HTTP status mapping, and the global failure envelope.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Route-level failure modes. `NotFound`, `AlreadyExists` and `BadRequest`
/// carry their own client-facing message and are returned as-is;
/// `Validation` and `Db` are the catch-all bucket and get rewritten by
/// [`error_envelope`] into the request-labelled shape.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found with the given ID")]
    NotFound(&'static str),
    #[error("{0} already exists!")]
    AlreadyExists(&'static str),
    /// Endpoint-specific rejection that keeps its own message, such as an
    /// update aimed at a missing id.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Uniform error body returned by every failing endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

/// Marker placed on catch-all responses so [`error_envelope`] can rewrite
/// them with the method and URL that only the middleware sees.
#[derive(Clone)]
pub(crate) struct FailureDetail(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        let enveloped = matches!(&self, ApiError::Validation(_) | ApiError::Db(_));
        let message = self.to_string();
        let mut response = (
            status,
            Json(ErrorMessage {
                message: message.clone(),
            }),
        )
            .into_response();
        if enveloped {
            response.extensions_mut().insert(FailureDetail(message));
        }
        response
    }
}

/// Boundary middleware. Any response carrying a [`FailureDetail`] is
/// replaced by a 400 with the body
/// `{"message": "Failed to execute: <METHOD>: <URL>. Detail: <text>"}`.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let mut response = next.run(request).await;
    if let Some(FailureDetail(detail)) = response.extensions_mut().remove::<FailureDetail>() {
        tracing::debug!(%method, %uri, %detail, "request failed");
        let message = format!("Failed to execute: {}: {}. Detail: {}", method, uri, detail);
        return (StatusCode::BAD_REQUEST, Json(ErrorMessage { message })).into_response();
    }
    response
}
