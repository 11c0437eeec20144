//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use listings_domain::error::ListingsError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps handler failures to an HTTP response with appropriate status code.
///
/// Storage failures are logged and answered with the endpoint's fixed
/// message; the underlying cause never reaches the client.
pub enum ApiError {
    /// The request body could not be decoded into the expected shape.
    Rejected(JsonRejection),
    /// A use-case failed; `message` is the client-facing text for storage errors.
    Failed {
        source: ListingsError,
        message: &'static str,
    },
}

impl ApiError {
    /// Build a `map_err` adapter tagging errors with an endpoint's failure message.
    pub fn with_message(message: &'static str) -> impl FnOnce(ListingsError) -> Self {
        move |source| Self::Failed { source, message }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Rejected(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::Failed {
                source: ListingsError::Validation(err),
                ..
            } => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Failed {
                source: err @ ListingsError::Storage(_),
                message,
            } => {
                tracing::error!(error = ?err, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
