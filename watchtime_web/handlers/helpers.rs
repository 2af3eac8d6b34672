use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned with every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    pub error_message: String,
}

/// Helper: build a JSON error response with the given status.
pub fn error_response(
    status: StatusCode,
    error: &'static str,
    error_message: impl Into<String>,
) -> Response {
    let body = ErrorBody {
        error: error.to_string(),
        error_message: error_message.into(),
    };
    (status, Json(body)).into_response()
}
