use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::domain::GenerationError;

impl IntoResponse for GenerationError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!("Error in generate-content: {:?}", self);
        }
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}
