/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses.
 *
 * # Response Format
 *
 * Rejected submissions answer exactly what the web client expects:
 * ```json
 * { "error": "invalid" }
 * ```
 *
 * Other errors also carry the status:
 * ```json
 * { "error": "Not Found", "status": 404 }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("[Server] Request failed: {}", self);
        }

        let body = if self.is_invalid_submission() {
            serde_json::json!({ "error": message })
        } else {
            serde_json::json!({
                "error": message,
                "status": status.as_u16(),
            })
        };

        (status, Json(body)).into_response()
    }
}
