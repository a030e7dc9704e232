//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Connection retries exhausted (500, logged)
    DatabaseUnavailable(DbError),

    /// Statement failed on an open connection (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::DatabaseUnavailable(e) => {
                if let DbError::Connection { attempts, source } = e {
                    tracing::error!(attempts, last_error = %source, "database unavailable");
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "database_unavailable",
                        "message": e.to_string()
                    }),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        if e.is_connection() {
            Self::DatabaseUnavailable(e)
        } else {
            Self::Database(e)
        }
    }
}
