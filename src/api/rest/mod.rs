//! REST endpoints
//!
//! - `GET /api/documents` - Document catalogue, newest first
//! - `GET /api/documents/:id` - Single document
//! - `GET /api/documents/:id/pages` - Page numbers and component names
//! - `GET /api/documents/:id/pages/:page` - Stored text of one page
//! - `POST /api/search` - Ranked keyword search within one document

pub mod documents;
pub mod search;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "BAD_REQUEST" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
