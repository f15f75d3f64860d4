//! Error types with IntoResponse
//!
//! Form routes answer with HTML fragments, JSON routes with a JSON body.
//! Store failures are logged in full and shown to the client as a generic
//! message.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::FieldErrors;
use crate::render;

/// Error from an HTML form route
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Field validation failed (400, message fragment)
    #[error("{0}")]
    Invalid(FieldErrors),

    /// Post creation failed validation (400, list of every failure)
    #[error("{0}")]
    PostInvalid(FieldErrors),

    /// Body could not be decoded (400)
    #[error("{0}")]
    BadBody(String),

    /// Record to edit does not exist (404)
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Store failure (500, logged)
    #[error("store error: {0}")]
    Store(#[from] DbError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Invalid(errors) => (
                StatusCode::BAD_REQUEST,
                render::error_fragment(&errors.to_string()),
            ),
            Self::PostInvalid(errors) => (StatusCode::BAD_REQUEST, render::validation_page(errors)),
            Self::BadBody(message) => (StatusCode::BAD_REQUEST, render::error_fragment(message)),
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                render::error_fragment(&self.to_string()),
            ),
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    render::error_fragment("the operation could not be completed"),
                )
            }
        };

        (status, Html(body.into_string())).into_response()
    }
}

/// Error from a JSON route
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Store failure (500, logged)
    #[error("store error: {0}")]
    Store(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Store(e) = &self;
        tracing::error!("Store error: {}", e);

        let body = Json(json!({
            "error": "internal_error",
            "message": "an internal error occurred"
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
