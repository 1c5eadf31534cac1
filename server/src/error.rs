//! Errors surfaced to HTTP clients.
//!
//! # Design
//! Only the handlers construct `ApiError`. The store and service report
//! absence as `None` / `false`; handlers map that to `NotFound`, which
//! renders as `404 {"detail": "Todo not found"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::ErrorBody;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No todo with the requested id exists.
    #[error("Todo not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "request failed");
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
