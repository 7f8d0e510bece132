//! Mapping from service errors to HTTP responses.
//!
//! Every 4xx/5xx body is `{"erro": <message>}`. Store failures answer with
//! the operation's generic message; the cause goes to the log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use super::dto::ErrorBody;
use crate::domain::Entity;
use crate::error::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request shape or field validation failed.
    #[error("{0}")]
    Validation(String),

    /// The targeted row does not exist.
    #[error("{}", .0.not_found_message())]
    NotFound(Entity),

    /// The store call failed.
    #[error("{message}")]
    Persistence {
        message: &'static str,
        #[source]
        source: Error,
    },
}

impl ApiError {
    /// Classify a service error. `message` is what the caller sees if the
    /// store itself failed.
    pub fn from_service(err: Error, message: &'static str) -> Self {
        match err {
            Error::Domain(e) => Self::Validation(e.to_string()),
            Error::NotFound(entity) => Self::NotFound(entity),
            source => Self::Persistence { message, source },
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Persistence { message, source } = &self {
            error!(error = %source, "{message}");
        }
        let body = ErrorBody {
            erro: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
