//! HTTP service errors

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use station_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the HTTP service
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("キーワードを入力してください。")]
    MissingKeyword,

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Domain(DomainError),
}

impl From<DomainError> for ServerError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidKeyword => ServerError::MissingKeyword,
            other => ServerError::Domain(other),
        }
    }
}

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingKeyword => StatusCode::BAD_REQUEST,
            ServerError::Bind { .. } | ServerError::Io(_) | ServerError::Domain(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (self.status_code(), body).into_response()
    }
}
