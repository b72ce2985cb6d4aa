//! Typed errors and HTTP mapping.

use crate::models::EntityKind;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Failures of a facade operation. Every variant is an expected outcome reported to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacadeError {
    #[error("{0}")]
    InvalidField(String),
    #[error("{kind} not found")]
    NotFound { kind: EntityKind },
    #[error("Owner not found")]
    OwnerNotFound { owner_id: String },
}

impl FacadeError {
    pub fn invalid(message: impl Into<String>) -> Self {
        FacadeError::InvalidField(message.into())
    }

    pub fn not_found(kind: EntityKind) -> Self {
        FacadeError::NotFound { kind }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Facade(#[from] FacadeError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Facade(FacadeError::InvalidField(_)) => StatusCode::BAD_REQUEST,
            AppError::Facade(FacadeError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Facade(FacadeError::OwnerNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
