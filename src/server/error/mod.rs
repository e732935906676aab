//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Store errors pass through unchanged in the
/// `DbErr` variant, so callers can still tell a missing row (`DbErr::RecordNotFound`)
/// apart from any other store failure.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request payload failed field-level validation.
    ///
    /// Results in 400 Bad Request with the validation message.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// `DbErr::RecordNotFound` results in 404 Not Found carrying the store's message;
    /// every other store failure results in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// An answer referenced a question that could not be resolved.
    ///
    /// Produced only by answer creation. `source` is the error returned while looking the
    /// question up, so a missing question (404) can be told apart from a store failure
    /// during the lookup (500).
    #[error("Failed to resolve question with ID {question_id}: {source}")]
    QuestionReference {
        /// The question ID supplied by the caller
        question_id: i32,
        /// The underlying lookup failure
        #[source]
        source: DbErr,
    },

    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Returns true when the error means the requested row does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::DbErr(DbErr::RecordNotFound(_)) => true,
            Self::QuestionReference { source, .. } => matches!(source, DbErr::RecordNotFound(_)),
            _ => false,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `ValidationErr`
/// - 404 Not Found - For `DbErr::RecordNotFound` and question references
///   whose lookup found no row
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::DbErr(DbErr::RecordNotFound(msg)) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::QuestionReference {
                question_id,
                source: DbErr::RecordNotFound(_),
            } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("Question with ID {} not found", question_id),
                }),
            )
                .into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::ValidationErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
