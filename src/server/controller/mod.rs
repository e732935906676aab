//! HTTP request handlers.
//!
//! Controllers decode path parameters and JSON bodies, run field-level validation,
//! build a service from the shared repository, and convert the resulting domain models
//! into DTOs. Errors are returned as `AppError` and mapped to status codes by its
//! `IntoResponse` implementation.

pub mod answer;
pub mod question;

use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Json, Path,
};

use crate::server::error::AppError;

/// Unwraps an ID path parameter, turning a malformed ID into 400 Bad Request.
fn id_from_path(
    path: Result<Path<i32>, PathRejection>,
    entity: &str,
) -> Result<i32, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::warn!("Invalid {} ID: {}", entity, rejection.body_text());
            Err(AppError::BadRequest(format!("Invalid {} ID", entity)))
        }
    }
}

/// Unwraps a JSON body, turning a malformed payload into 400 Bad Request.
fn body_from_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::warn!("Failed to decode request body: {}", rejection.body_text());
            Err(AppError::BadRequest(rejection.body_text()))
        }
    }
}

#[cfg(test)]
mod test;
