use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        answer::{AnswerDto, CreateAnswerDto},
        api::ErrorDto,
    },
    server::{
        controller::{body_from_json, id_from_path},
        error::AppError,
        model::answer::CreateAnswerParams,
        service::answer::AnswerService,
        state::AppState,
        util::validate::validate_text,
    },
};

/// Tag for grouping answer endpoints in OpenAPI documentation
pub static ANSWER_TAG: &str = "answers";

/// Create an answer for a question.
///
/// The question is taken from the path and the author ID is generated by the server;
/// `question_id` and `user_id` in the body are ignored.
///
/// # Returns
/// - `201 Created` - The created answer
/// - `400 Bad Request` - Invalid question ID, malformed JSON, or text outside 3 to 500 characters
/// - `404 Not Found` - No question with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/questions/{id}/answers",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    request_body = CreateAnswerDto,
    responses(
        (status = 201, description = "Successfully created answer", body = AnswerDto),
        (status = 400, description = "Invalid answer payload or question ID", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_answer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateAnswerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let question_id = id_from_path(path, "question")?;
    tracing::info!(
        "Received request to create answer for question ID: {}",
        question_id
    );

    let payload = body_from_json(payload)?;
    if let Err(err) = validate_text("text", &payload.text) {
        tracing::warn!("Validation failed for answer: {}", err);
        return Err(err.into());
    }

    let service = AnswerService::new(state.repository.clone());

    let answer = service
        .create(question_id, CreateAnswerParams::from_dto(payload))
        .await
        .inspect_err(|err| {
            if err.is_not_found() {
                tracing::warn!("Rejected answer for missing question ID {}", question_id);
            }
        })?;

    tracing::info!(
        "Answer {} created successfully for question ID {}",
        answer.id,
        question_id
    );

    Ok((StatusCode::CREATED, Json(answer.into_dto())))
}

/// Get an answer by ID.
///
/// # Returns
/// - `200 OK` - The answer
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No answer with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/answers/{id}",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved answer", body = AnswerDto),
        (status = 400, description = "Invalid answer ID", body = ErrorDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_answer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = id_from_path(path, "answer")?;
    tracing::info!("Received request to get answer with ID: {}", id);

    let service = AnswerService::new(state.repository.clone());

    let answer = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(answer.into_dto())))
}

/// Delete an answer.
///
/// # Returns
/// - `204 No Content` - Answer deleted
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No answer with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/answers/{id}",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted answer"),
        (status = 400, description = "Invalid answer ID", body = ErrorDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_answer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = id_from_path(path, "answer")?;
    tracing::info!("Received request to delete answer with ID: {}", id);

    let service = AnswerService::new(state.repository.clone());

    service.delete(id).await?;

    tracing::info!("Answer with ID {} deleted successfully", id);

    Ok(StatusCode::NO_CONTENT)
}
