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
        api::ErrorDto,
        question::{CreateQuestionDto, QuestionDto},
    },
    server::{
        controller::{body_from_json, id_from_path},
        error::AppError,
        model::question::CreateQuestionParams,
        service::question::QuestionService,
        state::AppState,
        util::validate::validate_text,
    },
};

/// Tag for grouping question endpoints in OpenAPI documentation
pub static QUESTION_TAG: &str = "questions";

/// Create a new question.
///
/// # Returns
/// - `201 Created` - The created question with an empty answer list
/// - `400 Bad Request` - Malformed JSON or text outside 3 to 500 characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/questions",
    tag = QUESTION_TAG,
    request_body = CreateQuestionDto,
    responses(
        (status = 201, description = "Successfully created question", body = QuestionDto),
        (status = 400, description = "Invalid question payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Received request to create question");

    let payload = body_from_json(payload)?;
    if let Err(err) = validate_text("text", &payload.text) {
        tracing::warn!("Validation failed for question: {}", err);
        return Err(err.into());
    }

    let service = QuestionService::new(state.repository.clone());

    let question = service
        .create(CreateQuestionParams::from_dto(payload))
        .await?;

    tracing::info!("Question created successfully with ID: {}", question.id);

    Ok((StatusCode::CREATED, Json(question.into_dto())))
}

/// Get all questions.
///
/// Returns every question with its answers. An empty store yields an empty array.
///
/// # Returns
/// - `200 OK` - List of questions
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/questions",
    tag = QUESTION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved questions", body = Vec<QuestionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_questions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Received request to get all questions");

    let service = QuestionService::new(state.repository.clone());

    let questions = service.get_all().await?;

    let dtos: Vec<QuestionDto> = questions.into_iter().map(|q| q.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a question by ID together with its answers.
///
/// # Returns
/// - `200 OK` - The question
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No question with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/questions/{id}",
    tag = QUESTION_TAG,
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved question", body = QuestionDto),
        (status = 400, description = "Invalid question ID", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_question(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = id_from_path(path, "question")?;
    tracing::info!("Received request to get question with ID: {}", id);

    let service = QuestionService::new(state.repository.clone());

    let question = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(question.into_dto())))
}

/// Delete a question and all of its answers.
///
/// # Returns
/// - `204 No Content` - Question and its answers deleted
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No question with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = QUESTION_TAG,
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted question"),
        (status = 400, description = "Invalid question ID", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = id_from_path(path, "question")?;
    tracing::info!("Received request to delete question with ID: {}", id);

    let service = QuestionService::new(state.repository.clone());

    service.delete(id).await?;

    tracing::info!("Question with ID {} deleted successfully", id);

    Ok(StatusCode::NO_CONTENT)
}
