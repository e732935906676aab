//! Route table and OpenAPI documentation.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{answer, question},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Question & Answer Service",
        description = "CRUD API for questions and their answers"
    ),
    tags(
        (name = "questions", description = "Question management"),
        (name = "answers", description = "Answer management")
    )
)]
pub struct ApiDoc;

/// Builds the application router with API routes, Swagger UI and HTTP middleware.
///
/// The OpenAPI document is assembled from the `#[utoipa::path]` annotations on each handler
/// and served at `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            question::get_questions,
            question::create_question
        ))
        .routes(routes!(
            question::get_question,
            question::delete_question
        ))
        .routes(routes!(answer::create_answer))
        .routes(routes!(answer::get_answer, answer::delete_answer))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
