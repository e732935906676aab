//! Storage contract for questions and answers.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::model::{
    answer::{Answer, CreateAnswerParams},
    question::{CreateQuestionParams, Question},
};

/// Storage-backed CRUD primitives for questions and answers.
///
/// Implementations hold no business rules. Store failures are returned unchanged as
/// `DbErr`; a missing row is always reported as `DbErr::RecordNotFound`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single instance can be shared by every
/// request handler behind an `Arc`.
#[async_trait]
pub trait QaRepository: Send + Sync {
    /// Inserts a question and returns it with `id` and `created_at` populated.
    async fn create_question(&self, params: CreateQuestionParams) -> Result<Question, DbErr>;

    /// Fetches a question together with all of its answers.
    async fn get_question(&self, id: i32) -> Result<Question, DbErr>;

    /// Fetches every question with its answers, ordered by ID. Empty store yields an empty `Vec`.
    async fn get_all_questions(&self) -> Result<Vec<Question>, DbErr>;

    /// Deletes a question and, atomically, all of its answers.
    async fn delete_question(&self, id: i32) -> Result<(), DbErr>;

    /// Inserts an answer. Fails with a constraint error if the question does not exist.
    async fn create_answer(&self, params: CreateAnswerParams) -> Result<Answer, DbErr>;

    /// Fetches a single answer.
    async fn get_answer(&self, id: i32) -> Result<Answer, DbErr>;

    /// Deletes a single answer.
    async fn delete_answer(&self, id: i32) -> Result<(), DbErr>;
}
