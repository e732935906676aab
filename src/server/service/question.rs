use std::sync::Arc;

use crate::server::{
    data::repository::QaRepository,
    error::AppError,
    model::question::{CreateQuestionParams, Question},
};

/// Question operations. Every method is a pass-through to the repository.
pub struct QuestionService {
    repo: Arc<dyn QaRepository>,
}

impl QuestionService {
    pub fn new(repo: Arc<dyn QaRepository>) -> Self {
        Self { repo }
    }

    /// Creates a new question
    pub async fn create(&self, params: CreateQuestionParams) -> Result<Question, AppError> {
        Ok(self.repo.create_question(params).await?)
    }

    /// Gets a question by ID with all of its answers
    pub async fn get_by_id(&self, id: i32) -> Result<Question, AppError> {
        Ok(self.repo.get_question(id).await?)
    }

    /// Gets every question with its answers
    pub async fn get_all(&self) -> Result<Vec<Question>, AppError> {
        Ok(self.repo.get_all_questions().await?)
    }

    /// Deletes a question and all of its answers
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(self.repo.delete_question(id).await?)
    }
}
