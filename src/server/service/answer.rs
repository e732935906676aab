use std::sync::Arc;

use uuid::Uuid;

use crate::server::{
    data::repository::QaRepository,
    error::AppError,
    model::answer::{Answer, CreateAnswerParams},
};

/// Answer operations, including the rule that answers may only be created for
/// existing questions.
pub struct AnswerService {
    repo: Arc<dyn QaRepository>,
}

impl AnswerService {
    pub fn new(repo: Arc<dyn QaRepository>) -> Self {
        Self { repo }
    }

    /// Creates an answer for a question
    ///
    /// Looks the question up first and refuses to create the answer if the lookup fails.
    /// The question ID from the path and a freshly generated author ID replace whatever
    /// the caller put in `params`.
    ///
    /// The lookup and the insert are separate statements. If the question is deleted in
    /// between, the foreign key on `answer.question_id` rejects the insert and the store
    /// error is returned as `AppError::DbErr`.
    ///
    /// # Arguments
    /// - `question_id`: ID of the question being answered
    /// - `params`: Answer payload; only `text` is taken from it
    ///
    /// # Returns
    /// - `Ok(Answer)`: The created answer
    /// - `Err(AppError::QuestionReference)`: The question lookup failed; wraps the store error
    /// - `Err(AppError::DbErr)`: The insert failed
    pub async fn create(
        &self,
        question_id: i32,
        mut params: CreateAnswerParams,
    ) -> Result<Answer, AppError> {
        if let Err(source) = self.repo.get_question(question_id).await {
            return Err(AppError::QuestionReference {
                question_id,
                source,
            });
        }

        params.question_id = question_id;
        params.user_id = Uuid::new_v4();

        Ok(self.repo.create_answer(params).await?)
    }

    /// Gets an answer by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Answer, AppError> {
        Ok(self.repo.get_answer(id).await?)
    }

    /// Deletes an answer by ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(self.repo.delete_answer(id).await?)
    }
}
