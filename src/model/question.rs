use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::answer::AnswerDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<AnswerDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    /// Question text, 3 to 500 characters.
    pub text: String,
}
