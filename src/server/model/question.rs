//! Domain models for question data operations.

use chrono::{DateTime, Utc};

use crate::{
    model::question::{CreateQuestionDto, QuestionDto},
    server::model::answer::Answer,
};

/// A question together with every answer posted to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Store-assigned identifier.
    pub id: i32,
    /// Question text.
    pub text: String,
    /// Timestamp when the question was created.
    pub created_at: DateTime<Utc>,
    /// Answers owned by this question, ordered by answer ID.
    pub answers: Vec<Answer>,
}

impl Question {
    /// Converts a question entity and its eagerly loaded answers at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The question row
    /// - `answers` - Answer rows belonging to the question
    ///
    /// # Returns
    /// - `Question` - The converted domain model
    pub fn from_entity(
        entity: entity::question::Model,
        answers: Vec<entity::answer::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            created_at: entity.created_at,
            answers: answers.into_iter().map(Answer::from_entity).collect(),
        }
    }

    /// Converts the domain model into its API representation.
    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.id,
            text: self.text,
            created_at: self.created_at,
            answers: self.answers.into_iter().map(Answer::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new question.
#[derive(Debug, Clone)]
pub struct CreateQuestionParams {
    /// Question text, already validated by the controller.
    pub text: String,
}

impl CreateQuestionParams {
    pub fn from_dto(dto: CreateQuestionDto) -> Self {
        Self { text: dto.text }
    }
}
