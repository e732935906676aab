//! Domain models for answer data operations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::answer::{AnswerDto, CreateAnswerDto};

/// An answer posted to exactly one question.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// Store-assigned identifier.
    pub id: i32,
    /// ID of the question this answer belongs to.
    pub question_id: i32,
    /// Author identity generated by the service at creation.
    pub user_id: Uuid,
    /// Answer text.
    pub text: String,
    /// Timestamp when the answer was created.
    pub created_at: DateTime<Utc>,
}

impl Answer {
    /// Converts an entity model to an answer domain model at the repository boundary.
    pub fn from_entity(entity: entity::answer::Model) -> Self {
        Self {
            id: entity.id,
            question_id: entity.question_id,
            user_id: entity.user_id,
            text: entity.text,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model into its API representation.
    pub fn into_dto(self) -> AnswerDto {
        AnswerDto {
            id: self.id,
            question_id: self.question_id,
            user_id: self.user_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new answer.
///
/// `question_id` and `user_id` carry whatever the client sent, if anything. The answer
/// service overwrites both before the answer reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateAnswerParams {
    /// ID of the question the answer belongs to.
    pub question_id: i32,
    /// Author identity.
    pub user_id: Uuid,
    /// Answer text, already validated by the controller.
    pub text: String,
}

impl CreateAnswerParams {
    pub fn from_dto(dto: CreateAnswerDto) -> Self {
        Self {
            question_id: dto.question_id.unwrap_or_default(),
            user_id: dto.user_id.unwrap_or_else(Uuid::nil),
            text: dto.text,
        }
    }
}
