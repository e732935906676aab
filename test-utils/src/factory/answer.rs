//! Answer factory for creating test answer entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test answers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::answer::AnswerFactory;
///
/// let answer = AnswerFactory::new(&db, question.id)
///     .text("Four")
///     .build()
///     .await?;
/// ```
pub struct AnswerFactory<'a> {
    db: &'a DatabaseConnection,
    question_id: i32,
    user_id: Uuid,
    text: String,
}

impl<'a> AnswerFactory<'a> {
    /// Creates a new AnswerFactory with default values.
    ///
    /// Defaults:
    /// - user_id: random v4 UUID
    /// - text: `"Answer {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `question_id` - ID of the question this answer belongs to
    ///
    /// # Returns
    /// - `AnswerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, question_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            question_id,
            user_id: Uuid::new_v4(),
            text: format!("Answer {}", id),
        }
    }

    /// Sets the author user ID for the answer.
    pub fn user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the text for the answer.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builds and inserts the answer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::answer::Model)` - Created answer entity
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    ///   when the question does not exist
    pub async fn build(self) -> Result<entity::answer::Model, DbErr> {
        entity::answer::ActiveModel {
            question_id: ActiveValue::Set(self.question_id),
            user_id: ActiveValue::Set(self.user_id),
            text: ActiveValue::Set(self.text),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an answer with default values for the given question.
///
/// Shorthand for `AnswerFactory::new(db, question_id).build().await`.
pub async fn create_answer(
    db: &DatabaseConnection,
    question_id: i32,
) -> Result<entity::answer::Model, DbErr> {
    AnswerFactory::new(db, question_id).build().await
}
