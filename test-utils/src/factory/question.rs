//! Question factory for creating test question entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test questions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::question::QuestionFactory;
///
/// let question = QuestionFactory::new(&db)
///     .text("What is 2+2?")
///     .build()
///     .await?;
/// ```
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    text: String,
}

impl<'a> QuestionFactory<'a> {
    /// Creates a new QuestionFactory with default values.
    ///
    /// Defaults:
    /// - text: `"Question {id}?"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `QuestionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            text: format!("Question {}?", id),
        }
    }

    /// Sets the text for the question.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builds and inserts the question entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::question::Model)` - Created question entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        entity::question::ActiveModel {
            text: ActiveValue::Set(self.text),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a question with default values.
///
/// Shorthand for `QuestionFactory::new(db).build().await`.
pub async fn create_question(db: &DatabaseConnection) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db).build().await
}
