use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::answer::{Answer, CreateAnswerParams};

pub struct AnswerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnswerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new answer
    ///
    /// Performs no existence check on the question; the `answer.question_id` foreign key
    /// rejects an orphaned answer at insert time.
    ///
    /// # Returns
    /// - `Ok(Answer)`: The created answer
    /// - `Err(DbErr)`: Database error, including foreign key violations
    pub async fn create(&self, params: CreateAnswerParams) -> Result<Answer, DbErr> {
        tracing::debug!("Creating answer: {:?}", params);

        let answer = entity::answer::ActiveModel {
            question_id: ActiveValue::Set(params.question_id),
            user_id: ActiveValue::Set(params.user_id),
            text: ActiveValue::Set(params.text),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Answer::from_entity(answer))
    }

    /// Gets an answer by ID
    ///
    /// # Returns
    /// - `Ok(Answer)`: The answer
    /// - `Err(DbErr::RecordNotFound)`: No answer has this ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Answer, DbErr> {
        tracing::debug!("Getting answer with ID: {}", id);

        entity::prelude::Answer::find_by_id(id)
            .one(self.db)
            .await?
            .map(Answer::from_entity)
            .ok_or_else(|| answer_not_found(id))
    }

    /// Deletes an answer by ID
    ///
    /// # Returns
    /// - `Ok(())`: Answer deleted
    /// - `Err(DbErr::RecordNotFound)`: No answer has this ID
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        tracing::debug!("Deleting answer with ID: {}", id);

        let result = entity::prelude::Answer::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(answer_not_found(id));
        }

        Ok(())
    }
}

fn answer_not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("Answer with ID {} not found", id))
}
