use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::question::{CreateQuestionParams, Question};

pub struct QuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new question
    ///
    /// # Returns
    /// - `Ok(Question)`: The created question with an empty answer set
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateQuestionParams) -> Result<Question, DbErr> {
        tracing::debug!("Creating question: {:?}", params);

        let question = entity::question::ActiveModel {
            text: ActiveValue::Set(params.text),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Question::from_entity(question, Vec::new()))
    }

    /// Gets a question by ID with its answers eagerly loaded
    ///
    /// # Returns
    /// - `Ok(Question)`: Question with answers ordered by answer ID
    /// - `Err(DbErr::RecordNotFound)`: No question has this ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Question, DbErr> {
        tracing::debug!("Getting question with ID: {}", id);

        let question = entity::prelude::Question::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| question_not_found(id))?;

        let answers = entity::prelude::Answer::find()
            .filter(entity::answer::Column::QuestionId.eq(id))
            .order_by_asc(entity::answer::Column::Id)
            .all(self.db)
            .await?;

        Ok(Question::from_entity(question, answers))
    }

    /// Gets all questions ordered by ID, each with its answers eagerly loaded
    ///
    /// # Returns
    /// - `Ok(Vec<Question>)`: All questions, empty when the table is empty
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Question>, DbErr> {
        tracing::debug!("Getting all questions");

        let rows = entity::prelude::Question::find()
            .find_with_related(entity::prelude::Answer)
            .order_by_asc(entity::question::Column::Id)
            .order_by_asc(entity::answer::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(question, answers)| Question::from_entity(question, answers))
            .collect())
    }

    /// Deletes a question and all of its answers
    ///
    /// Answers are removed before the question inside one transaction, so the delete is
    /// atomic even on a store that does not enforce `ON DELETE CASCADE`.
    ///
    /// # Returns
    /// - `Ok(())`: Question and its answers deleted
    /// - `Err(DbErr::RecordNotFound)`: No question has this ID; nothing was deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        tracing::debug!("Deleting question with ID: {}", id);

        let txn = self.db.begin().await?;

        let answers = entity::prelude::Answer::delete_many()
            .filter(entity::answer::Column::QuestionId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Question::delete_by_id(id)
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            // Dropping the transaction rolls it back
            return Err(question_not_found(id));
        }

        txn.commit().await?;

        tracing::debug!(
            "Deleted question {} and {} answer(s)",
            id,
            answers.rows_affected
        );

        Ok(())
    }
}

fn question_not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("Question with ID {} not found", id))
}
