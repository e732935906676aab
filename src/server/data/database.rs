//! SeaORM-backed implementation of [`QaRepository`].

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{answer::AnswerRepository, question::QuestionRepository, repository::QaRepository},
    model::{
        answer::{Answer, CreateAnswerParams},
        question::{CreateQuestionParams, Question},
    },
};

/// Production repository delegating to the per-entity SeaORM repositories.
///
/// Cloning is cheap: `DatabaseConnection` is a handle to a shared connection pool.
#[derive(Clone)]
pub struct DatabaseRepository {
    db: DatabaseConnection,
}

impl DatabaseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QaRepository for DatabaseRepository {
    async fn create_question(&self, params: CreateQuestionParams) -> Result<Question, DbErr> {
        QuestionRepository::new(&self.db).create(params).await
    }

    async fn get_question(&self, id: i32) -> Result<Question, DbErr> {
        QuestionRepository::new(&self.db).get_by_id(id).await
    }

    async fn get_all_questions(&self) -> Result<Vec<Question>, DbErr> {
        QuestionRepository::new(&self.db).get_all().await
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbErr> {
        QuestionRepository::new(&self.db).delete(id).await
    }

    async fn create_answer(&self, params: CreateAnswerParams) -> Result<Answer, DbErr> {
        AnswerRepository::new(&self.db).create(params).await
    }

    async fn get_answer(&self, id: i32) -> Result<Answer, DbErr> {
        AnswerRepository::new(&self.db).get_by_id(id).await
    }

    async fn delete_answer(&self, id: i32) -> Result<(), DbErr> {
        AnswerRepository::new(&self.db).delete(id).await
    }
}
