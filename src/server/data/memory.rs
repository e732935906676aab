//! In-memory implementation of [`QaRepository`].
//!
//! Stores questions and answers in `BTreeMap`s behind a single lock, mirroring the
//! behavior of the SeaORM repository: sequential IDs that are never reused, eager loading
//! of answers, cascading question deletes, `RecordNotFound` for missing rows, and a
//! foreign-key style rejection of answers whose question does not exist.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::server::{
    data::repository::QaRepository,
    model::{
        answer::{Answer, CreateAnswerParams},
        question::{CreateQuestionParams, Question},
    },
};

#[derive(Clone, Default)]
pub struct InMemoryRepository {
    data: Arc<RwLock<InMemoryData>>,
}

#[derive(Default)]
struct InMemoryData {
    /// Questions keyed by ID, stored without their answers.
    questions: BTreeMap<i32, Question>,
    answers: BTreeMap<i32, Answer>,
    last_question_id: i32,
    last_answer_id: i32,
}

impl InMemoryData {
    fn with_answers(&self, question: &Question) -> Question {
        let mut question = question.clone();
        question.answers = self
            .answers
            .values()
            .filter(|answer| answer.question_id == question.id)
            .cloned()
            .collect();
        question
    }
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of answers currently stored, across all questions.
    pub fn answer_count(&self) -> usize {
        self.data.read().map(|data| data.answers.len()).unwrap_or(0)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, InMemoryData>, DbErr> {
        self.data
            .read()
            .map_err(|e| DbErr::Custom(format!("in-memory store poisoned: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, InMemoryData>, DbErr> {
        self.data
            .write()
            .map_err(|e| DbErr::Custom(format!("in-memory store poisoned: {}", e)))
    }
}

#[async_trait]
impl QaRepository for InMemoryRepository {
    async fn create_question(&self, params: CreateQuestionParams) -> Result<Question, DbErr> {
        let mut data = self.write()?;
        data.last_question_id += 1;

        let question = Question {
            id: data.last_question_id,
            text: params.text,
            created_at: Utc::now(),
            answers: Vec::new(),
        };
        data.questions.insert(question.id, question.clone());

        Ok(question)
    }

    async fn get_question(&self, id: i32) -> Result<Question, DbErr> {
        let data = self.read()?;
        data.questions
            .get(&id)
            .map(|question| data.with_answers(question))
            .ok_or_else(|| DbErr::RecordNotFound(format!("Question with ID {} not found", id)))
    }

    async fn get_all_questions(&self) -> Result<Vec<Question>, DbErr> {
        let data = self.read()?;
        Ok(data
            .questions
            .values()
            .map(|question| data.with_answers(question))
            .collect())
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbErr> {
        let mut data = self.write()?;
        if data.questions.remove(&id).is_none() {
            return Err(DbErr::RecordNotFound(format!(
                "Question with ID {} not found",
                id
            )));
        }
        data.answers.retain(|_, answer| answer.question_id != id);

        Ok(())
    }

    async fn create_answer(&self, params: CreateAnswerParams) -> Result<Answer, DbErr> {
        let mut data = self.write()?;
        if !data.questions.contains_key(&params.question_id) {
            return Err(DbErr::Custom(format!(
                "FOREIGN KEY constraint failed: question {} does not exist",
                params.question_id
            )));
        }
        data.last_answer_id += 1;

        let answer = Answer {
            id: data.last_answer_id,
            question_id: params.question_id,
            user_id: params.user_id,
            text: params.text,
            created_at: Utc::now(),
        };
        data.answers.insert(answer.id, answer.clone());

        Ok(answer)
    }

    async fn get_answer(&self, id: i32) -> Result<Answer, DbErr> {
        self.read()?
            .answers
            .get(&id)
            .cloned()
            .ok_or_else(|| DbErr::RecordNotFound(format!("Answer with ID {} not found", id)))
    }

    async fn delete_answer(&self, id: i32) -> Result<(), DbErr> {
        self.write()?
            .answers
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbErr::RecordNotFound(format!("Answer with ID {} not found", id)))
    }
}
