use crate::server::{data::answer::AnswerRepository, model::answer::CreateAnswerParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod get_by_id;
