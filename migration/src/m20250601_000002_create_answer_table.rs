use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_question_table::Question;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Answer::Table)
                    .if_not_exists()
                    .col(pk_auto(Answer::Id))
                    .col(integer(Answer::QuestionId))
                    .col(uuid(Answer::UserId))
                    .col(text(Answer::Text))
                    .col(
                        timestamp_with_time_zone(Answer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_question_id")
                            .from(Answer::Table, Answer::QuestionId)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_answer_question_id")
                    .table(Answer::Table)
                    .col(Answer::QuestionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Answer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Answer {
    Table,
    Id,
    QuestionId,
    UserId,
    Text,
    CreatedAt,
}
