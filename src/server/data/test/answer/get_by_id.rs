use super::*;

/// Tests fetching an answer by ID.
///
/// Expected: Ok with the stored answer
#[tokio::test]
async fn returns_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let question = factory::create_question(db).await?;
    let created = factory::answer::AnswerFactory::new(db, question.id)
        .text("Four")
        .build()
        .await?;

    let repo = AnswerRepository::new(db);
    let answer = repo.get_by_id(created.id).await?;

    assert_eq!(answer.id, created.id);
    assert_eq!(answer.question_id, question.id);
    assert_eq!(answer.user_id, created.user_id);
    assert_eq!(answer.text, "Four");
    assert_eq!(answer.created_at, created.created_at);

    Ok(())
}

/// Tests fetching an answer that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnswerRepository::new(db);
    let result = repo.get_by_id(42).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
