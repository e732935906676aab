use super::*;

/// Tests deleting an answer.
///
/// Verifies that the answer is removed and its question and sibling answers
/// are left in place.
///
/// Expected: Ok with only the targeted answer deleted
#[tokio::test]
async fn deletes_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (question, answers) = factory::helpers::create_question_with_answers(db, 2).await?;

    let repo = AnswerRepository::new(db);
    repo.delete(answers[0].id).await?;

    let check = entity::prelude::Answer::find_by_id(answers[0].id)
        .one(db)
        .await?;
    assert!(check.is_none());

    let sibling = entity::prelude::Answer::find_by_id(answers[1].id)
        .one(db)
        .await?;
    assert!(sibling.is_some());

    let parent = entity::prelude::Question::find_by_id(question.id)
        .one(db)
        .await?;
    assert!(parent.is_some());

    Ok(())
}

/// Tests deleting an answer that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_question, answers) = factory::helpers::create_question_with_answers(db, 1).await?;

    let repo = AnswerRepository::new(db);
    let result = repo.delete(answers[0].id + 1000).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    let count = entity::prelude::Answer::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
