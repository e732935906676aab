use super::*;

/// Tests deleting a question.
///
/// Expected: Ok with question deleted
#[tokio::test]
async fn deletes_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let question = factory::create_question(db).await?;

    let repo = QuestionRepository::new(db);
    let result = repo.delete(question.id).await;

    assert!(result.is_ok());

    let check = entity::prelude::Question::find_by_id(question.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a question cascades to its answers.
///
/// Verifies that every answer of the deleted question is removed while answers
/// of other questions are left untouched.
///
/// Expected: Ok with question and its answers deleted
#[tokio::test]
async fn cascades_to_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (question, answers) = factory::helpers::create_question_with_answers(db, 3).await?;
    let (_other, other_answers) = factory::helpers::create_question_with_answers(db, 2).await?;

    let repo = QuestionRepository::new(db);
    repo.delete(question.id).await?;

    let remaining = entity::prelude::Answer::find()
        .filter(entity::answer::Column::QuestionId.eq(question.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    for answer in &answers {
        let check = entity::prelude::Answer::find_by_id(answer.id).one(db).await?;
        assert!(check.is_none());
    }

    let untouched = entity::prelude::Answer::find().count(db).await?;
    assert_eq!(untouched, other_answers.len() as u64);

    Ok(())
}

/// Tests deleting a question that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) and no rows affected
#[tokio::test]
async fn fails_for_nonexistent_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_question(db).await?;

    let repo = QuestionRepository::new(db);
    let result = repo.delete(existing.id + 1000).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    let count = entity::prelude::Question::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
