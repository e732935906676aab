use super::*;

/// Tests fetching a question with its answers eagerly loaded.
///
/// Expected: Ok with the question and all of its answers in ID order
#[tokio::test]
async fn returns_question_with_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (question, answers) = factory::helpers::create_question_with_answers(db, 3).await?;
    // Answer on another question must not leak into the result
    let other = factory::create_question(db).await?;
    factory::create_answer(db, other.id).await?;

    let repo = QuestionRepository::new(db);
    let result = repo.get_by_id(question.id).await?;

    assert_eq!(result.id, question.id);
    assert_eq!(result.text, question.text);
    assert_eq!(result.created_at, question.created_at);
    let ids: Vec<i32> = result.answers.iter().map(|a| a.id).collect();
    let expected: Vec<i32> = answers.iter().map(|a| a.id).collect();
    assert_eq!(ids, expected);
    assert!(result.answers.iter().all(|a| a.question_id == question.id));

    Ok(())
}

/// Tests fetching a question that has no answers.
///
/// Expected: Ok with an empty answer set
#[tokio::test]
async fn returns_question_without_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let question = factory::create_question(db).await?;

    let repo = QuestionRepository::new(db);
    let result = repo.get_by_id(question.id).await?;

    assert!(result.answers.is_empty());

    Ok(())
}

/// Tests fetching a question that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);
    let result = repo.get_by_id(999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
