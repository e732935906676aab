use super::*;

/// Tests creating a new question.
///
/// Verifies that the repository inserts the question, assigns an ID and
/// creation timestamp, and returns it with an empty answer set.
///
/// Expected: Ok with question created
#[tokio::test]
async fn creates_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);
    let before = chrono::Utc::now();
    let question = repo
        .create(CreateQuestionParams {
            text: "What is 2+2?".to_string(),
        })
        .await?;

    assert!(question.id > 0);
    assert_eq!(question.text, "What is 2+2?");
    assert!(question.created_at >= before);
    assert!(question.answers.is_empty());

    let stored = entity::prelude::Question::find_by_id(question.id)
        .one(db)
        .await?;
    assert_eq!(stored.map(|q| q.text), Some("What is 2+2?".to_string()));

    Ok(())
}

/// Tests that question IDs increase monotonically.
///
/// Expected: Ok with each new ID greater than the last
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);
    let first = repo
        .create(CreateQuestionParams {
            text: "First question".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateQuestionParams {
            text: "Second question".to_string(),
        })
        .await?;

    assert!(second.id > first.id);

    Ok(())
}
