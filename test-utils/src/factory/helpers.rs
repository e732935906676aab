//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a question with `count` answers attached to it.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of answers to create for the question
///
/// # Returns
/// - `Ok((question, answers))` - The created question and its answers in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_question_with_answers(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::question::Model, Vec<entity::answer::Model>), DbErr> {
    let question = crate::factory::question::create_question(db).await?;

    let mut answers = Vec::with_capacity(count);
    for _ in 0..count {
        answers.push(crate::factory::answer::create_answer(db, question.id).await?);
    }

    Ok((question, answers))
}
