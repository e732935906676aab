//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through SeaORM active models and
//! bypass the application's repository layer, so they can be used to arrange state for
//! repository, service and controller tests alike.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let question = factory::create_question(&db).await?;
//!     let answer = factory::create_answer(&db, question.id).await?;
//!
//!     // Create a question together with several answers
//!     let (question, answers) = factory::helpers::create_question_with_answers(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let question = factory::question::QuestionFactory::new(&db)
//!     .text("What is 2+2?")
//!     .build()
//!     .await?;
//! ```

pub mod answer;
pub mod helpers;
pub mod question;

pub use answer::create_answer;
pub use question::create_question;
