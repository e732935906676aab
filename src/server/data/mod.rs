//! Database repository layer for questions and answers.
//!
//! `QaRepository` is the storage contract the service layer depends on. `DatabaseRepository`
//! is the production implementation; it delegates to the per-entity SeaORM repositories in
//! `question` and `answer`, which convert entity models into domain models before returning.
//! `InMemoryRepository` is a test double implementing the same contract without a database.

pub mod answer;
pub mod database;
#[cfg(test)]
pub mod memory;
pub mod question;
pub mod repository;

#[cfg(test)]
mod test;
