//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. It carries the question/answer repository as a trait object so the
//! same router can be served over the SeaORM store or an in-memory double.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::data::{database::DatabaseRepository, repository::QaRepository};

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the repository sits behind an `Arc`, and the SeaORM implementation
/// holds a `DatabaseConnection`, which is itself a shared connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Repository used by every service to reach persistent storage.
    pub repository: Arc<dyn QaRepository>,
}

impl AppState {
    /// Creates application state backed by the SeaORM repository.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations already applied
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(DatabaseRepository::new(db)))
    }

    /// Creates application state over an arbitrary repository implementation.
    pub fn with_repository(repository: Arc<dyn QaRepository>) -> Self {
        Self { repository }
    }
}
