//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing rules such as answers only referencing existing questions
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Server-Owned Fields**: Assigning values clients must not control
//!
//! Services receive their repository as an `Arc<dyn QaRepository>` so they can run
//! against the SeaORM repository in production and an in-memory double in tests.

pub mod answer;
pub mod question;
