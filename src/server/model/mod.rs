//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping the service layer free of
//! database and wire concerns.

pub mod answer;
pub mod question;
