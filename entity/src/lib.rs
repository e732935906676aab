//! SeaORM entity definitions for the question and answer tables.

pub mod prelude;

pub mod answer;
pub mod question;
