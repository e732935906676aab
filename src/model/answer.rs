use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnswerDto {
    pub id: i32,
    pub question_id: i32,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAnswerDto {
    /// Answer text, 3 to 500 characters.
    pub text: String,
    /// Accepted for compatibility and ignored; the question is taken from the path.
    #[serde(default)]
    pub question_id: Option<i32>,
    /// Accepted for compatibility and ignored; the server assigns the author.
    #[serde(default)]
    pub user_id: Option<Uuid>,
}
