use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comment
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: i32,
    pub risk_id: i32,
    pub user_id: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Comment row joined with the author's username
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthor {
    pub id: i32,
    pub risk_id: i32,
    pub user_id: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub username: Option<String>,
}
