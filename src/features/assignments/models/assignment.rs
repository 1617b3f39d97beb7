use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for risk assignment. The composite (risk_id, user_id)
/// primary key guarantees at most one row per pair.
#[derive(Debug, Clone, FromRow)]
pub struct RiskAssignment {
    pub risk_id: i32,
    pub user_id: i32,
    pub assigned_at: DateTime<Utc>,
}

/// Join of an assignment with the assigned user's row
#[derive(Debug, Clone, FromRow)]
pub struct AssignedUser {
    pub id: i32,
    pub username: String,
}
