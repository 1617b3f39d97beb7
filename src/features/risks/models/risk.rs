use sqlx::FromRow;

/// Database model for risk
#[derive(Debug, Clone, FromRow)]
pub struct Risk {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub score: i32,
    pub category: String,
    pub user_id: i32,
}

/// Risk row joined with its creator's username and the aggregated set of
/// assigned user ids. `username` is None when the creator row is missing
/// (LEFT JOIN); `assigned_user_ids` is None when nobody is assigned.
#[derive(Debug, Clone, FromRow)]
pub struct RiskWithAssignees {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub score: i32,
    pub category: String,
    pub user_id: i32,
    pub username: Option<String>,
    pub assigned_user_ids: Option<Vec<i32>>,
}
