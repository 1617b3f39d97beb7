use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::models::User;

/// Service for user lookups
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all users in stable id order (the UI's "current user" dropdown)
    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }
}
