use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::assignments::dtos::AssignedUserDto;
use crate::features::assignments::models::{AssignedUser, RiskAssignment};

/// Service for risk assignments
pub struct AssignmentService {
    pool: PgPool,
}

impl AssignmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the users assigned to a risk, most recently assigned first
    pub async fn list_for_risk(&self, risk_id: i32) -> Result<Vec<AssignedUserDto>> {
        let users = sqlx::query_as::<_, AssignedUser>(
            r#"
            SELECT users.id, users.username
            FROM risk_assignments
            JOIN users ON users.id = risk_assignments.user_id
            WHERE risk_assignments.risk_id = $1
            ORDER BY risk_assignments.assigned_at DESC
            "#,
        )
        .bind(risk_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list assignments for risk {}: {:?}", risk_id, e);
            AppError::Database(e)
        })?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Assign a user to a risk. The insert races through the composite
    /// primary key: ON CONFLICT DO NOTHING returns no row when the pair
    /// already exists, which is reported as a bad request rather than a
    /// second row.
    pub async fn assign(&self, risk_id: i32, user_id: i32) -> Result<AssignedUserDto> {
        let assignment = sqlx::query_as::<_, RiskAssignment>(
            r#"
            INSERT INTO risk_assignments (risk_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (risk_id, user_id) DO NOTHING
            RETURNING risk_id, user_id, assigned_at
            "#,
        )
        .bind(risk_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to assign user {} to risk {}: {:?}",
                user_id,
                risk_id,
                e
            );
            AppError::Database(e)
        })?;

        let Some(assignment) = assignment else {
            return Err(AppError::BadRequest(
                "User is already assigned to this risk".to_string(),
            ));
        };

        tracing::info!(
            "User {} assigned to risk {} at {}",
            assignment.user_id,
            assignment.risk_id,
            assignment.assigned_at
        );

        let user = sqlx::query_as::<_, AssignedUser>(
            "SELECT id, username FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(user.into())
    }

    /// Remove a user's assignment; missing pairs are a not-found error,
    /// never a silent success
    pub async fn unassign(&self, risk_id: i32, user_id: i32) -> Result<()> {
        let deleted = sqlx::query_scalar::<_, i32>(
            r#"
            DELETE FROM risk_assignments
            WHERE risk_id = $1 AND user_id = $2
            RETURNING risk_id
            "#,
        )
        .bind(risk_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to unassign user {} from risk {}: {:?}",
                user_id,
                risk_id,
                e
            );
            AppError::Database(e)
        })?;

        if deleted.is_none() {
            return Err(AppError::NotFound("Assignment not found".to_string()));
        }

        tracing::info!("User {} unassigned from risk {}", user_id, risk_id);
        Ok(())
    }
}
