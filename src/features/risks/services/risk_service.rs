use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::risks::dtos::{
    CreateRiskDto, RiskListItemDto, RiskResponseDto, UpdateRiskDto,
};
use crate::features::risks::models::{Risk, RiskWithAssignees};

/// Service for risk CRUD operations
pub struct RiskService {
    pool: PgPool,
}

impl RiskService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all risks, newest first, each with its creator's username and
    /// the aggregated ids of assigned users
    pub async fn list(&self) -> Result<Vec<RiskListItemDto>> {
        let risks = sqlx::query_as::<_, RiskWithAssignees>(
            r#"
            SELECT
                risks.id, risks.title, risks.description, risks.score,
                risks.category, risks.user_id,
                users.username,
                agg.assigned_user_ids
            FROM risks
            LEFT JOIN users ON users.id = risks.user_id
            LEFT JOIN (
                SELECT risk_id, array_agg(user_id ORDER BY assigned_at) AS assigned_user_ids
                FROM risk_assignments
                GROUP BY risk_id
            ) agg ON agg.risk_id = risks.id
            ORDER BY risks.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list risks: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(risks.into_iter().map(|r| r.into()).collect())
    }

    /// Create a new risk; a missing creator surfaces as a foreign key
    /// violation and is reported as a bad request
    pub async fn create(&self, dto: CreateRiskDto) -> Result<RiskResponseDto> {
        let risk = sqlx::query_as::<_, Risk>(
            r#"
            INSERT INTO risks (title, description, score, category, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, score, category, user_id
            "#,
        )
        .bind(&dto.title)
        .bind(dto.description.unwrap_or_default())
        .bind(dto.score)
        .bind(&dto.category)
        .bind(dto.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create risk: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Risk created: id={}, user_id={}", risk.id, risk.user_id);

        let username = self.lookup_username(risk.user_id).await?;
        Ok(RiskResponseDto::from_risk(risk, username))
    }

    /// Update an existing risk; the owner is kept when `user_id` is omitted
    pub async fn update(&self, id: i32, dto: UpdateRiskDto) -> Result<RiskResponseDto> {
        let risk = sqlx::query_as::<_, Risk>(
            r#"
            UPDATE risks
            SET title = $1,
                description = $2,
                score = $3,
                category = $4,
                user_id = COALESCE($5, user_id)
            WHERE id = $6
            RETURNING id, title, description, score, category, user_id
            "#,
        )
        .bind(&dto.title)
        .bind(dto.description.unwrap_or_default())
        .bind(dto.score)
        .bind(&dto.category)
        .bind(dto.user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update risk {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Risk {} not found", id)))?;

        let username = self.lookup_username(risk.user_id).await?;
        Ok(RiskResponseDto::from_risk(risk, username))
    }

    /// Delete a risk. Comments and assignments are removed by ON DELETE
    /// CASCADE, so the whole teardown is a single atomic statement.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let deleted = sqlx::query_scalar::<_, i32>(
            r#"
            DELETE FROM risks
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete risk {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if deleted.is_none() {
            return Err(AppError::NotFound(format!("Risk {} not found", id)));
        }

        tracing::info!("Risk deleted: id={}", id);
        Ok(())
    }

    async fn lookup_username(&self, user_id: i32) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
