use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::comments::dtos::{CommentResponseDto, CreateCommentDto};
use crate::features::comments::models::{Comment, CommentWithAuthor};

/// Service for risk comments
pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a risk's comments in creation order, oldest first
    pub async fn list_for_risk(&self, risk_id: i32) -> Result<Vec<CommentResponseDto>> {
        let comments = sqlx::query_as::<_, CommentWithAuthor>(
            r#"
            SELECT
                comments.id, comments.risk_id, comments.user_id,
                comments.comment, comments.created_at,
                users.username
            FROM comments
            LEFT JOIN users ON users.id = comments.user_id
            WHERE comments.risk_id = $1
            ORDER BY comments.created_at ASC
            "#,
        )
        .bind(risk_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list comments for risk {}: {:?}", risk_id, e);
            AppError::Database(e)
        })?;

        Ok(comments.into_iter().map(|c| c.into()).collect())
    }

    /// Add a comment to a risk. The timestamp is assigned by the database;
    /// a missing risk or user surfaces as a foreign key violation.
    pub async fn create(&self, risk_id: i32, dto: CreateCommentDto) -> Result<CommentResponseDto> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (risk_id, user_id, comment)
            VALUES ($1, $2, $3)
            RETURNING id, risk_id, user_id, comment, created_at
            "#,
        )
        .bind(risk_id)
        .bind(dto.user_id)
        .bind(&dto.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add comment to risk {}: {:?}", risk_id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Comment created: id={}, risk_id={}, user_id={}",
            comment.id,
            comment.risk_id,
            comment.user_id
        );

        let username =
            sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = $1")
                .bind(comment.user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(CommentResponseDto::from_comment(comment, username))
    }

    /// Delete a comment, scoped to its risk: a comment id that exists but
    /// belongs to another risk is treated as not found
    pub async fn delete(&self, risk_id: i32, comment_id: i32) -> Result<()> {
        let deleted = sqlx::query_scalar::<_, i32>(
            r#"
            DELETE FROM comments
            WHERE id = $1 AND risk_id = $2
            RETURNING id
            "#,
        )
        .bind(comment_id)
        .bind(risk_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete comment {}: {:?}", comment_id, e);
            AppError::Database(e)
        })?;

        if deleted.is_none() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        Ok(())
    }
}
