use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::comments::dtos::{CommentResponseDto, CreateCommentDto};
use crate::features::comments::services::CommentService;
use crate::shared::types::ApiResponse;

/// List comments for a risk, oldest first
#[utoipa::path(
    get,
    path = "/risks/{id}/comments",
    params(
        ("id" = i32, Path, description = "Risk ID")
    ),
    responses(
        (status = 200, description = "Comments for the risk", body = ApiResponse<Vec<CommentResponseDto>>),
    ),
    tag = "comments"
)]
pub async fn list_comments(
    State(service): State<Arc<CommentService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<CommentResponseDto>>>> {
    let comments = service.list_for_risk(id).await?;
    Ok(Json(ApiResponse::success(Some(comments), None, None)))
}

/// Add a comment to a risk
#[utoipa::path(
    post,
    path = "/risks/{id}/comments",
    params(
        ("id" = i32, Path, description = "Risk ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = ApiResponse<CommentResponseDto>),
        (status = 400, description = "Missing user or blank comment text"),
    ),
    tag = "comments"
)]
pub async fn create_comment(
    State(service): State<Arc<CommentService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponseDto>>)> {
    dto.validate()
        .map_err(|_| AppError::Validation("User and comment text are required".to_string()))?;

    let comment = service.create(id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(comment), None, None)),
    ))
}

/// Delete a comment belonging to a risk
#[utoipa::path(
    delete,
    path = "/risks/{id}/comments/{comment_id}",
    params(
        ("id" = i32, Path, description = "Risk ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted"),
        (status = 404, description = "Comment not found for this risk"),
    ),
    tag = "comments"
)]
pub async fn delete_comment(
    State(service): State<Arc<CommentService>>,
    Path((id, comment_id)): Path<(i32, i32)>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, comment_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Comment deleted".to_string()),
        None,
    )))
}
