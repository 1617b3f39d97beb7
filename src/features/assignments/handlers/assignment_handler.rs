use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::assignments::dtos::{AssignUserDto, AssignedUserDto};
use crate::features::assignments::services::AssignmentService;
use crate::shared::types::ApiResponse;

/// List users assigned to a risk, most recent first
#[utoipa::path(
    get,
    path = "/risks/{id}/assignments",
    params(
        ("id" = i32, Path, description = "Risk ID")
    ),
    responses(
        (status = 200, description = "Assigned users", body = ApiResponse<Vec<AssignedUserDto>>),
    ),
    tag = "assignments"
)]
pub async fn list_assignments(
    State(service): State<Arc<AssignmentService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<AssignedUserDto>>>> {
    let users = service.list_for_risk(id).await?;
    Ok(Json(ApiResponse::success(Some(users), None, None)))
}

/// Assign a user to a risk
#[utoipa::path(
    post,
    path = "/risks/{id}/assignments",
    params(
        ("id" = i32, Path, description = "Risk ID")
    ),
    request_body = AssignUserDto,
    responses(
        (status = 201, description = "User assigned", body = ApiResponse<AssignedUserDto>),
        (status = 400, description = "Missing user id or user already assigned"),
    ),
    tag = "assignments"
)]
pub async fn assign_user(
    State(service): State<Arc<AssignmentService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<AssignUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<AssignedUserDto>>)> {
    let user = service.assign(id, dto.user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(user), None, None)),
    ))
}

/// Remove a user's assignment from a risk
#[utoipa::path(
    delete,
    path = "/risks/{id}/assignments/{user_id}",
    params(
        ("id" = i32, Path, description = "Risk ID"),
        ("user_id" = i32, Path, description = "Assigned user ID")
    ),
    responses(
        (status = 200, description = "User unassigned"),
        (status = 404, description = "Assignment not found"),
    ),
    tag = "assignments"
)]
pub async fn unassign_user(
    State(service): State<Arc<AssignmentService>>,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<Json<ApiResponse<()>>> {
    service.unassign(id, user_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("User unassigned successfully".to_string()),
        None,
    )))
}
