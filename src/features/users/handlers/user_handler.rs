use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// List all users
///
/// The frontend uses this to populate the "current user" selector; users
/// themselves are created out of band.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponseDto>>),
    ),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users = service.list().await?;
    Ok(Json(ApiResponse::success(Some(users), None, None)))
}
