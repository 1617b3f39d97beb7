use utoipa::{Modify, OpenApi};

use crate::features::assignments::{dtos as assignments_dtos, handlers as assignments_handlers};
use crate::features::comments::{dtos as comments_dtos, handlers as comments_handlers};
use crate::features::risks::{dtos as risks_dtos, handlers as risks_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::list_users,
        // Risks
        risks_handlers::list_risks,
        risks_handlers::create_risk,
        risks_handlers::update_risk,
        risks_handlers::delete_risk,
        // Comments
        comments_handlers::list_comments,
        comments_handlers::create_comment,
        comments_handlers::delete_comment,
        // Assignments
        assignments_handlers::list_assignments,
        assignments_handlers::assign_user,
        assignments_handlers::unassign_user,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Users
            users_dtos::UserResponseDto,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Risks
            risks_dtos::CreateRiskDto,
            risks_dtos::UpdateRiskDto,
            risks_dtos::RiskResponseDto,
            risks_dtos::RiskListItemDto,
            ApiResponse<Vec<risks_dtos::RiskListItemDto>>,
            ApiResponse<risks_dtos::RiskResponseDto>,
            // Comments
            comments_dtos::CreateCommentDto,
            comments_dtos::CommentResponseDto,
            ApiResponse<Vec<comments_dtos::CommentResponseDto>>,
            ApiResponse<comments_dtos::CommentResponseDto>,
            // Assignments
            assignments_dtos::AssignUserDto,
            assignments_dtos::AssignedUserDto,
            ApiResponse<Vec<assignments_dtos::AssignedUserDto>>,
            ApiResponse<assignments_dtos::AssignedUserDto>,
        )
    ),
    tags(
        (name = "users", description = "User directory (read-only)"),
        (name = "risks", description = "Risk CRUD"),
        (name = "comments", description = "Comments on risks"),
        (name = "assignments", description = "User-to-risk assignments"),
    ),
    info(
        title = "Risk Register API",
        version = "0.1.0",
        description = "API documentation for the risk register",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
