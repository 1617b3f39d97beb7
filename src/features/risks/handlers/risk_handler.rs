use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::risks::dtos::{
    CreateRiskDto, RiskListItemDto, RiskResponseDto, UpdateRiskDto,
};
use crate::features::risks::services::RiskService;
use crate::shared::types::ApiResponse;

/// List all risks with creator usernames and assigned user ids
#[utoipa::path(
    get,
    path = "/risks",
    responses(
        (status = 200, description = "List of risks", body = ApiResponse<Vec<RiskListItemDto>>),
    ),
    tag = "risks"
)]
pub async fn list_risks(
    State(service): State<Arc<RiskService>>,
) -> Result<Json<ApiResponse<Vec<RiskListItemDto>>>> {
    let risks = service.list().await?;
    Ok(Json(ApiResponse::success(Some(risks), None, None)))
}

/// Create a new risk
#[utoipa::path(
    post,
    path = "/risks",
    request_body = CreateRiskDto,
    responses(
        (status = 201, description = "Risk created", body = ApiResponse<RiskResponseDto>),
        (status = 400, description = "Missing or invalid field"),
    ),
    tag = "risks"
)]
pub async fn create_risk(
    State(service): State<Arc<RiskService>>,
    AppJson(dto): AppJson<CreateRiskDto>,
) -> Result<(StatusCode, Json<ApiResponse<RiskResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let risk = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(risk), None, None)),
    ))
}

/// Update an existing risk
#[utoipa::path(
    put,
    path = "/risks/{id}",
    params(
        ("id" = i32, Path, description = "Risk ID")
    ),
    request_body = UpdateRiskDto,
    responses(
        (status = 200, description = "Risk updated", body = ApiResponse<RiskResponseDto>),
        (status = 400, description = "Missing or invalid field"),
        (status = 404, description = "Risk not found"),
    ),
    tag = "risks"
)]
pub async fn update_risk(
    State(service): State<Arc<RiskService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdateRiskDto>,
) -> Result<Json<ApiResponse<RiskResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let risk = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(risk), None, None)))
}

/// Delete a risk and, via cascade, its comments and assignments
#[utoipa::path(
    delete,
    path = "/risks/{id}",
    params(
        ("id" = i32, Path, description = "Risk ID")
    ),
    responses(
        (status = 200, description = "Risk deleted"),
        (status = 404, description = "Risk not found"),
    ),
    tag = "risks"
)]
pub async fn delete_risk(
    State(service): State<Arc<RiskService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Risk deleted successfully".to_string()),
        None,
    )))
}
