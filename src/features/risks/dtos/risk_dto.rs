use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::risks::models::{Risk, RiskWithAssignees};

/// Request DTO for creating a risk
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRiskDto {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    /// Optional free text, stored as an empty string when omitted
    pub description: Option<String>,

    /// Severity score on the 1-10 scale used by the UI
    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: i32,

    /// Category label (Functionality, Performance, Security, Usability);
    /// any non-empty value is accepted
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    /// Creating user
    pub user_id: i32,
}

/// Request DTO for updating a risk
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRiskDto {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: i32,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    /// New owner; the current owner is kept when omitted
    pub user_id: Option<i32>,
}

/// Response DTO for a single risk, joined with its creator's username
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskResponseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub score: i32,
    pub category: String,
    pub user_id: i32,
    pub username: String,
}

impl RiskResponseDto {
    pub fn from_risk(risk: Risk, username: Option<String>) -> Self {
        Self {
            id: risk.id,
            title: risk.title,
            description: risk.description,
            score: risk.score,
            category: risk.category,
            user_id: risk.user_id,
            username: username.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Response DTO for risk list entries, which additionally carry the ids of
/// all assigned users
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskListItemDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub score: i32,
    pub category: String,
    pub user_id: i32,
    pub username: String,
    pub assigned_user_ids: Vec<i32>,
}

impl From<RiskWithAssignees> for RiskListItemDto {
    fn from(r: RiskWithAssignees) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            score: r.score,
            category: r.category,
            user_id: r.user_id,
            username: r.username.unwrap_or_else(|| "Unknown".to_string()),
            assigned_user_ids: r.assigned_user_ids.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{RISK_CATEGORIES, SCORE_MAX, SCORE_MIN};
    use validator::Validate;

    fn valid_create_dto() -> CreateRiskDto {
        CreateRiskDto {
            title: "Leak in module X".to_string(),
            description: None,
            score: 8,
            category: "Security".to_string(),
            user_id: 1,
        }
    }

    #[test]
    fn test_create_dto_valid() {
        assert!(valid_create_dto().validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_empty_title() {
        let dto = CreateRiskDto {
            title: String::new(),
            ..valid_create_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_rejects_empty_category() {
        let dto = CreateRiskDto {
            category: String::new(),
            ..valid_create_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_score_bounds() {
        for score in SCORE_MIN..=SCORE_MAX {
            let dto = CreateRiskDto {
                score,
                ..valid_create_dto()
            };
            assert!(dto.validate().is_ok(), "score {} should be valid", score);
        }
        for score in [SCORE_MIN - 1, SCORE_MAX + 1, -1, 100] {
            let dto = CreateRiskDto {
                score,
                ..valid_create_dto()
            };
            assert!(dto.validate().is_err(), "score {} should be invalid", score);
        }
    }

    #[test]
    fn test_create_dto_accepts_known_categories() {
        for category in RISK_CATEGORIES {
            let dto = CreateRiskDto {
                category: category.to_string(),
                ..valid_create_dto()
            };
            assert!(dto.validate().is_ok(), "{} should be valid", category);
        }
    }

    #[test]
    fn test_update_dto_owner_is_optional() {
        let dto = UpdateRiskDto {
            title: "Leak in module X".to_string(),
            description: Some("narrowed down to the cache layer".to_string()),
            score: 6,
            category: "Performance".to_string(),
            user_id: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_list_item_defaults() {
        let item: RiskListItemDto = RiskWithAssignees {
            id: 1,
            title: "t".to_string(),
            description: String::new(),
            score: 3,
            category: "Usability".to_string(),
            user_id: 9,
            username: None,
            assigned_user_ids: None,
        }
        .into();
        assert_eq!(item.username, "Unknown");
        assert!(item.assigned_user_ids.is_empty());
    }
}
