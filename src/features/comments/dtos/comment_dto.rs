use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::comments::models::{Comment, CommentWithAuthor};

/// Request DTO for adding a comment to a risk
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentDto {
    /// Comment author
    pub user_id: i32,

    /// Comment body; must contain at least one non-whitespace character
    #[validate(custom(function = "crate::shared::validation::not_blank"))]
    pub comment: String,
}

/// Response DTO for a comment, joined with the author's username
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponseDto {
    pub id: i32,
    pub risk_id: i32,
    pub user_id: i32,
    pub comment: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl CommentResponseDto {
    pub fn from_comment(comment: Comment, username: Option<String>) -> Self {
        Self {
            id: comment.id,
            risk_id: comment.risk_id,
            user_id: comment.user_id,
            comment: comment.comment,
            username: username.unwrap_or_else(|| "Unknown".to_string()),
            created_at: comment.created_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponseDto {
    fn from(c: CommentWithAuthor) -> Self {
        Self {
            id: c.id,
            risk_id: c.risk_id,
            user_id: c.user_id,
            comment: c.comment,
            username: c.username.unwrap_or_else(|| "Unknown".to_string()),
            created_at: c.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_comment_dto_valid() {
        let dto = CreateCommentDto {
            user_id: 1,
            comment: "We should mitigate this before release".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_comment_dto_rejects_blank_text() {
        for text in ["", "   ", "\n\t"] {
            let dto = CreateCommentDto {
                user_id: 1,
                comment: text.to_string(),
            };
            assert!(dto.validate().is_err(), "{:?} should be rejected", text);
        }
    }
}
