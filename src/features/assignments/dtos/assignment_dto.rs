use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::assignments::models::AssignedUser;

/// Request DTO for assigning a user to a risk
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignUserDto {
    pub user_id: i32,
}

/// Response DTO for an assigned user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignedUserDto {
    pub id: i32,
    pub username: String,
}

impl From<AssignedUser> for AssignedUserDto {
    fn from(u: AssignedUser) -> Self {
        Self {
            id: u.id,
            username: u.username,
        }
    }
}
