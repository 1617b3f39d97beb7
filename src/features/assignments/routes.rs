use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::assignments::handlers;
use crate::features::assignments::services::AssignmentService;

/// Create routes for the assignments feature
pub fn routes(service: Arc<AssignmentService>) -> Router {
    Router::new()
        .route(
            "/risks/{id}/assignments",
            get(handlers::list_assignments).post(handlers::assign_user),
        )
        .route(
            "/risks/{id}/assignments/{user_id}",
            delete(handlers::unassign_user),
        )
        .with_state(service)
}
