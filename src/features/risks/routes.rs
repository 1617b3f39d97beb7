use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::risks::handlers;
use crate::features::risks::services::RiskService;

/// Create routes for the risks feature
pub fn routes(service: Arc<RiskService>) -> Router {
    Router::new()
        .route(
            "/risks",
            get(handlers::list_risks).post(handlers::create_risk),
        )
        .route(
            "/risks/{id}",
            put(handlers::update_risk).delete(handlers::delete_risk),
        )
        .with_state(service)
}
