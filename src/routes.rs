use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::handlers::devices::{device_data, health, test};
use crate::services::DeviceService;

pub fn create_router(service: DeviceService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/test", get(test))
        .route("/api/device-data/:participant_id", get(device_data))
        .layer(CorsLayer::permissive())
        .with_state(service)
}
