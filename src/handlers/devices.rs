use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::Result;
use crate::models::DeviceDataResponse;
use crate::services::DeviceService;

pub async fn device_data(
    State(service): State<DeviceService>,
    Path(participant_id): Path<String>,
) -> Result<Json<DeviceDataResponse>> {
    let data = service.device_data(&participant_id).await?;
    Ok(Json(data))
}

pub async fn test() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "API is working" })),
    )
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}
