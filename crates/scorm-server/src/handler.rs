use axum::extract::State;
use axum::response::Json;
use serde_json::json;

use scorm_protocol::{
    GetValueRequest, GetValueResponse, HealthResponse, SetValueEntry, SetValueResult,
};

use crate::error::ServerResult;
use crate::state::AppState;

/// Answer one element read the bridge could not serve from its cache.
pub async fn get_value_handler(
    State(state): State<AppState>,
    Json(request): Json<GetValueRequest>,
) -> Json<GetValueResponse> {
    let value = state.with_tracker(|tracker| tracker.get_value(&request.name));
    Json(GetValueResponse { value })
}

/// Apply one drained write batch in submission order.
pub async fn set_values_handler(
    State(state): State<AppState>,
    Json(batch): Json<Vec<SetValueEntry>>,
) -> ServerResult<Json<Vec<SetValueResult>>> {
    tracing::debug!("applying write batch of {} entries", batch.len());
    let results = state.with_tracker(|tracker| tracker.set_values(&batch))?;
    Ok(Json(results))
}

/// Single-entry variant of the write endpoint.
pub async fn set_value_handler(
    State(state): State<AppState>,
    Json(entry): Json<SetValueEntry>,
) -> ServerResult<Json<SetValueResult>> {
    let result = state.with_tracker(|tracker| tracker.set_value(&entry))?;
    Ok(Json(result))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "scorm-server",
        "version": env!("CARGO_PKG_VERSION"),
        "protocol_version": scorm_protocol::PROTOCOL_VERSION,
    }))
}
