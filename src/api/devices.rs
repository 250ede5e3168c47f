use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;

pub async fn list_devices(State(state): State<AppState>) -> Json<Value> {
    let devices = state.devices.list();
    Json(json!({
        "device_count": devices.len(),
        "online_count": state.devices.online_count(),
        "devices": devices,
    }))
}
