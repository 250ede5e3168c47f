use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;

pub async fn get_traffic(State(state): State<AppState>) -> Json<Value> {
    let history = state.traffic.history();
    Json(json!({
        "sample_count": history.len(),
        "latest": state.traffic.latest(),
        "history": history,
    }))
}
