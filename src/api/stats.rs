use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::security::Severity;

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_events: usize,
    pub unresolved_events: usize,
    pub critical_unresolved: usize,
    pub device_count: usize,
    pub online_devices: usize,
    pub threat_level: String,
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let events = state.events.list(usize::MAX);
    let unresolved = events.iter().filter(|e| !e.resolved).count();
    let critical = events
        .iter()
        .filter(|e| !e.resolved && e.severity == Severity::Critical)
        .count();

    let threat_level = if critical > 0 {
        "HIGH"
    } else if unresolved > 5 {
        "ELEVATED"
    } else {
        "LOW"
    };

    Json(StatsResponse {
        total_events: events.len(),
        unresolved_events: unresolved,
        critical_unresolved: critical,
        device_count: state.devices.len(),
        online_devices: state.devices.online_count(),
        threat_level: threat_level.to_string(),
    })
}
