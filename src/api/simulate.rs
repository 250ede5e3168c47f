use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::AppState;
use crate::error::{validate_ipv4, WardenError};
use crate::security::{AttackType, SecurityEvent};

const DEFAULT_SOURCE_IP: &str = "192.168.0.200";
const DEFAULT_TARGET_IP: &str = "192.168.0.101";

/// An out-of-set `attack_type` string never reaches the classifier: serde
/// rejects it at deserialization because the enum is closed.
#[derive(Deserialize)]
pub struct SimulateRequest {
    pub attack_type: AttackType,
    pub source_ip: Option<String>,
    pub target_ip: Option<String>,
}

pub async fn simulate_attack(
    State(state): State<AppState>,
    Json(payload): Json<SimulateRequest>,
) -> Result<(StatusCode, Json<SecurityEvent>), WardenError> {
    let source_ip = payload.source_ip.as_deref().unwrap_or(DEFAULT_SOURCE_IP);
    let target_ip = payload.target_ip.as_deref().unwrap_or(DEFAULT_TARGET_IP);

    // Reject malformed addresses before any state mutation.
    validate_ipv4("source_ip", source_ip)?;
    validate_ipv4("target_ip", target_ip)?;

    let event = state.events.simulate(payload.attack_type, source_ip, target_ip);
    tracing::info!(
        "attack simulation triggered: {} from {} to {}",
        payload.attack_type.label(),
        source_ip,
        target_ip
    );

    Ok((StatusCode::CREATED, Json(event)))
}
