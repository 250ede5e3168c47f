use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::error::WardenError;
use crate::security::SecurityEvent;

const DEFAULT_LIMIT: usize = 100;

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Value> {
    let events = state.events.list(query.limit.unwrap_or(DEFAULT_LIMIT));
    Json(json!({
        "count": events.len(),
        "events": events,
    }))
}

pub async fn resolve_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SecurityEvent>, WardenError> {
    let event = state.events.resolve(id)?;
    tracing::info!("security event {} resolved: {}", event.id, event.title);
    Ok(Json(event))
}
