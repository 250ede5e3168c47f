use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

mod api;
mod config;
mod error;
mod scanner;
mod security;

use api::AppState;
use scanner::monitor::NetworkMonitor;
use scanner::registry::DeviceRegistry;
use scanner::sim::SimulatedTelemetry;
use scanner::traffic::TrafficStore;
use security::monitor::SecurityMonitor;
use security::store::SecurityEventStore;

const TRAFFIC_WINDOW: usize = 60;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load env vars
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // In-memory stores, seeded with the demo dataset
    let state = AppState {
        events: SecurityEventStore::with_seed_events(config.event_retention),
        devices: DeviceRegistry::with_seed_devices(),
        traffic: TrafficStore::new(TRAFFIC_WINDOW),
    };

    // Surface newly arrived unresolved criticals in the log, the way the
    // dashboard raises its alert toast. The id watermark starts past the
    // seed data so each event is warned about exactly once.
    let mut changes = state.events.subscribe();
    let mut last_seen_id = state
        .events
        .list(usize::MAX)
        .iter()
        .map(|e| e.id)
        .max()
        .unwrap_or(0);
    tokio::spawn(async move {
        while let Ok(snapshot) = changes.recv().await {
            for event in security::monitor::fresh_criticals(&snapshot, last_seen_id) {
                tracing::warn!(
                    "{} security alert: {}",
                    event.severity.label(),
                    event.title
                );
            }
            if let Some(max) = snapshot.iter().map(|e| e.id).max() {
                last_seen_id = last_seen_id.max(max);
            }
        }
    });

    // Periodic drivers; handles keep the tasks alive for the process.
    let telemetry = Arc::new(SimulatedTelemetry);
    let _network_monitor = NetworkMonitor::start(
        state.devices.clone(),
        state.traffic.clone(),
        state.events.clone(),
        telemetry.clone(),
        config.scan_interval,
    );
    let _security_monitor = SecurityMonitor::start(
        state.events.clone(),
        telemetry,
        config.security_interval,
    );

    // CORS Layer
    let cors = CorsLayer::permissive();

    // Build application with routes
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/v1/events", get(api::events::list_events))
        .route("/api/v1/events/:id/resolve", post(api::events::resolve_event))
        .route("/api/v1/simulate", post(api::simulate::simulate_attack))
        .route("/api/v1/devices", get(api::devices::list_devices))
        .route("/api/v1/traffic", get(api::traffic::get_traffic))
        .route("/api/v1/stats", get(api::stats::get_stats))
        .with_state(state)
        .layer(cors);

    // Run app
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn root() -> Json<Value> {
    Json(json!({
        "system": "netwarden",
        "status": "operational",
        "modules": {
            "event_store": "active",
            "network_scan": "simulated",
            "attack_simulation": "armed"
        }
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
