pub mod devices;
pub mod events;
pub mod simulate;
pub mod stats;
pub mod traffic;

use crate::scanner::registry::DeviceRegistry;
use crate::scanner::traffic::TrafficStore;
use crate::security::store::SecurityEventStore;

/// Shared handles handed to every handler. Stores are internally
/// reference-counted, so cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub events: SecurityEventStore,
    pub devices: DeviceRegistry,
    pub traffic: TrafficStore,
}
