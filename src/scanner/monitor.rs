use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::scanner::registry::DeviceRegistry;
use crate::scanner::sim::TelemetrySource;
use crate::scanner::traffic::TrafficStore;
use crate::security::store::SecurityEventStore;
use crate::security::{EventDraft, Severity};
use crate::security::monitor::MonitorHandle;

/// Periodic network driver: refreshes the device inventory from a scan,
/// raises an info event for every never-before-seen device, and records one
/// traffic sample per tick.
pub struct NetworkMonitor;

impl NetworkMonitor {
    pub fn start(
        registry: DeviceRegistry,
        traffic: TrafficStore,
        events: SecurityEventStore,
        source: Arc<dyn TelemetrySource>,
        interval: Duration,
    ) -> MonitorHandle {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                Self::tick(&registry, &traffic, &events, source.as_ref());
            }
        });

        MonitorHandle::new(task)
    }

    fn tick(
        registry: &DeviceRegistry,
        traffic: &TrafficStore,
        events: &SecurityEventStore,
        source: &dyn TelemetrySource,
    ) {
        let scan = source.scan_network();
        let mut seen = HashSet::new();

        for sighting in scan.devices {
            seen.insert(sighting.mac.clone());
            let (device, is_new) = registry.observe(sighting);

            if is_new {
                tracing::info!(
                    "new device on network: {} ({}, {})",
                    device.name,
                    device.ip,
                    device.device_type.label()
                );
                events.append(EventDraft {
                    timestamp: Utc::now(),
                    severity: Severity::Info,
                    title: "New Device Connected".to_string(),
                    description: "A new device has connected to the network".to_string(),
                    source_ip: Some(device.ip.clone()),
                    target_ip: None,
                    attack_type: None,
                    recommendation: Some("Verify that this device is authorized".to_string()),
                    resolved: false,
                });
            }
        }

        registry.mark_absent(&seen);
        traffic.record(source.sample_traffic());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{DeviceSighting, DeviceType, ScanResult, TrafficSample};
    use crate::security::AttackType;

    /// Deterministic fixture: one laptop sighted every scan, flat traffic,
    /// no attacks.
    struct OneLaptop;

    impl TelemetrySource for OneLaptop {
        fn scan_network(&self) -> ScanResult {
            ScanResult {
                timestamp: Utc::now(),
                devices: vec![DeviceSighting {
                    ip: "192.168.0.55".to_string(),
                    mac: "AA:AA:AA:00:00:55".to_string(),
                    name: "Fixture Laptop".to_string(),
                    device_type: DeviceType::Laptop,
                }],
                gateway_ip: "192.168.0.1".to_string(),
                local_ip: "192.168.0.164".to_string(),
                scan_duration_ms: 900,
            }
        }

        fn sample_traffic(&self) -> TrafficSample {
            TrafficSample {
                timestamp: Utc::now(),
                inbound: 4096,
                outbound: 1024,
                total_connections: 11,
            }
        }

        fn next_attack(&self) -> Option<(AttackType, String)> {
            None
        }
    }

    #[test]
    fn test_tick_registers_device_and_raises_event_once() {
        let registry = DeviceRegistry::new();
        let traffic = TrafficStore::new(60);
        let events = SecurityEventStore::new(1000);
        let source = OneLaptop;

        NetworkMonitor::tick(&registry, &traffic, &events, &source);
        NetworkMonitor::tick(&registry, &traffic, &events, &source);

        // One device, one "new device" event despite two sightings.
        assert_eq!(registry.len(), 1);
        assert_eq!(events.len(), 1);
        let event = &events.list(10)[0];
        assert_eq!(event.title, "New Device Connected");
        assert_eq!(event.severity, Severity::Info);
        assert_eq!(event.source_ip.as_deref(), Some("192.168.0.55"));
    }

    #[test]
    fn test_tick_records_traffic_sample() {
        let registry = DeviceRegistry::new();
        let traffic = TrafficStore::new(60);
        let events = SecurityEventStore::new(1000);

        NetworkMonitor::tick(&registry, &traffic, &events, &OneLaptop);

        assert_eq!(traffic.history().len(), 1);
        assert_eq!(traffic.latest().unwrap().inbound, 4096);
    }

    #[test]
    fn test_seeded_devices_absent_from_scan_go_offline() {
        let registry = DeviceRegistry::with_seed_devices();
        let traffic = TrafficStore::new(60);
        let events = SecurityEventStore::new(1000);

        NetworkMonitor::tick(&registry, &traffic, &events, &OneLaptop);

        // The fixture only sights its own laptop; the seeded fleet drops
        // offline but stays in the inventory.
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.online_count(), 1);
    }
}
