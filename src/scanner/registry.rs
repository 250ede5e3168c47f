use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Duration, Utc};
use dashmap::DashMap;

use crate::scanner::oui::OuiDb;
use crate::scanner::{DeviceSighting, DeviceStatus, DeviceType, NetworkDevice};

/// Session-lifetime device inventory, keyed by MAC. Devices are created on
/// first observation and only ever updated afterwards, never removed.
#[derive(Clone)]
pub struct DeviceRegistry {
    devices: Arc<DashMap<String, NetworkDevice>>,
    next_id: Arc<AtomicU64>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            devices: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Registry pre-populated with the mock fleet, with first-seen times
    /// backdated the way the dashboard demo data is.
    pub fn with_seed_devices() -> Self {
        let registry = Self::new();
        let now = Utc::now();
        let seed = [
            ("192.168.0.1", "00:11:22:33:44:55", "Main Router", DeviceType::Router, Duration::days(30)),
            ("192.168.0.101", "AA:BB:CC:DD:EE:FF", "Your Laptop", DeviceType::Laptop, Duration::hours(5)),
            ("192.168.0.102", "11:22:33:44:55:66", "iPhone 12", DeviceType::Smartphone, Duration::hours(2)),
            ("192.168.0.103", "22:33:44:55:66:77", "Smart TV", DeviceType::SmartTv, Duration::hours(12)),
            ("192.168.0.104", "33:44:55:66:77:88", "Smart Thermostat", DeviceType::Iot, Duration::days(10)),
        ];

        for (ip, mac, name, device_type, age) in seed {
            let id = registry.next_id.fetch_add(1, Ordering::Relaxed);
            registry.devices.insert(
                mac.to_string(),
                NetworkDevice {
                    id,
                    ip: ip.to_string(),
                    mac: mac.to_string(),
                    name: name.to_string(),
                    device_type,
                    status: DeviceStatus::Online,
                    first_seen: now - age,
                    last_seen: now,
                },
            );
        }

        registry
    }

    /// Folds one sighting into the inventory. Returns the tracked device and
    /// whether this was its first observation.
    pub fn observe(&self, sighting: DeviceSighting) -> (NetworkDevice, bool) {
        let now = Utc::now();
        let mut is_new = false;

        let entry = self
            .devices
            .entry(sighting.mac.clone())
            .and_modify(|d| {
                d.ip = sighting.ip.clone();
                d.status = DeviceStatus::Online;
                d.last_seen = now;
            })
            .or_insert_with(|| {
                is_new = true;
                // Untyped sightings get classified from what the scan saw.
                let device_type = if sighting.device_type == DeviceType::Unknown {
                    OuiDb::identify(&sighting.ip, &sighting.mac, &sighting.name)
                } else {
                    sighting.device_type
                };
                NetworkDevice {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed),
                    ip: sighting.ip.clone(),
                    mac: sighting.mac.clone(),
                    name: sighting.name.clone(),
                    device_type,
                    status: DeviceStatus::Online,
                    first_seen: now,
                    last_seen: now,
                }
            });

        (entry.value().clone(), is_new)
    }

    /// Flips devices absent from the latest scan to offline. `seen_macs`
    /// holds the MACs sighted this tick.
    pub fn mark_absent(&self, seen_macs: &HashSet<String>) {
        for mut entry in self.devices.iter_mut() {
            if !seen_macs.contains(entry.key()) {
                entry.value_mut().status = DeviceStatus::Offline;
            }
        }
    }

    /// Snapshot of the inventory, sorted by the last IP octet the way the
    /// device list renders it.
    pub fn list(&self) -> Vec<NetworkDevice> {
        let mut devices: Vec<NetworkDevice> =
            self.devices.iter().map(|e| e.value().clone()).collect();
        devices.sort_by_key(|d| {
            d.ip.split('.')
                .last()
                .and_then(|o| o.parse::<u8>().ok())
                .unwrap_or(0)
        });
        devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn online_count(&self) -> usize {
        self.devices
            .iter()
            .filter(|e| e.value().status == DeviceStatus::Online)
            .count()
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
