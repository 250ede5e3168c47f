pub mod monitor;
pub mod oui;
pub mod registry;
pub mod sim;
pub mod traffic;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Smartphone,
    Laptop,
    Desktop,
    Tablet,
    SmartTv,
    Iot,
    Router,
    Unknown,
}

impl DeviceType {
    pub fn label(self) -> &'static str {
        match self {
            DeviceType::Smartphone => "Smartphone",
            DeviceType::Laptop => "Laptop",
            DeviceType::Desktop => "Desktop",
            DeviceType::Tablet => "Tablet",
            DeviceType::SmartTv => "Smart TV",
            DeviceType::Iot => "IoT Device",
            DeviceType::Router => "Router",
            DeviceType::Unknown => "Unknown Device",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
}

/// A device as tracked by the registry: created on first observation,
/// `last_seen`/`status` refreshed on every poll, never deleted in-session.
#[derive(Serialize, Clone, Debug)]
pub struct NetworkDevice {
    pub id: u64,
    pub ip: String,
    pub mac: String,
    pub name: String,
    pub device_type: DeviceType,
    pub status: DeviceStatus,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

/// One device observation from a scan, before the registry assigns identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceSighting {
    pub ip: String,
    pub mac: String,
    pub name: String,
    pub device_type: DeviceType,
}

#[derive(Clone, Debug)]
pub struct ScanResult {
    pub timestamp: DateTime<Utc>,
    pub devices: Vec<DeviceSighting>,
    pub gateway_ip: String,
    pub local_ip: String,
    pub scan_duration_ms: u64,
}

#[derive(Serialize, Clone, Debug)]
pub struct TrafficSample {
    pub timestamp: DateTime<Utc>,
    pub inbound: u64,
    pub outbound: u64,
    pub total_connections: u32,
}
