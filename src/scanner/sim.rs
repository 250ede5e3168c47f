use chrono::Utc;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::scanner::{DeviceSighting, DeviceType, ScanResult, TrafficSample};
use crate::security::AttackType;

pub const GATEWAY_IP: &str = "192.168.0.1";
pub const LOCAL_IP: &str = "192.168.0.164";
/// Default target for generated attacks: the mock workstation.
pub const DEFAULT_TARGET_IP: &str = "192.168.0.101";

/// Source of all fabricated telemetry. Monitors only ever talk to this
/// trait, so tests can substitute deterministic fixtures for randomness.
pub trait TelemetrySource: Send + Sync {
    fn scan_network(&self) -> ScanResult;
    fn sample_traffic(&self) -> TrafficSample;
    /// Decides whether this tick produces an attack; returns the category
    /// and source address when it does.
    fn next_attack(&self) -> Option<(AttackType, String)>;
}

/// Rand-backed stand-in for a real scanner. Emits a fixed five-device fleet,
/// occasionally invents a new device, and fires attacks from a restricted
/// category subset roughly 30% of the time.
pub struct SimulatedTelemetry;

impl SimulatedTelemetry {
    fn fleet() -> Vec<DeviceSighting> {
        vec![
            DeviceSighting {
                ip: "192.168.0.1".to_string(),
                mac: "00:11:22:33:44:55".to_string(),
                name: "Main Router".to_string(),
                device_type: DeviceType::Router,
            },
            DeviceSighting {
                ip: "192.168.0.101".to_string(),
                mac: "AA:BB:CC:DD:EE:FF".to_string(),
                name: "Your Laptop".to_string(),
                device_type: DeviceType::Laptop,
            },
            DeviceSighting {
                ip: "192.168.0.102".to_string(),
                mac: "11:22:33:44:55:66".to_string(),
                name: "iPhone 12".to_string(),
                device_type: DeviceType::Smartphone,
            },
            DeviceSighting {
                ip: "192.168.0.103".to_string(),
                mac: "22:33:44:55:66:77".to_string(),
                name: "Smart TV".to_string(),
                device_type: DeviceType::SmartTv,
            },
            DeviceSighting {
                ip: "192.168.0.104".to_string(),
                mac: "33:44:55:66:77:88".to_string(),
                name: "Smart Thermostat".to_string(),
                device_type: DeviceType::Iot,
            },
        ]
    }
}

impl TelemetrySource for SimulatedTelemetry {
    fn scan_network(&self) -> ScanResult {
        let mut rng = thread_rng();

        // The gateway answers every probe; the rest of the fleet shows up
        // with the refresh probability, so devices drift offline and back.
        let mut devices: Vec<DeviceSighting> = Self::fleet()
            .into_iter()
            .filter(|d| d.device_type == DeviceType::Router || rng.gen::<f64>() < 0.7)
            .collect();

        // Sometimes a device nobody has seen before shows up. It arrives
        // untyped with a known vendor prefix; the registry classifies it.
        if rng.gen::<f64>() > 0.8 {
            let prefixes = [
                "00:11:22", "11:22:33", "AA:BB:CC", "22:33:44", "33:44:55", "44:55:66",
                "55:66:77", "66:77:88",
            ];
            let prefix = prefixes.choose(&mut rng).unwrap_or(&"00:11:22");
            let mac = format!(
                "{}:{:02X}:{:02X}:{:02X}",
                prefix,
                rng.gen::<u8>(),
                rng.gen::<u8>(),
                rng.gen::<u8>()
            );

            devices.push(DeviceSighting {
                ip: format!("192.168.0.{}", rng.gen_range(110..200)),
                mac,
                name: "New Device".to_string(),
                device_type: DeviceType::Unknown,
            });
        }

        ScanResult {
            timestamp: Utc::now(),
            devices,
            gateway_ip: GATEWAY_IP.to_string(),
            local_ip: LOCAL_IP.to_string(),
            scan_duration_ms: rng.gen_range(800..1300),
        }
    }

    fn sample_traffic(&self) -> TrafficSample {
        let mut rng = thread_rng();
        TrafficSample {
            timestamp: Utc::now(),
            inbound: rng.gen_range(0..1024 * 1024),
            outbound: rng.gen_range(0..1024 * 512),
            total_connections: rng.gen_range(10..60),
        }
    }

    fn next_attack(&self) -> Option<(AttackType, String)> {
        let mut rng = thread_rng();
        if rng.gen::<f64>() <= 0.7 {
            return None;
        }

        // Background noise stays in the low-drama subset; the showier
        // categories only come from the manual trigger.
        let categories = [
            AttackType::PortScan,
            AttackType::BruteForce,
            AttackType::Malware,
            AttackType::Unknown,
        ];
        let attack = *categories.choose(&mut rng).unwrap_or(&AttackType::Unknown);
        let source_ip = format!("192.168.0.{}", rng.gen_range(100..200));

        Some((attack, source_ip))
    }
}
