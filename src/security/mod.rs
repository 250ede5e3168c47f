pub mod classifier;
pub mod monitor;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// Closed set of simulated attack categories. The classifier matches
/// exhaustively on this, so a new variant without a mapping fails the build.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    PortScan,
    BruteForce,
    Ddos,
    ManInTheMiddle,
    DnsSpoofing,
    ArpSpoofing,
    Malware,
    Unknown,
}

impl AttackType {
    pub fn label(self) -> &'static str {
        match self {
            AttackType::PortScan => "port_scan",
            AttackType::BruteForce => "brute_force",
            AttackType::Ddos => "ddos",
            AttackType::ManInTheMiddle => "man_in_the_middle",
            AttackType::DnsSpoofing => "dns_spoofing",
            AttackType::ArpSpoofing => "arp_spoofing",
            AttackType::Malware => "malware",
            AttackType::Unknown => "unknown",
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct SecurityEvent {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub source_ip: Option<String>,
    pub target_ip: Option<String>,
    pub attack_type: Option<AttackType>,
    pub recommendation: Option<String>,
    /// The only mutable field. Transitions false -> true, never back.
    pub resolved: bool,
}

/// Event payload before the store assigns an id.
#[derive(Clone, Debug)]
pub struct EventDraft {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub source_ip: Option<String>,
    pub target_ip: Option<String>,
    pub attack_type: Option<AttackType>,
    pub recommendation: Option<String>,
    pub resolved: bool,
}
