use crate::security::{AttackType, Severity};

/// Canned descriptive payload for a simulated attack category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackProfile {
    pub severity: Severity,
    pub title: &'static str,
    pub description: String,
    pub recommendation: &'static str,
}

impl AttackProfile {
    /// Pure lookup from category to severity, title, description and
    /// remediation hint. `source_ip` is embedded verbatim where the
    /// description references it; callers validate address syntax before
    /// getting here.
    pub fn classify(attack: AttackType, source_ip: &str, _target_ip: &str) -> Self {
        match attack {
            AttackType::PortScan => AttackProfile {
                severity: Severity::Warning,
                title: "Port Scan Detected",
                description: format!("Port scanning activity detected from IP {}", source_ip),
                recommendation: "Check firewall rules and consider blocking the source IP",
            },
            AttackType::BruteForce => AttackProfile {
                severity: Severity::Warning,
                title: "Brute Force Attack",
                description: format!("Multiple failed login attempts detected from IP {}", source_ip),
                recommendation: "Implement account lockout policies and stronger passwords",
            },
            AttackType::Ddos => AttackProfile {
                severity: Severity::Critical,
                title: "Possible DDoS Attack",
                description: format!("Unusual high traffic detected from IP {}", source_ip),
                recommendation: "Implement rate limiting and traffic filtering",
            },
            AttackType::ManInTheMiddle => AttackProfile {
                severity: Severity::Critical,
                title: "Possible MITM Attack",
                description: "Unexpected SSL certificate changes detected".to_string(),
                recommendation: "Verify all SSL certificates and use HTTPS everywhere",
            },
            AttackType::DnsSpoofing => AttackProfile {
                severity: Severity::Critical,
                title: "DNS Spoofing Attempt",
                description: "Unexpected DNS resolution detected".to_string(),
                recommendation: "Use secure DNS providers and consider DNSSEC",
            },
            AttackType::ArpSpoofing => AttackProfile {
                severity: Severity::Critical,
                title: "ARP Spoofing Attack",
                description: "Conflicting ARP entries detected on the network".to_string(),
                recommendation: "Use static ARP entries for critical systems",
            },
            AttackType::Malware => AttackProfile {
                severity: Severity::Critical,
                title: "Possible Malware Activity",
                description: format!("Suspicious traffic patterns detected from IP {}", source_ip),
                recommendation: "Isolate the affected device and run antivirus scan",
            },
            AttackType::Unknown => AttackProfile {
                severity: Severity::Warning,
                title: "Unknown Suspicious Activity",
                description: "Unusual network traffic patterns detected".to_string(),
                recommendation: "Monitor the network for further suspicious activity",
            },
        }
    }
}
