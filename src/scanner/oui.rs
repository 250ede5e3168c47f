use crate::scanner::DeviceType;

pub struct OuiDb;

impl OuiDb {
    /// Vendor lookup keyed on the first three MAC octets. A real deployment
    /// would carry the full IEEE OUI registry; this table covers the vendors
    /// the simulated fleet emits.
    pub fn lookup(mac: &str) -> Option<&'static str> {
        let clean = mac.replace(':', "").replace('-', "").to_uppercase();
        // get() keeps this total for short or non-ASCII input
        let prefix = clean.get(0..6)?;

        match prefix {
            "001122" | "112233" => Some("Apple Inc."),
            "AABBCC" => Some("Samsung Electronics"),
            "223344" => Some("Sony Corporation"),
            "334455" => Some("Google Inc."),
            "445566" => Some("Microsoft Corporation"),
            "556677" => Some("Amazon Technologies Inc."),
            "667788" => Some("LG Electronics"),
            _ => None,
        }
    }

    /// Best-effort device classification from network identity. The gateway
    /// address wins outright, then the vendor table, then name heuristics.
    pub fn identify(ip: &str, mac: &str, name: &str) -> DeviceType {
        if ip == "192.168.0.1" {
            return DeviceType::Router;
        }

        if let Some(vendor) = Self::lookup(mac) {
            if vendor.contains("Apple") || vendor.contains("Samsung") {
                return DeviceType::Smartphone;
            }
            if vendor.contains("Sony") || vendor.contains("LG") {
                return DeviceType::SmartTv;
            }
            if vendor.contains("Google") || vendor.contains("Amazon") {
                return DeviceType::Iot;
            }
            if vendor.contains("Microsoft") {
                return DeviceType::Laptop;
            }
        }

        let lower = name.to_lowercase();
        if lower.contains("iphone") || lower.contains("android") || lower.contains("phone") {
            return DeviceType::Smartphone;
        }
        if lower.contains("laptop") || lower.contains("macbook") {
            return DeviceType::Laptop;
        }
        if lower.contains("tv") || lower.contains("television") {
            return DeviceType::SmartTv;
        }
        if lower.contains("router") || lower.contains("gateway") {
            return DeviceType::Router;
        }

        DeviceType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apple_prefix() {
        assert_eq!(OuiDb::lookup("00:11:22:33:44:55"), Some("Apple Inc."));
        assert_eq!(OuiDb::lookup("11-22-33-00-00-00"), Some("Apple Inc."));
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(OuiDb::lookup("FF:FF:FF:00:00:00"), None);
    }

    #[test]
    fn test_malformed_mac() {
        assert_eq!(OuiDb::lookup("123"), None);
    }

    #[test]
    fn test_non_ascii_mac_is_not_a_panic() {
        // 8 bytes, but byte offset 6 lands mid-character
        assert_eq!(OuiDb::lookup("🦀🦀"), None);
        assert_eq!(OuiDb::lookup("ａｂｃｄ"), None);
    }

    #[test]
    fn test_gateway_ip_wins() {
        assert_eq!(
            OuiDb::identify("192.168.0.1", "00:11:22:33:44:55", "Main Router"),
            DeviceType::Router
        );
    }

    #[test]
    fn test_vendor_classification() {
        assert_eq!(
            OuiDb::identify("192.168.0.102", "11:22:33:44:55:66", ""),
            DeviceType::Smartphone
        );
        assert_eq!(
            OuiDb::identify("192.168.0.103", "22:33:44:55:66:77", ""),
            DeviceType::SmartTv
        );
    }

    #[test]
    fn test_name_fallback() {
        assert_eq!(
            OuiDb::identify("192.168.0.150", "DE:AD:BE:EF:00:01", "Dave's MacBook"),
            DeviceType::Laptop
        );
        assert_eq!(
            OuiDb::identify("192.168.0.151", "DE:AD:BE:EF:00:02", "mystery box"),
            DeviceType::Unknown
        );
    }
}
