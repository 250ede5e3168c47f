use std::env;
use std::time::Duration;

/// Runtime settings, read once at startup from the environment (with
/// `.env` support via dotenvy in main).
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub scan_interval: Duration,
    pub security_interval: Duration,
    pub event_retention: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: read_or("NETWARDEN_PORT", 8000),
            scan_interval: Duration::from_secs(read_or("NETWARDEN_SCAN_INTERVAL_SECS", 5)),
            security_interval: Duration::from_secs(read_or(
                "NETWARDEN_SECURITY_INTERVAL_SECS",
                10,
            )),
            event_retention: read_or("NETWARDEN_EVENT_RETENTION", 1000),
        }
    }
}

fn read_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Keys are namespaced, so a clean test env falls through to defaults.
        let cfg = Config::from_env();
        assert_eq!(cfg.scan_interval, Duration::from_secs(5));
        assert_eq!(cfg.security_interval, Duration::from_secs(10));
        assert_eq!(cfg.event_retention, 1000);
    }
}
