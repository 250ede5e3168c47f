use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::{Duration, Utc};
use tokio::sync::broadcast;

use crate::error::WardenError;
use crate::security::classifier::AttackProfile;
use crate::security::{AttackType, EventDraft, SecurityEvent, Severity};

/// Snapshot size pushed to subscribers on every change.
const SNAPSHOT_LIMIT: usize = 100;

/// In-memory store of security events for one process run. Events are kept
/// in insertion order; ids come from a monotonic counter and are never
/// reused. Consumers always get clones, never references into the store.
#[derive(Clone)]
pub struct SecurityEventStore {
    events: Arc<RwLock<Vec<SecurityEvent>>>,
    next_id: Arc<AtomicU64>,
    changed: broadcast::Sender<Vec<SecurityEvent>>,
    retention: usize,
}

impl SecurityEventStore {
    pub fn new(retention: usize) -> Self {
        let (changed, _) = broadcast::channel(16);
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            changed,
            retention,
        }
    }

    /// Store pre-populated with the demo events the dashboard ships with.
    pub fn with_seed_events(retention: usize) -> Self {
        let store = Self::new(retention);
        let now = Utc::now();

        store.append(EventDraft {
            timestamp: now - Duration::minutes(15),
            severity: Severity::Warning,
            title: "Unusual Login Attempts".to_string(),
            description: "Multiple failed login attempts detected from IP 192.168.0.110"
                .to_string(),
            source_ip: Some("192.168.0.110".to_string()),
            target_ip: Some("192.168.0.101".to_string()),
            attack_type: Some(AttackType::BruteForce),
            recommendation: Some(
                "Monitor the source IP for further suspicious activity".to_string(),
            ),
            resolved: false,
        });

        store.append(EventDraft {
            timestamp: now - Duration::minutes(35),
            severity: Severity::Info,
            title: "New Device Connected".to_string(),
            description: "A new device has connected to the network".to_string(),
            source_ip: Some("192.168.0.112".to_string()),
            target_ip: None,
            attack_type: None,
            recommendation: Some("Verify that this device is authorized".to_string()),
            resolved: true,
        });

        store.append(EventDraft {
            timestamp: now - Duration::hours(2),
            severity: Severity::Critical,
            title: "Possible ARP Spoofing Attack".to_string(),
            description: "Detected conflicting ARP entries which could indicate ARP spoofing"
                .to_string(),
            source_ip: Some("192.168.0.115".to_string()),
            target_ip: None,
            attack_type: Some(AttackType::ArpSpoofing),
            recommendation: Some("Isolate the suspicious device and investigate".to_string()),
            resolved: false,
        });

        store
    }

    /// Up to `limit` events, newest first. Equal timestamps keep insertion
    /// order (stable sort over the insertion-ordered vec).
    pub fn list(&self, limit: usize) -> Vec<SecurityEvent> {
        let events = self.events.read().expect("event store lock poisoned");
        let mut snapshot: Vec<SecurityEvent> = events.clone();
        snapshot.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        snapshot.truncate(limit);
        snapshot
    }

    pub fn len(&self) -> usize {
        self.events.read().expect("event store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assigns a fresh id, inserts, and returns the stored copy. Insertion
    /// never fails; once the store grows past its retention cap the
    /// oldest-inserted events are dropped.
    pub fn append(&self, draft: EventDraft) -> SecurityEvent {
        let event = SecurityEvent {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            timestamp: draft.timestamp,
            severity: draft.severity,
            title: draft.title,
            description: draft.description,
            source_ip: draft.source_ip,
            target_ip: draft.target_ip,
            attack_type: draft.attack_type,
            recommendation: draft.recommendation,
            resolved: draft.resolved,
        };

        {
            let mut events = self.events.write().expect("event store lock poisoned");
            events.push(event.clone());
            if events.len() > self.retention {
                let excess = events.len() - self.retention;
                events.drain(0..excess);
            }
        }

        self.notify();
        event
    }

    /// Marks an event resolved. Idempotent: resolving an already-resolved
    /// event returns it unchanged. Unknown ids leave the store untouched.
    pub fn resolve(&self, id: u64) -> Result<SecurityEvent, WardenError> {
        let updated = {
            let mut events = self.events.write().expect("event store lock poisoned");
            let event = events
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or(WardenError::EventNotFound(id))?;
            event.resolved = true;
            event.clone()
        };

        self.notify();
        Ok(updated)
    }

    /// Builds the descriptive payload for `attack` and appends it as an
    /// unresolved event stamped with the current time. The sole write path
    /// for attack-simulation events.
    pub fn simulate(
        &self,
        attack: AttackType,
        source_ip: &str,
        target_ip: &str,
    ) -> SecurityEvent {
        let profile = AttackProfile::classify(attack, source_ip, target_ip);

        self.append(EventDraft {
            timestamp: Utc::now(),
            severity: profile.severity,
            title: profile.title.to_string(),
            description: profile.description,
            source_ip: Some(source_ip.to_string()),
            target_ip: Some(target_ip.to_string()),
            attack_type: Some(attack),
            recommendation: Some(profile.recommendation.to_string()),
            resolved: false,
        })
    }

    /// Push-on-change feed: receivers get a fresh snapshot after every
    /// append or resolve.
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<SecurityEvent>> {
        self.changed.subscribe()
    }

    fn notify(&self) {
        // No receivers is fine; send only fails when nobody is listening.
        let _ = self.changed.send(self.list(SNAPSHOT_LIMIT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, severity: Severity) -> EventDraft {
        EventDraft {
            timestamp: Utc::now(),
            severity,
            title: title.to_string(),
            description: "test event".to_string(),
            source_ip: None,
            target_ip: None,
            attack_type: None,
            recommendation: None,
            resolved: false,
        }
    }

    #[test]
    fn test_empty_store_lists_empty() {
        let store = SecurityEventStore::new(1000);
        assert!(store.list(10).is_empty());
    }

    #[test]
    fn test_append_assigns_unique_ids() {
        let store = SecurityEventStore::new(1000);
        let mut seen = std::collections::HashSet::new();
        for i in 0..50 {
            let event = store.append(draft(&format!("event {}", i), Severity::Info));
            assert!(seen.insert(event.id));
        }
    }

    #[test]
    fn test_list_sorts_newest_first() {
        let store = SecurityEventStore::new(1000);
        let now = Utc::now();

        let mut old = draft("old", Severity::Info);
        old.timestamp = now - Duration::hours(1);
        store.append(old);

        let mut fresh = draft("fresh", Severity::Info);
        fresh.timestamp = now;
        store.append(fresh);

        let listed = store.list(10);
        assert_eq!(listed[0].title, "fresh");
        assert_eq!(listed[1].title, "old");
    }

    #[test]
    fn test_list_preserves_insertion_order_for_ties() {
        let store = SecurityEventStore::new(1000);
        let stamp = Utc::now();
        for i in 0..5 {
            let mut d = draft(&format!("tie {}", i), Severity::Info);
            d.timestamp = stamp;
            store.append(d);
        }

        let listed = store.list(10);
        let titles: Vec<_> = listed.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["tie 0", "tie 1", "tie 2", "tie 3", "tie 4"]);
    }

    #[test]
    fn test_list_respects_limit() {
        let store = SecurityEventStore::new(1000);
        for i in 0..20 {
            store.append(draft(&format!("event {}", i), Severity::Info));
        }
        assert_eq!(store.list(7).len(), 7);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let store = SecurityEventStore::new(1000);
        let event = store.append(draft("resolvable", Severity::Warning));

        let first = store.resolve(event.id).unwrap();
        assert!(first.resolved);

        let second = store.resolve(event.id).unwrap();
        assert!(second.resolved);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_id_is_not_found() {
        let store = SecurityEventStore::new(1000);
        store.append(draft("only", Severity::Info));

        let err = store.resolve(9999).unwrap_err();
        assert!(matches!(err, WardenError::EventNotFound(9999)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_retention_cap_drops_oldest() {
        let store = SecurityEventStore::new(5);
        for i in 0..8 {
            store.append(draft(&format!("event {}", i), Severity::Info));
        }
        assert_eq!(store.len(), 5);
        let listed = store.list(10);
        assert!(listed.iter().all(|e| e.title != "event 0"));
        assert!(listed.iter().any(|e| e.title == "event 7"));
    }

    #[test]
    fn test_full_alert_lifecycle() {
        let store = SecurityEventStore::new(1000);
        assert!(store.list(10).is_empty());

        let mut arp = draft("Possible ARP Spoofing Attack", Severity::Critical);
        arp.source_ip = Some("192.168.0.115".to_string());
        arp.attack_type = Some(AttackType::ArpSpoofing);
        let stored = store.append(arp);

        let listed = store.list(10);
        assert_eq!(listed.len(), 1);
        assert!(!listed[0].resolved);
        assert_eq!(listed[0].source_ip.as_deref(), Some("192.168.0.115"));

        store.resolve(stored.id).unwrap();
        assert!(store.list(10)[0].resolved);

        let simulated = store.simulate(AttackType::Ddos, "10.0.0.5", "10.0.0.1");
        assert_eq!(simulated.severity, Severity::Critical);
        assert_eq!(simulated.attack_type, Some(AttackType::Ddos));
        assert_eq!(simulated.title, "Possible DDoS Attack");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_returns_copies() {
        let store = SecurityEventStore::new(1000);
        let event = store.append(draft("immutable outside", Severity::Info));

        let mut snapshot = store.list(10);
        snapshot[0].resolved = true;

        // Mutating the snapshot must not leak into the store.
        assert!(!store.list(10)[0].resolved);
        assert_eq!(store.list(10)[0].id, event.id);
    }

    #[tokio::test]
    async fn test_subscribers_get_snapshot_on_change() {
        let store = SecurityEventStore::new(1000);
        let mut rx = store.subscribe();

        store.append(draft("pushed", Severity::Info));

        let snapshot = rx.recv().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "pushed");
    }

    #[test]
    fn test_seed_events_shape() {
        let store = SecurityEventStore::with_seed_events(1000);
        let listed = store.list(10);
        assert_eq!(listed.len(), 3);
        // Newest first: the 15-minute-old brute force warning leads.
        assert_eq!(listed[0].title, "Unusual Login Attempts");
        assert_eq!(listed[2].severity, Severity::Critical);
        assert!(listed.iter().any(|e| e.resolved));
    }
}
