use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::scanner::TrafficSample;

/// Rolling window of traffic counters, one sample per scan tick.
#[derive(Clone)]
pub struct TrafficStore {
    samples: Arc<RwLock<VecDeque<TrafficSample>>>,
    window: usize,
}

impl TrafficStore {
    pub fn new(window: usize) -> Self {
        Self {
            samples: Arc::new(RwLock::new(VecDeque::new())),
            window,
        }
    }

    pub fn record(&self, sample: TrafficSample) {
        let mut samples = self.samples.write().expect("traffic store lock poisoned");
        samples.push_back(sample);
        while samples.len() > self.window {
            samples.pop_front();
        }
    }

    /// The window oldest-first, ready for chart rendering.
    pub fn history(&self) -> Vec<TrafficSample> {
        self.samples
            .read()
            .expect("traffic store lock poisoned")
            .iter()
            .cloned()
            .collect()
    }

    pub fn latest(&self) -> Option<TrafficSample> {
        self.samples
            .read()
            .expect("traffic store lock poisoned")
            .back()
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(inbound: u64) -> TrafficSample {
        TrafficSample {
            timestamp: Utc::now(),
            inbound,
            outbound: inbound / 2,
            total_connections: 12,
        }
    }

    #[test]
    fn test_empty_store() {
        let store = TrafficStore::new(60);
        assert!(store.history().is_empty());
        assert!(store.latest().is_none());
    }

    #[test]
    fn test_window_cap_drops_oldest() {
        let store = TrafficStore::new(3);
        for i in 0..5 {
            store.record(sample(i));
        }

        let history = store.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].inbound, 2);
        assert_eq!(store.latest().unwrap().inbound, 4);
    }
}
